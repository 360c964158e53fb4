use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::super::args::{ApplyCommand, CommonArgs};
use crate::{
    config::{CONFIG_FILE_NAME, Config, load_config},
    overlay::{OverlayReport, Resolution, run_overlay},
    store::FileStore,
    typedoc::TypedocProject,
};

/// Outcome of `docloc apply`.
#[derive(Debug)]
pub struct ApplySummary {
    /// File the localized model was written to, `None` if nothing was written.
    pub output: Option<PathBuf>,
    pub report: OverlayReport,
}

pub fn apply(cmd: ApplyCommand) -> Result<ApplySummary> {
    let verbose = cmd.common.verbose;
    let start_dir = env::current_dir().context("Failed to read current directory")?;
    let config_result = load_config(&start_dir)?;

    if verbose && !config_result.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }

    let config = with_overrides(config_result.config, &cmd.common);
    config.validate()?;

    let mut model = TypedocProject::load(&cmd.model)?;
    let store = FileStore::new(&config.source_root);
    let report = run_overlay(model.project_mut(), &store, &config.overlay_options());

    let output = match (&cmd.output, report.enabled) {
        (Some(output), _) => Some(output.clone()),
        (None, true) => Some(cmd.model.clone()),
        // Disabled and in place: leave the model file alone.
        (None, false) => None,
    };

    if let Some(output) = &output {
        model.apply_comments();
        write_model(&model, output)?;
    }

    Ok(ApplySummary { output, report })
}

/// CLI args > config file > defaults.
fn with_overrides(mut config: Config, args: &CommonArgs) -> Config {
    if let Some(localize) = &args.localize {
        config.localize_root = Some(localize.to_string_lossy().to_string());
    }
    if let Some(source_root) = &args.source_root {
        config.source_root = source_root.to_string_lossy().to_string();
    }
    if let Some(name) = &args.global_functions_file {
        config.global_functions_file = name.clone();
    }
    if args.prepass {
        config.resolution = Resolution::Prepass;
    }
    config
}

fn write_model(model: &TypedocProject, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }
    model.save(output)
}
