use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::overlay::{OverlayOptions, Resolution};
use crate::store::GLOBAL_FUNCTIONS_FILE_NAME;

pub const CONFIG_FILE_NAME: &str = ".doclocrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Root directory of the localization store. No root, no overlay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localize_root: Option<String>,
    #[serde(default = "default_global_functions_file")]
    pub global_functions_file: String,
    /// Source directory mirrored by the store's sub-directories.
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default)]
    pub resolution: Resolution,
}

fn default_global_functions_file() -> String {
    GLOBAL_FUNCTIONS_FILE_NAME.to_string()
}

fn default_source_root() -> String {
    "src".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            localize_root: None,
            global_functions_file: default_global_functions_file(),
            source_root: default_source_root(),
            resolution: Resolution::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// `globalFunctionsFile` is a base name inside the store root, so it must
    /// be non-empty and free of path separators.
    pub fn validate(&self) -> Result<()> {
        let name = &self.global_functions_file;
        if name.trim().is_empty() {
            bail!("'globalFunctionsFile' must not be empty");
        }
        if name.contains('/') || name.contains('\\') {
            bail!(
                "'globalFunctionsFile' must be a file name without directories: \"{}\"",
                name
            );
        }
        Ok(())
    }

    pub fn overlay_options(&self) -> OverlayOptions {
        OverlayOptions {
            localize_root: self.localize_root.as_ref().map(PathBuf::from),
            global_functions_file: self.global_functions_file.clone(),
            resolution: self.resolution,
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config {
        localize_root: Some("./l10n".to_string()),
        ..Default::default()
    };
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
