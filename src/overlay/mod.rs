//! Overlay of localized comments onto a documentation model.
//!
//! One pass visits every reflection in table order and dispatches on its kind:
//!
//! - Class / Interface / Enum load `<root>/<subdir>/<Name>.json`; the entry
//!   named after the symbol localizes the symbol itself and becomes the
//!   lookup context for its members.
//! - Property / EnumMember / CallSignature read
//!   `entry[memberKey][memberName]` from their enclosing symbol's context.
//! - Get / Set signatures read `entry["property"][accessorName]["get"|"set"]`.
//! - Function reads `<root>/<globalFunctions>.json[name]` and localizes its
//!   first signature.
//!
//! Nothing in here returns an error: missing data means no overlay.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::Project;
use crate::store::{GLOBAL_FUNCTIONS_FILE_NAME, StoreAccessor};

pub mod comment;
mod report;
mod resolver;

pub use comment::{LocalizedComment, ReplacedFields};
pub use report::{AppliedOverlay, DocumentRequest, OverlayReport};

/// How top-level documents are scoped during a pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// One active document, replaced each time a top-level symbol is visited.
    /// Members visited before their enclosing symbol get no overlay.
    #[default]
    Sequential,
    /// Every top-level document is loaded before the pass, so table order
    /// does not matter.
    Prepass,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayOptions {
    /// Root of the localization store. `None` disables the overlay.
    pub localize_root: Option<PathBuf>,
    /// Base name of the free-function document under the root.
    pub global_functions_file: String,
    pub resolution: Resolution,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            localize_root: None,
            global_functions_file: GLOBAL_FUNCTIONS_FILE_NAME.to_string(),
            resolution: Resolution::default(),
        }
    }
}

impl OverlayOptions {
    pub fn with_root(localize_root: impl Into<PathBuf>) -> Self {
        Self {
            localize_root: Some(localize_root.into()),
            ..Default::default()
        }
    }
}

/// Run one overlay pass over `project`, replacing comment text in place.
pub fn run_overlay<S: StoreAccessor>(
    project: &mut Project,
    store: &S,
    options: &OverlayOptions,
) -> OverlayReport {
    let Some(root) = options.localize_root.as_deref() else {
        return OverlayReport::disabled();
    };

    let mut report = OverlayReport {
        enabled: true,
        ..Default::default()
    };
    let resolver =
        resolver::Resolver::new(store, root, &options.global_functions_file, &mut report);
    resolver.run(project, options.resolution, &mut report);
    report.warnings = store.take_warnings();
    report
}
