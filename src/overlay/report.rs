use std::path::PathBuf;

use super::comment::ReplacedFields;
use crate::model::{ReflectionId, ReflectionKind};
use crate::store::StoreWarning;

/// A reflection whose comment was replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedOverlay {
    /// Reflection that received the text (the first signature for functions).
    pub id: ReflectionId,
    pub name: String,
    pub kind: ReflectionKind,
    pub fields: ReplacedFields,
}

/// A store document the run asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRequest {
    pub path: PathBuf,
    pub found: bool,
}

/// What an overlay pass did. Purely informational.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayReport {
    /// False when no localization root was configured.
    pub enabled: bool,
    pub visited: usize,
    pub applied: Vec<AppliedOverlay>,
    pub documents: Vec<DocumentRequest>,
    pub warnings: Vec<StoreWarning>,
}

impl OverlayReport {
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Total number of comment slots replaced.
    pub fn replaced_count(&self) -> usize {
        self.applied.iter().map(|a| a.fields.count()).sum()
    }

    pub fn documents_found(&self) -> usize {
        self.documents.iter().filter(|d| d.found).count()
    }
}
