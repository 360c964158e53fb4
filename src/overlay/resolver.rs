use std::{collections::HashMap, path::Path};

use serde_json::Value;

use super::{
    Resolution,
    comment::apply_entry,
    report::{AppliedOverlay, DocumentRequest, OverlayReport},
};
use crate::model::{Project, Reflection, ReflectionId, ReflectionKind, StoreKey};
use crate::store::{StoreAccessor, document_path};

/// Entry of a top-level symbol, i.e. `document[SymbolName]`.
#[derive(Debug)]
struct ActiveEntry {
    owner: ReflectionId,
    entry: Value,
}

/// Lookup context for members, threaded through every visit.
#[derive(Debug)]
enum DocumentScope {
    Sequential(Option<ActiveEntry>),
    Prepass(HashMap<ReflectionId, Value>),
}

impl DocumentScope {
    fn entry_for(&self, owner: ReflectionId) -> Option<&Value> {
        match self {
            DocumentScope::Sequential(active) => active
                .as_ref()
                .filter(|active| active.owner == owner)
                .map(|active| &active.entry),
            DocumentScope::Prepass(entries) => entries.get(&owner),
        }
    }
}

pub(super) struct Resolver<'a, S> {
    store: &'a S,
    root: &'a Path,
    global_functions: Option<Value>,
}

impl<'a, S: StoreAccessor> Resolver<'a, S> {
    pub(super) fn new(
        store: &'a S,
        root: &'a Path,
        global_functions_file: &str,
        report: &mut OverlayReport,
    ) -> Self {
        let global_functions = store.fetch_document(root, global_functions_file);
        report.documents.push(DocumentRequest {
            path: document_path(root, global_functions_file),
            found: global_functions.is_some(),
        });

        Self {
            store,
            root,
            global_functions,
        }
    }

    pub(super) fn run(
        &self,
        project: &mut Project,
        resolution: Resolution,
        report: &mut OverlayReport,
    ) {
        let mut scope = match resolution {
            Resolution::Sequential => DocumentScope::Sequential(None),
            Resolution::Prepass => DocumentScope::Prepass(self.load_all(project, report)),
        };

        for id in project.ids() {
            self.visit(project, id, &mut scope, report);
        }
    }

    fn load_all(
        &self,
        project: &Project,
        report: &mut OverlayReport,
    ) -> HashMap<ReflectionId, Value> {
        project
            .iter()
            .filter(|reflection| reflection.kind.is_top_level())
            .filter_map(|reflection| {
                self.load_entry(reflection, report)
                    .map(|entry| (reflection.id, entry))
            })
            .collect()
    }

    /// Load the symbol's document and take the entry named after it.
    fn load_entry(&self, reflection: &Reflection, report: &mut OverlayReport) -> Option<Value> {
        let mut directory = self.root.to_path_buf();
        if let Some(subdirectory) = reflection
            .source_file()
            .and_then(|file| self.store.derive_subdirectory(file))
        {
            directory.push(subdirectory);
        }

        let document = self.store.fetch_document(&directory, &reflection.name);
        report.documents.push(DocumentRequest {
            path: document_path(&directory, &reflection.name),
            found: document.is_some(),
        });

        document?.as_object_mut()?.remove(&reflection.name)
    }

    fn visit(
        &self,
        project: &mut Project,
        id: ReflectionId,
        scope: &mut DocumentScope,
        report: &mut OverlayReport,
    ) {
        let Some(reflection) = project.get(id) else {
            return;
        };
        report.visited += 1;

        if reflection.kind.is_top_level() {
            if let DocumentScope::Sequential(active) = scope {
                *active = self
                    .load_entry(reflection, report)
                    .map(|entry| ActiveEntry { owner: id, entry });
            }
            if let Some(entry) = scope.entry_for(id) {
                apply(project, id, entry, report);
            }
            return;
        }

        if let Some((target, entry)) = self.locate(project, reflection, scope) {
            apply(project, target, entry, report);
        }
    }

    /// Find the reflection to localize and its store entry.
    fn locate<'s>(
        &'s self,
        project: &Project,
        reflection: &Reflection,
        scope: &'s DocumentScope,
    ) -> Option<(ReflectionId, &'s Value)> {
        match reflection.kind {
            ReflectionKind::Property
            | ReflectionKind::CallSignature
            | ReflectionKind::EnumMember => {
                let parent = project.parent_of(reflection.id)?;
                if parent.kind == ReflectionKind::Function {
                    return None;
                }
                let StoreKey::Member(member_key) = reflection.kind.store_key() else {
                    return None;
                };
                let owner = enclosing_symbol(project, reflection)?;
                let entry = member_entry(scope.entry_for(owner)?, member_key, &reflection.name)?;
                Some((reflection.id, entry))
            }
            ReflectionKind::GetSignature | ReflectionKind::SetSignature => {
                let accessor = project.parent_of(reflection.id)?;
                let StoreKey::Member(member_key) = accessor.kind.store_key() else {
                    return None;
                };
                let StoreKey::AccessorDirection(direction) = reflection.kind.store_key() else {
                    return None;
                };
                let owner = enclosing_symbol(project, reflection)?;
                let entry = member_entry(scope.entry_for(owner)?, member_key, &accessor.name)?
                    .get(direction)?;
                Some((reflection.id, entry))
            }
            ReflectionKind::Function => {
                let entry = self.global_functions.as_ref()?.get(&reflection.name)?;
                let signature = *reflection.signatures.first()?;
                Some((signature, entry))
            }
            _ => None,
        }
    }
}

/// The top-level symbol a member belongs to.
///
/// Signatures hang below an extra node (method or accessor), so their
/// enclosing symbol is two hops up.
fn enclosing_symbol(project: &Project, reflection: &Reflection) -> Option<ReflectionId> {
    let parent = project.parent_of(reflection.id)?;
    if reflection.kind.is_signature() {
        project.parent_of(parent.id).map(|r| r.id)
    } else {
        Some(parent.id)
    }
}

fn member_entry<'v>(
    entry: &'v Value,
    member_key: &str,
    member_name: &str,
) -> Option<&'v Value> {
    entry.get(member_key)?.get(member_name)
}

fn apply(
    project: &mut Project,
    target: ReflectionId,
    entry: &Value,
    report: &mut OverlayReport,
) {
    let Some(reflection) = project.get_mut(target) else {
        return;
    };
    let fields = apply_entry(reflection, entry);
    if fields.any() {
        report.applied.push(AppliedOverlay {
            id: target,
            name: reflection.name.clone(),
            kind: reflection.kind,
            fields,
        });
    }
}
