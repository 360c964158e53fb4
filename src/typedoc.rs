//! TypeDoc JSON project adapter.
//!
//! Reads the output of `typedoc --json` into a flat [`Project`] and writes
//! localized comments back into the original JSON, leaving everything else
//! exactly as the generator produced it (key order included).

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use crate::model::{Comment, Project, ReflectionId, ReflectionKind, SourceReference};
use crate::overlay::comment::{COMMENT, SHORT_TEXT, TEXT};

const CHILDREN: &str = "children";
const SIGNATURES: &str = "signatures";
const GET_SIGNATURE: &str = "getSignature";
const SET_SIGNATURE: &str = "setSignature";

/// A TypeDoc JSON model together with its flattened reflection table.
#[derive(Debug, Clone)]
pub struct TypedocProject {
    json: Value,
    project: Project,
    /// JSON pointer of every reflection, indexed by `ReflectionId`.
    pointers: Vec<String>,
}

impl TypedocProject {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read model file: {:?}", path))?;
        Self::from_json(&content).with_context(|| format!("Failed to load model file: {:?}", path))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let json: Value = serde_json::from_str(content).context("Invalid JSON")?;
        Self::from_value(json)
    }

    pub fn from_value(json: Value) -> Result<Self> {
        if !json.is_object() {
            bail!("TypeDoc model must be a JSON object");
        }

        let mut builder = Builder::default();
        builder.visit(&json, String::new(), None, false);
        if builder.project.is_empty() {
            bail!("TypeDoc model has no root reflection (missing 'name' or 'kind')");
        }

        Ok(Self {
            json,
            project: builder.project,
            pointers: builder.pointers,
        })
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn project_mut(&mut self) -> &mut Project {
        &mut self.project
    }

    /// Copy every reflection's comment text back into the JSON.
    pub fn apply_comments(&mut self) {
        for reflection in self.project.iter() {
            let Some(comment) = &reflection.comment else {
                continue;
            };
            let Some(node) = self
                .pointers
                .get(reflection.id.0)
                .and_then(|pointer| self.json.pointer_mut(pointer))
            else {
                continue;
            };
            let Some(target) = node.get_mut(COMMENT).and_then(Value::as_object_mut) else {
                continue;
            };

            if let Some(short_text) = &comment.short_text {
                target.insert(SHORT_TEXT.to_string(), Value::String(short_text.clone()));
            }
            if let Some(text) = &comment.text {
                target.insert(TEXT.to_string(), Value::String(text.clone()));
            }
        }
    }

    pub fn json(&self) -> &Value {
        &self.json
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.json).context("Failed to serialize model")
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let mut content = self.to_json_pretty()?;
        content.push('\n');
        fs::write(path, content).with_context(|| format!("Failed to write model file: {:?}", path))
    }
}

#[derive(Default)]
struct Builder {
    project: Project,
    pointers: Vec<String>,
}

impl Builder {
    /// Add `node` and its subtree, pre-order: the node, its signatures,
    /// accessor signatures, then children.
    fn visit(
        &mut self,
        node: &Value,
        pointer: String,
        parent: Option<ReflectionId>,
        is_signature: bool,
    ) {
        let Some(object) = node.as_object() else {
            return;
        };
        let (Some(name), Some(kind)) = (
            object.get("name").and_then(Value::as_str),
            object.get("kind").and_then(Value::as_u64),
        ) else {
            return;
        };
        let kind = ReflectionKind::from_number(u32::try_from(kind).unwrap_or(u32::MAX));

        let id = match parent {
            Some(owner) if is_signature => self.project.add_signature(owner, kind, name),
            _ => self.project.add(kind, name, parent),
        };
        self.pointers.push(pointer.clone());

        if let Some(reflection) = self.project.get_mut(id) {
            reflection.sources = read_sources(object);
            reflection.comment = read_comment(object);
        }

        for key in [SIGNATURES, GET_SIGNATURE, SET_SIGNATURE] {
            match object.get(key) {
                Some(Value::Array(items)) => {
                    for (index, item) in items.iter().enumerate() {
                        self.visit(item, format!("{}/{}/{}", pointer, key, index), Some(id), true);
                    }
                }
                Some(item @ Value::Object(_)) => {
                    self.visit(item, format!("{}/{}", pointer, key), Some(id), true);
                }
                _ => {}
            }
        }

        if let Some(Value::Array(children)) = object.get(CHILDREN) {
            for (index, child) in children.iter().enumerate() {
                self.visit(child, format!("{}/{}/{}", pointer, CHILDREN, index), Some(id), false);
            }
        }
    }
}

fn read_sources(object: &Map<String, Value>) -> Vec<SourceReference> {
    let Some(Value::Array(sources)) = object.get("sources") else {
        return Vec::new();
    };
    sources
        .iter()
        .filter_map(|source| {
            let file_name = source.get("fileName")?.as_str()?;
            let line = source
                .get("line")
                .and_then(Value::as_u64)
                .and_then(|line| usize::try_from(line).ok());
            Some(SourceReference {
                file_name: file_name.to_string(),
                line,
            })
        })
        .collect()
}

fn read_comment(object: &Map<String, Value>) -> Option<Comment> {
    let comment = object.get(COMMENT)?.as_object()?;
    Some(Comment {
        short_text: comment.get(SHORT_TEXT).and_then(Value::as_str).map(String::from),
        text: comment.get(TEXT).and_then(Value::as_str).map(String::from),
    })
}
