//! In-memory documentation model.
//!
//! The host generator's symbol tree is flattened into a table of
//! [`Reflection`]s. Parent and signature links are [`ReflectionId`]s into that
//! table, so nodes never own each other.

pub mod kind;

pub use kind::{ReflectionKind, StoreKey};

/// Index of a reflection in its [`Project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReflectionId(pub usize);

/// Comment attached to a reflection.
///
/// `None` means the generator did not produce that slot. The overlay only
/// ever replaces slots that are `Some`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    pub short_text: Option<String>,
    pub text: Option<String>,
}

impl Comment {
    pub fn new(short_text: Option<&str>, text: Option<&str>) -> Self {
        Self {
            short_text: short_text.map(String::from),
            text: text.map(String::from),
        }
    }
}

/// Where a reflection was declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReference {
    pub file_name: String,
    pub line: Option<usize>,
}

impl SourceReference {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflection {
    pub id: ReflectionId,
    pub kind: ReflectionKind,
    pub name: String,
    pub parent: Option<ReflectionId>,
    pub sources: Vec<SourceReference>,
    pub signatures: Vec<ReflectionId>,
    pub comment: Option<Comment>,
}

impl Reflection {
    /// File the reflection was declared in, taken from its first source.
    pub fn source_file(&self) -> Option<&str> {
        self.sources.first().map(|s| s.file_name.as_str())
    }
}

/// Flat table of every reflection in a documentation model, in insertion
/// order.
#[derive(Debug, Clone, Default)]
pub struct Project {
    reflections: Vec<Reflection>,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reflection and return its id.
    ///
    /// The parent, when given, must already be in the table.
    pub fn add(
        &mut self,
        kind: ReflectionKind,
        name: impl Into<String>,
        parent: Option<ReflectionId>,
    ) -> ReflectionId {
        let id = ReflectionId(self.reflections.len());
        self.reflections.push(Reflection {
            id,
            kind,
            name: name.into(),
            parent,
            sources: Vec::new(),
            signatures: Vec::new(),
            comment: None,
        });
        id
    }

    /// Append a signature reflection and register it on its owner.
    pub fn add_signature(
        &mut self,
        owner: ReflectionId,
        kind: ReflectionKind,
        name: impl Into<String>,
    ) -> ReflectionId {
        let id = self.add(kind, name, Some(owner));
        self.reflections[owner.0].signatures.push(id);
        id
    }

    pub fn get(&self, id: ReflectionId) -> Option<&Reflection> {
        self.reflections.get(id.0)
    }

    pub fn get_mut(&mut self, id: ReflectionId) -> Option<&mut Reflection> {
        self.reflections.get_mut(id.0)
    }

    pub fn parent_of(&self, id: ReflectionId) -> Option<&Reflection> {
        self.get(id)?.parent.and_then(|parent| self.get(parent))
    }

    pub fn ids(&self) -> impl Iterator<Item = ReflectionId> + use<> {
        (0..self.reflections.len()).map(ReflectionId)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reflection> {
        self.reflections.iter()
    }

    pub fn len(&self) -> usize {
        self.reflections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reflections.is_empty()
    }
}
