use serde_json::Value;

use crate::model::Reflection;

pub const COMMENT: &str = "comment";
pub const TEXT: &str = "text";
pub const SHORT_TEXT: &str = "shortText";

/// Comment text taken from a store entry, lines already joined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedComment {
    pub short_text: Option<String>,
    pub text: Option<String>,
}

impl LocalizedComment {
    /// Read the `comment` object of an entry.
    ///
    /// A field is only kept when it is a non-empty array of strings.
    pub fn from_entry(entry: &Value) -> Option<Self> {
        let comment = entry.get(COMMENT)?.as_object()?;
        Some(Self {
            short_text: joined_lines(comment.get(SHORT_TEXT)),
            text: joined_lines(comment.get(TEXT)),
        })
    }
}

fn joined_lines(value: Option<&Value>) -> Option<String> {
    let lines = value?.as_array()?;
    if lines.is_empty() {
        return None;
    }
    let lines = lines.iter().map(Value::as_str).collect::<Option<Vec<_>>>()?;
    Some(lines.join("\n"))
}

/// Which comment slots an overlay replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplacedFields {
    pub short_text: bool,
    pub text: bool,
}

impl ReplacedFields {
    pub fn any(self) -> bool {
        self.short_text || self.text
    }

    pub fn count(self) -> usize {
        usize::from(self.short_text) + usize::from(self.text)
    }
}

/// Overwrite the reflection's comment slots with the entry's text.
///
/// Only slots the reflection already has with non-empty text are touched; a
/// slot the entry does not provide keeps the generator's text.
pub fn apply_entry(reflection: &mut Reflection, entry: &Value) -> ReplacedFields {
    let mut replaced = ReplacedFields::default();
    let Some(comment) = reflection.comment.as_mut() else {
        return replaced;
    };
    let Some(localized) = LocalizedComment::from_entry(entry) else {
        return replaced;
    };

    if let (Some(slot), Some(text)) = (exposed(&mut comment.text), localized.text) {
        *slot = text;
        replaced.text = true;
    }
    if let (Some(slot), Some(short_text)) =
        (exposed(&mut comment.short_text), localized.short_text)
    {
        *slot = short_text;
        replaced.short_text = true;
    }

    replaced
}

fn exposed(slot: &mut Option<String>) -> Option<&mut String> {
    slot.as_mut().filter(|text| !text.is_empty())
}
