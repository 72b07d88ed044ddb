pub mod validate;

use serde::{Deserialize, Serialize};

/// Stable tag identifier, assigned by the persistence layer on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(String);

impl TagId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TagId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Contact identifier. Contacts are owned by the surrounding system; this
/// core treats them as opaque except for the id it associates tags with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Ordinal index into the externally-defined color palette.
pub type ColorIndex = u32;

/// Default palette slot for a tag that has not been recolored.
pub const DEFAULT_COLOR: ColorIndex = 0;

/// A user-defined, colored label attachable to one or more contacts.
///
/// `id` is `None` for a tag that has not been created on the server yet;
/// only the create mutation produces an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: Option<TagId>,
    pub name: String,
    pub color: ColorIndex,
}

impl Tag {
    /// A not-yet-persisted tag with the default palette color.
    pub fn draft(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: DEFAULT_COLOR,
        }
    }
}
