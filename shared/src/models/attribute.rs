//! Attribute Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attribute value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttributeType {
    String,
    Number,
    Boolean,
    Select,
    Multiselect,
}

impl AttributeType {
    pub const ALL: [AttributeType; 5] = [
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::Select,
        Self::Multiselect,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::Boolean => "BOOLEAN",
            Self::Select => "SELECT",
            Self::Multiselect => "MULTISELECT",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AttributeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown attribute type: {}", s))
    }
}

/// Attribute entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Zero on create payloads; the backend assigns the id.
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
}

impl Attribute {
    /// Create attribute payload
    pub fn new(name: impl Into<String>, attribute_type: AttributeType) -> Self {
        Self {
            id: 0,
            name: name.into(),
            attribute_type,
        }
    }
}

/// Attachment of an [`Attribute`] to a category
///
/// `inherited` is never trusted from the wire: the resolver recomputes it
/// relative to the category being viewed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAttribute {
    #[serde(default)]
    pub id: i64,
    pub category_id: i64,
    pub attribute_id: i64,
    #[serde(default)]
    pub attribute_name: String,
    pub attribute_type: AttributeType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub inherited: bool,
}

impl CategoryAttribute {
    /// Build a not-yet-persisted link for `attribute` on `category_id`
    pub fn link(
        category_id: i64,
        category_name: impl Into<String>,
        attribute: &Attribute,
        required: bool,
    ) -> Self {
        Self {
            id: 0,
            category_id,
            attribute_id: attribute.id,
            attribute_name: attribute.name.clone(),
            attribute_type: attribute.attribute_type,
            required,
            category_name: category_name.into(),
            inherited: false,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}
