//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
///
/// `parent_id == None` marks a root category. `children` is only populated
/// by tree-shaped responses; `GET /categories/{id}` returns it empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub children: Vec<Category>,
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Create / update category payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parent_id: Option<i64>,
}

/// Payload carried by a [`CategoryTreeNode`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNodeData {
    /// Missing ids are tolerated on the wire and dropped by the flattener.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

/// Tree projection of a category, as returned by `GET /categories/tree`
/// and `GET /categories/{id}/children`.
///
/// Children may be empty when the backend loads them lazily.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTreeNode {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub data: CategoryNodeData,
    #[serde(default)]
    pub children: Vec<CategoryTreeNode>,
}

impl CategoryTreeNode {
    /// Category id of this node, if the backend supplied a usable one
    pub fn id(&self) -> Option<i64> {
        self.data.id.filter(|id| *id > 0)
    }
}
