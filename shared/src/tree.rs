//! Category tree helpers
//!
//! Pure functions over the nested [`CategoryTreeNode`] lists returned by
//! `GET /categories/tree`.

use crate::models::{Category, CategoryTreeNode};

/// Label used when the backend sends a node without one
pub const UNNAMED_CATEGORY: &str = "Unnamed";

/// Flatten a category tree into pre-order [`Category`] records.
///
/// Nodes without a usable id are skipped along with their subtree. When
/// `exclude` is set, that category and all of its descendants are left out,
/// which is what a "choose parent" selector needs while editing it.
pub fn flatten_categories(nodes: &[CategoryTreeNode], exclude: Option<i64>) -> Vec<Category> {
    let mut out = Vec::new();
    flatten_into(nodes, exclude, &mut out);
    out
}

fn flatten_into(nodes: &[CategoryTreeNode], exclude: Option<i64>, out: &mut Vec<Category>) {
    for node in nodes {
        let Some(id) = node.id() else {
            continue;
        };
        if exclude == Some(id) {
            continue;
        }
        out.push(to_flat_category(node, id));
        flatten_into(&node.children, exclude, out);
    }
}

fn to_flat_category(node: &CategoryTreeNode, id: i64) -> Category {
    let name = if node.label.trim().is_empty() {
        UNNAMED_CATEGORY.to_string()
    } else {
        node.label.clone()
    };
    Category {
        id,
        name,
        description: node.data.description.clone(),
        parent_id: node.data.parent_id.filter(|p| *p > 0),
        children: Vec::new(),
    }
}

/// Whether `id` is `node` itself or anywhere below it
pub fn contains_category(node: &CategoryTreeNode, id: i64) -> bool {
    node.id() == Some(id) || node.children.iter().any(|c| contains_category(c, id))
}

/// Whether `candidate` lies strictly below `ancestor` in the tree
pub fn is_descendant_of(nodes: &[CategoryTreeNode], candidate: i64, ancestor: i64) -> bool {
    find_node(nodes, ancestor)
        .map(|node| node.children.iter().any(|c| contains_category(c, candidate)))
        .unwrap_or(false)
}

/// Depth-first search for a node by category id
pub fn find_node(nodes: &[CategoryTreeNode], id: i64) -> Option<&CategoryTreeNode> {
    for node in nodes {
        if node.id() == Some(id) {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }
    None
}

fn find_node_mut(nodes: &mut [CategoryTreeNode], id: i64) -> Option<&mut CategoryTreeNode> {
    for node in nodes {
        if node.id() == Some(id) {
            return Some(node);
        }
        if let Some(found) = find_node_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Replace the children of `parent_id` with a lazily loaded level.
///
/// Returns `false` when the parent is not in the tree.
pub fn attach_children(
    nodes: &mut [CategoryTreeNode],
    parent_id: i64,
    children: Vec<CategoryTreeNode>,
) -> bool {
    match find_node_mut(nodes, parent_id) {
        Some(parent) => {
            parent.children = children;
            true
        }
        None => false,
    }
}

/// Total number of nodes, including ones without an id
pub fn count_nodes(nodes: &[CategoryTreeNode]) -> usize {
    nodes.iter().map(|n| 1 + count_nodes(&n.children)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryNodeData;

    fn node(
        id: i64,
        label: &str,
        parent: Option<i64>,
        children: Vec<CategoryTreeNode>,
    ) -> CategoryTreeNode {
        CategoryTreeNode {
            key: id.to_string(),
            label: label.to_string(),
            data: CategoryNodeData {
                id: Some(id),
                description: Some(format!("{} description", label)),
                parent_id: parent,
            },
            children,
        }
    }

    /// A -> B -> C
    fn chain() -> Vec<CategoryTreeNode> {
        vec![node(1, "A", None, vec![node(2, "B", Some(1), vec![node(3, "C", Some(2), vec![])])])]
    }

    ///   1          5
    ///  / \         |
    /// 2   4        6
    /// |
    /// 3
    fn forest() -> Vec<CategoryTreeNode> {
        vec![
            node(
                1,
                "Electronics",
                None,
                vec![
                    node(2, "Phones", Some(1), vec![node(3, "Smartphones", Some(2), vec![])]),
                    node(4, "Laptops", Some(1), vec![]),
                ],
            ),
            node(5, "Clothing", None, vec![node(6, "Shoes", Some(5), vec![])]),
        ]
    }

    fn ids(cats: &[Category]) -> Vec<i64> {
        cats.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_flatten_preorder() {
        let flat = flatten_categories(&forest(), None);
        assert_eq!(ids(&flat), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(flat.len(), count_nodes(&forest()));
    }

    #[test]
    fn test_flatten_preserves_fields() {
        let flat = flatten_categories(&forest(), None);
        let phones = &flat[1];
        assert_eq!(phones.name, "Phones");
        assert_eq!(phones.description.as_deref(), Some("Phones description"));
        assert_eq!(phones.parent_id, Some(1));
        assert!(phones.children.is_empty());
        assert!(flat[0].is_root());
    }

    #[test]
    fn test_flatten_empty() {
        assert!(flatten_categories(&[], None).is_empty());
        assert!(flatten_categories(&[], Some(3)).is_empty());
    }

    #[test]
    fn test_exclude_root_of_chain() {
        assert!(flatten_categories(&chain(), Some(1)).is_empty());
    }

    #[test]
    fn test_exclude_middle_of_chain() {
        assert_eq!(ids(&flatten_categories(&chain(), Some(2))), vec![1]);
    }

    #[test]
    fn test_exclude_leaf() {
        assert_eq!(ids(&flatten_categories(&chain(), Some(3))), vec![1, 2]);
    }

    #[test]
    fn test_exclude_removes_only_subtree() {
        let flat = flatten_categories(&forest(), Some(2));
        assert_eq!(ids(&flat), vec![1, 4, 5, 6]);
    }

    #[test]
    fn test_exclude_unknown_id_keeps_everything() {
        assert_eq!(flatten_categories(&forest(), Some(99)).len(), 6);
    }

    #[test]
    fn test_nodes_without_id_dropped() {
        let mut tree = forest();
        tree[0].children.push(CategoryTreeNode {
            key: "x".into(),
            label: "Orphan".into(),
            data: CategoryNodeData::default(),
            children: vec![],
        });
        tree.insert(
            0,
            CategoryTreeNode {
                key: "y".into(),
                label: "Ghost".into(),
                data: CategoryNodeData::default(),
                children: vec![],
            },
        );
        let flat = flatten_categories(&tree, None);
        assert_eq!(ids(&flat), vec![1, 2, 3, 4, 5, 6]);
        assert!(flat.iter().all(|c| c.name != "Orphan" && c.name != "Ghost"));
    }

    #[test]
    fn test_blank_label_gets_placeholder() {
        let tree = vec![node(1, "  ", None, vec![])];
        let flat = flatten_categories(&tree, None);
        assert_eq!(flat[0].name, UNNAMED_CATEGORY);
    }

    #[test]
    fn test_contains_and_descendant() {
        let tree = forest();
        assert!(contains_category(&tree[0], 3));
        assert!(contains_category(&tree[0], 1));
        assert!(!contains_category(&tree[0], 6));

        assert!(is_descendant_of(&tree, 3, 1));
        assert!(!is_descendant_of(&tree, 1, 1));
        assert!(!is_descendant_of(&tree, 1, 3));
        assert!(!is_descendant_of(&tree, 3, 42));
    }

    #[test]
    fn test_attach_children() {
        let mut tree = forest();
        let lazy = vec![node(7, "Tablets", Some(4), vec![])];
        assert!(attach_children(&mut tree, 4, lazy));
        assert_eq!(find_node(&tree, 7).map(|n| n.label.as_str()), Some("Tablets"));
        assert!(!attach_children(&mut tree, 99, vec![]));
    }
}
