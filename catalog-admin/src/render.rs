//! Plain-text rendering of API results

use shared::models::{Attribute, Category, CategoryAttribute, CategoryTreeNode, Product};
use shared::tree::UNNAMED_CATEGORY;
use std::fmt::Write;

pub fn tree(nodes: &[CategoryTreeNode]) -> String {
    let mut out = String::new();
    write_tree(nodes, 0, &mut out);
    out
}

fn write_tree(nodes: &[CategoryTreeNode], depth: usize, out: &mut String) {
    for node in nodes {
        let label = if node.label.trim().is_empty() {
            UNNAMED_CATEGORY
        } else {
            node.label.as_str()
        };
        let id = node
            .id()
            .map(|id| format!("#{}", id))
            .unwrap_or_else(|| "#?".to_string());
        let _ = writeln!(out, "{}{} {}", "  ".repeat(depth), id, label);
        write_tree(&node.children, depth + 1, out);
    }
}

pub fn categories(categories: &[Category]) -> String {
    let mut out = String::new();
    for category in categories {
        let parent = category
            .parent_id
            .map(|p| format!("#{}", p))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "#{:<6} {:<30} parent {}",
            category.id, category.name, parent
        );
    }
    out
}

pub fn category(category: &Category, links: &[CategoryAttribute]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", category.id, category.name);
    if let Some(description) = category.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "  {}", description);
    }
    if let Some(parent) = category.parent_id {
        let _ = writeln!(out, "  parent #{}", parent);
    }
    out.push_str(&category_attributes(links));
    out
}

/// One row per link; inherited rows name the category they come from
pub fn category_attributes(links: &[CategoryAttribute]) -> String {
    let mut out = String::new();
    for link in links {
        let origin = if link.inherited {
            format!("inherited from #{}", link.category_id)
        } else {
            "own".to_string()
        };
        let _ = writeln!(
            out,
            "  [{}] {:<24} {:<12} {:<9} {}",
            link.attribute_id,
            link.attribute_name,
            link.attribute_type,
            if link.required { "required" } else { "optional" },
            origin
        );
    }
    out
}

pub fn attributes(attributes: &[Attribute]) -> String {
    let mut out = String::new();
    for attribute in attributes {
        let _ = writeln!(
            out,
            "#{:<6} {:<24} {}",
            attribute.id, attribute.name, attribute.attribute_type
        );
    }
    out
}

pub fn products(products: &[Product]) -> String {
    let mut out = String::new();
    for product in products {
        let category = product
            .category_name
            .clone()
            .unwrap_or_else(|| format!("#{}", product.category_id));
        let _ = writeln!(
            out,
            "#{:<6} {:<30} {:>10} stock {:<5} {:?} {}",
            product.id, product.title, product.price, product.stock, product.condition, category
        );
        for value in &product.attribute_values {
            let _ = writeln!(out, "         {} = {}", value.attribute_name, value.value);
        }
    }
    out
}
