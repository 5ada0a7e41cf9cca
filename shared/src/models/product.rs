//! Product Model

use super::attribute::AttributeType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductCondition {
    #[default]
    New,
    Used,
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: i64,
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default)]
    pub condition: ProductCondition,
    #[serde(default)]
    pub attribute_values: Vec<ProductAttributeValue>,
}

/// Stored attribute value of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttributeValue {
    #[serde(default)]
    pub id: i64,
    pub attribute_id: i64,
    #[serde(default)]
    pub attribute_name: String,
    #[serde(default)]
    pub attribute_type: Option<AttributeType>,
    /// Always text on the wire, whatever the attribute type
    pub value: String,
}

/// Create / update product payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub title: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: i64,
    pub category_id: i64,
    pub condition: ProductCondition,
    pub attribute_values: Vec<ProductAttributeValueDto>,
}

/// Attribute value in a product payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttributeValueDto {
    pub attribute_id: i64,
    pub value: String,
}
