use crate::api::CatalogClient;
use crate::{ClientResult, HttpClient};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    AttributeType, CategoryAttribute, Product, ProductAttributeValue, ProductAttributeValueDto,
    ProductCondition, ProductDto,
};

/// Typed value held by a product form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Many(Vec<String>),
}

impl FieldValue {
    /// Initial value of a freshly bound field
    pub fn default_for(attribute_type: AttributeType) -> Self {
        match attribute_type {
            AttributeType::Boolean => Self::Bool(false),
            AttributeType::Multiselect => Self::Many(Vec::new()),
            _ => Self::Text(String::new()),
        }
    }

    /// Read a transport string back into the shape `attribute_type` uses
    pub fn parse(attribute_type: AttributeType, raw: &str) -> Self {
        match attribute_type {
            AttributeType::Boolean => {
                let raw = raw.trim();
                Self::Bool(raw.eq_ignore_ascii_case("true") || raw == "1")
            }
            AttributeType::Multiselect => Self::Many(
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            _ => Self::Text(raw.to_string()),
        }
    }

    /// Unfilled. A boolean is always filled.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Bool(_) => false,
            Self::Many(items) => items.is_empty(),
        }
    }

    fn fits(&self, attribute_type: AttributeType) -> bool {
        matches!(
            (self, attribute_type),
            (Self::Bool(_), AttributeType::Boolean)
                | (Self::Many(_), AttributeType::Multiselect)
                | (
                    Self::Text(_),
                    AttributeType::String | AttributeType::Number | AttributeType::Select
                )
        )
    }
}

/// One attribute definition bound to the form, with its current value
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeField {
    pub attribute: CategoryAttribute,
    pub value: FieldValue,
}

/// Editable state of the product form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i64,
    pub category_id: Option<i64>,
    pub condition: ProductCondition,
    fields: Vec<AttributeField>,
}

impl ProductDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft for editing `product`. Attribute fields stay empty until
    /// definitions are bound; see [`ProductDraft::apply_values`].
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
            stock: product.stock,
            category_id: Some(product.category_id),
            condition: product.condition,
            fields: Vec::new(),
        }
    }

    pub fn fields(&self) -> &[AttributeField] {
        &self.fields
    }

    /// Replace the bound attribute definitions, resetting every value to
    /// its type default.
    ///
    /// One field per attribute id: the first link wins (own before
    /// inherited) and a later link for the same attribute only adds its
    /// `required` flag.
    pub fn bind_attributes(&mut self, attributes: Vec<CategoryAttribute>) {
        let mut fields: Vec<AttributeField> = Vec::with_capacity(attributes.len());
        for attribute in attributes {
            match fields
                .iter_mut()
                .find(|f| f.attribute.attribute_id == attribute.attribute_id)
            {
                Some(field) => field.attribute.required |= attribute.required,
                None => fields.push(AttributeField {
                    value: FieldValue::default_for(attribute.attribute_type),
                    attribute,
                }),
            }
        }
        self.fields = fields;
    }

    /// Fill bound fields from stored product values. Values for attributes
    /// that are not bound are ignored.
    pub fn apply_values(&mut self, values: &[ProductAttributeValue]) {
        for stored in values {
            if let Some(field) = self.field_mut(stored.attribute_id) {
                field.value = FieldValue::parse(field.attribute.attribute_type, &stored.value);
            }
        }
    }

    pub fn set_value(&mut self, attribute_id: i64, value: FieldValue) -> AppResult<()> {
        let field = self.field_mut(attribute_id).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::AttributeNotFound,
                format!("Attribute {} is not bound to this product", attribute_id),
            )
        })?;
        if !value.fits(field.attribute.attribute_type) {
            return Err(AppError::validation(format!(
                "{} expects a {} value",
                field.attribute.attribute_name, field.attribute.attribute_type
            )));
        }
        field.value = value;
        Ok(())
    }

    /// Set a field from text, interpreted per the attribute's type
    pub fn set_raw(&mut self, attribute_id: i64, raw: &str) -> AppResult<()> {
        let attribute_type = self
            .fields
            .iter()
            .find(|f| f.attribute.attribute_id == attribute_id)
            .map(|f| f.attribute.attribute_type)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::AttributeNotFound,
                    format!("Attribute {} is not bound to this product", attribute_id),
                )
            })?;
        self.set_value(attribute_id, FieldValue::parse(attribute_type, raw))
    }

    fn field_mut(&mut self, attribute_id: i64) -> Option<&mut AttributeField> {
        self.fields
            .iter_mut()
            .find(|f| f.attribute.attribute_id == attribute_id)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::required("Title"));
        }
        if !self.category_id.is_some_and(|id| id > 0) {
            return Err(AppError::required("Category"));
        }
        if self.price < Decimal::ZERO {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                "Price cannot be negative",
            ));
        }
        if self.stock < 0 {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                "Stock cannot be negative",
            ));
        }
        for field in &self.fields {
            if field.attribute.required && field.value.is_blank() {
                return Err(AppError::with_message(
                    ErrorCode::AttributeValueRequired,
                    format!("{} is required", field.attribute.attribute_name),
                )
                .with_detail("attribute_id", field.attribute.attribute_id));
            }
            serialize_value(field)?;
        }
        Ok(())
    }

    /// Validate and build the request body. Every value travels as text.
    pub fn to_dto(&self) -> AppResult<ProductDto> {
        self.validate()?;
        let attribute_values = self
            .fields
            .iter()
            .map(|field| {
                Ok(ProductAttributeValueDto {
                    attribute_id: field.attribute.attribute_id,
                    value: serialize_value(field)?,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(ProductDto {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price,
            stock: self.stock,
            category_id: self.category_id.unwrap_or_default(),
            condition: self.condition,
            attribute_values,
        })
    }
}

fn serialize_value(field: &AttributeField) -> AppResult<String> {
    let value = match (&field.value, field.attribute.attribute_type) {
        (FieldValue::Text(s), AttributeType::Number) => {
            let s = s.trim();
            if s.is_empty() {
                "0".to_string()
            } else {
                s.parse::<Decimal>()
                    .map_err(|_| {
                        AppError::validation(format!(
                            "{} must be a number",
                            field.attribute.attribute_name
                        ))
                        .with_detail("value", s)
                    })?
                    .normalize()
                    .to_string()
            }
        }
        (FieldValue::Text(s), _) => s.clone(),
        (FieldValue::Bool(b), _) => b.to_string(),
        (FieldValue::Many(items), _) => items.join(","),
    };
    Ok(value)
}

/// Bind the attributes a product in `category_id` carries: the category's
/// own plus every inherited one
pub async fn load_product_attributes<C: HttpClient>(
    client: &CatalogClient<C>,
    draft: &mut ProductDraft,
    category_id: i64,
) -> ClientResult<()> {
    let attributes = client.products().available_attributes(category_id).await?;
    draft.category_id = Some(category_id);
    draft.bind_attributes(attributes);
    Ok(())
}

/// Create the product, or update it when `editing_id` is set
pub async fn submit_product<C: HttpClient>(
    client: &CatalogClient<C>,
    draft: &ProductDraft,
    editing_id: Option<i64>,
) -> ClientResult<Product> {
    let dto = draft.to_dto()?;
    match editing_id {
        Some(id) => client.products().update(id, &dto).await,
        None => client.products().create(&dto).await,
    }
}
