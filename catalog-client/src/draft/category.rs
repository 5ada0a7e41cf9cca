use crate::api::CatalogClient;
use crate::{ClientError, ClientResult, HttpClient};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Attribute, AttributeType, Category, CategoryAttribute, CategoryDto, CategoryTreeNode,
};
use shared::tree::flatten_categories;

/// Editable state of the category form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    pub parent_id: Option<i64>,
    /// Links owned by the edited category. Entries with id 0 are unsaved.
    pub attributes: Vec<CategoryAttribute>,
    /// Links coming from ancestors, display only
    pub inherited: Vec<CategoryAttribute>,
}

impl CategoryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft for editing an existing category. `links` may mix own and
    /// inherited rows; they are split on the `inherited` flag.
    pub fn from_category(category: &Category, links: Vec<CategoryAttribute>) -> Self {
        let (inherited, attributes): (Vec<_>, Vec<_>) =
            links.into_iter().partition(|l| l.inherited);
        Self {
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
            parent_id: category.parent_id,
            attributes,
            inherited,
        }
    }

    /// Check a new attribute name against the draft's own links.
    ///
    /// Returns the trimmed name. Inherited names are not checked, so a
    /// category may redeclare an attribute its parent already has.
    pub fn check_new_attribute(&self, name: &str) -> AppResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::required("Attribute name"));
        }
        let taken = self
            .attributes
            .iter()
            .any(|a| a.attribute_name.trim().eq_ignore_ascii_case(name));
        if taken {
            return Err(AppError::with_message(
                ErrorCode::AttributeDuplicateBinding,
                format!("Attribute '{}' has already been added", name),
            )
            .with_detail("attribute", name));
        }
        Ok(name.to_string())
    }

    /// Append an unsaved link to `attribute`
    pub fn push_attribute(&mut self, category_id: i64, attribute: &Attribute, required: bool) {
        let link = CategoryAttribute::link(category_id, self.name.trim(), attribute, required);
        self.attributes.push(link);
    }

    /// Drop the own link at `index`, returning it
    pub fn take_attribute(&mut self, index: usize) -> Option<CategoryAttribute> {
        (index < self.attributes.len()).then(|| self.attributes.remove(index))
    }

    pub fn validate_name(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::required("Category name"));
        }
        Ok(())
    }

    /// A category needs a name and at least one own attribute
    pub fn validate(&self) -> AppResult<()> {
        self.validate_name()?;
        if self.attributes.is_empty() {
            return Err(AppError::validation("At least one attribute must be added"));
        }
        Ok(())
    }

    pub fn to_dto(&self) -> CategoryDto {
        let description = self.description.trim();
        CategoryDto {
            name: self.name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            parent_id: self.parent_id.filter(|id| *id > 0),
        }
    }

    /// Categories selectable as parent. The edited category and its subtree
    /// are left out.
    pub fn parent_candidates(tree: &[CategoryTreeNode], editing_id: Option<i64>) -> Vec<Category> {
        flatten_categories(tree, editing_id)
    }
}

/// Outcome of [`submit_category`]
#[derive(Debug, Clone, PartialEq)]
pub struct SavedCategory {
    pub category: Category,
    /// Links created during this submit
    pub links: Vec<CategoryAttribute>,
}

/// Create the attribute `name` and append an unsaved link to it.
///
/// `category_id` is the edited category, or 0 for a category not created
/// yet; [`submit_category`] fixes the id when it saves the link.
pub async fn add_new_attribute<C: HttpClient>(
    client: &CatalogClient<C>,
    draft: &mut CategoryDraft,
    category_id: i64,
    name: &str,
    attribute_type: AttributeType,
    required: bool,
) -> ClientResult<Attribute> {
    let name = draft.check_new_attribute(name)?;
    let attribute = client
        .attributes()
        .create(&Attribute::new(name, attribute_type))
        .await?;
    draft.push_attribute(category_id, &attribute, required);
    Ok(attribute)
}

/// Fill the draft's inherited panel from its current parent chain
pub async fn load_inherited_attributes<C: HttpClient>(
    client: &CatalogClient<C>,
    draft: &mut CategoryDraft,
) -> ClientResult<()> {
    draft.inherited = client.resolver().inherited_from(draft.parent_id).await?;
    Ok(())
}

/// Remove the own link at `index`, deleting it remotely when already saved
pub async fn remove_attribute<C: HttpClient>(
    client: &CatalogClient<C>,
    draft: &mut CategoryDraft,
    index: usize,
) -> ClientResult<CategoryAttribute> {
    let link = draft
        .attributes
        .get(index)
        .cloned()
        .ok_or_else(|| AppError::validation(format!("No attribute at position {}", index)))?;
    if link.is_persisted() {
        client.attributes().delete_category_attribute(link.id).await?;
    }
    draft.take_attribute(index);
    Ok(link)
}

/// Save the draft: create or update the category, then link every unsaved
/// attribute to it.
///
/// Links without an attribute id get their attribute created first. Saved
/// link ids are written back into the draft.
pub async fn submit_category<C: HttpClient>(
    client: &CatalogClient<C>,
    draft: &mut CategoryDraft,
    editing_id: Option<i64>,
) -> ClientResult<SavedCategory> {
    draft.validate()?;
    let dto = draft.to_dto();

    let category = match editing_id {
        Some(id) => client.categories().update(id, &dto).await?,
        None => client.categories().create(&dto).await?,
    };
    if category.id <= 0 {
        return Err(ClientError::InvalidResponse(
            "saved category has no valid id".into(),
        ));
    }

    let mut links = Vec::new();
    for link in draft.attributes.iter_mut().filter(|a| !a.is_persisted()) {
        if link.attribute_id <= 0 {
            let attribute = client
                .attributes()
                .create(&Attribute::new(link.attribute_name.clone(), link.attribute_type))
                .await?;
            link.attribute_id = attribute.id;
        }

        let request = CategoryAttribute {
            id: 0,
            category_id: category.id,
            category_name: category.name.clone(),
            inherited: false,
            ..link.clone()
        };
        let saved = client.attributes().add_category_attribute(&request).await?;
        link.id = saved.id;
        link.category_id = category.id;
        link.category_name = category.name.clone();
        links.push(saved);
    }

    tracing::info!(
        category_id = category.id,
        links = links.len(),
        "Category saved"
    );
    Ok(SavedCategory { category, links })
}
