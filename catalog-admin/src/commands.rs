//! Command dispatch

use crate::cli::{
    AttributeCommand, AttributeSpec, CategoryCommand, Cli, Command, ProductArgs, ProductCommand,
    ProductUpdateArgs,
};
use crate::render;
use catalog_client::draft::{
    CategoryDraft, ProductDraft, add_new_attribute, load_inherited_attributes,
    load_product_attributes, submit_category, submit_product,
};
use catalog_client::{
    Attribute, CatalogClient, CategoryAttribute, ClientConfig, ClientResult, HttpClient,
};
use shared::error::{AppError, ErrorCode};

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ClientConfig::new(cli.api_url).with_timeout(cli.timeout);
    if let Some(token) = cli.token.filter(|t| !t.trim().is_empty()) {
        config = config.with_token(token);
    }
    tracing::debug!(base_url = %config.base_url, timeout = config.timeout, "Using catalog API");

    let client = CatalogClient::from_config(&config)?;
    let output = execute(&client, cli.command).await?;
    print!("{}", output);
    Ok(())
}

/// Run one command, returning what to print
pub async fn execute<C: HttpClient>(
    client: &CatalogClient<C>,
    command: Command,
) -> ClientResult<String> {
    match command {
        Command::Tree { flat: false } => Ok(render::tree(&client.categories().tree().await?)),
        Command::Tree { flat: true } => {
            let tree = client.categories().tree().await?;
            Ok(render::categories(&CategoryDraft::parent_candidates(&tree, None)))
        }
        Command::Parents { exclude } => {
            let tree = client.categories().tree().await?;
            Ok(render::categories(&CategoryDraft::parent_candidates(
                &tree, exclude,
            )))
        }
        Command::Children { id } => Ok(render::tree(&client.categories().children(id).await?)),
        Command::Attributes {
            category_id,
            own,
            refresh,
        } => {
            let links = if own {
                client
                    .attributes()
                    .category_attributes(category_id, refresh)
                    .await?
            } else {
                if refresh {
                    client.cache().clear();
                }
                client.resolver().resolve(category_id).await?
            };
            Ok(render::category_attributes(&links))
        }
        Command::Category(cmd) => category(client, cmd).await,
        Command::Attribute(cmd) => attribute(client, cmd).await,
        Command::Product(cmd) => product(client, cmd).await,
    }
}

async fn category<C: HttpClient>(
    client: &CatalogClient<C>,
    command: CategoryCommand,
) -> ClientResult<String> {
    match command {
        CategoryCommand::Show { id } => {
            let category = client.categories().get(id).await?;
            let links = client.resolver().resolve(id).await?;
            Ok(render::category(&category, &links))
        }
        CategoryCommand::Create {
            name,
            description,
            parent,
            attributes,
        } => {
            let mut draft = CategoryDraft {
                name,
                description: description.unwrap_or_default(),
                parent_id: parent,
                ..Default::default()
            };
            // Checked up front so a bad form creates no attribute definitions
            draft.validate_name()?;
            check_parent(client, None, draft.parent_id).await?;
            load_inherited_attributes(client, &mut draft).await?;
            add_specs(client, &mut draft, 0, attributes).await?;
            let saved = submit_category(client, &mut draft, None).await?;
            Ok(render::category(&saved.category, &form_links(&draft)))
        }
        CategoryCommand::Update {
            id,
            name,
            description,
            parent,
            root,
            attributes,
        } => {
            let category = client.categories().get(id).await?;
            let links = client.attributes().category_attributes(id, true).await?;
            let mut draft = CategoryDraft::from_category(&category, links);
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if root {
                draft.parent_id = None;
            } else if parent.is_some() {
                draft.parent_id = parent;
            }
            check_parent(client, Some(id), draft.parent_id).await?;
            load_inherited_attributes(client, &mut draft).await?;
            add_specs(client, &mut draft, id, attributes).await?;
            let saved = submit_category(client, &mut draft, Some(id)).await?;
            Ok(render::category(&saved.category, &form_links(&draft)))
        }
        CategoryCommand::Delete { id } => {
            client.categories().delete(id).await?;
            Ok(format!("Deleted category #{}\n", id))
        }
    }
}

/// Own links followed by the inherited panel
fn form_links(draft: &CategoryDraft) -> Vec<CategoryAttribute> {
    draft
        .attributes
        .iter()
        .chain(&draft.inherited)
        .cloned()
        .collect()
}

/// Reject an unknown parent, or one inside the edited category's own subtree
async fn check_parent<C: HttpClient>(
    client: &CatalogClient<C>,
    editing_id: Option<i64>,
    parent_id: Option<i64>,
) -> ClientResult<()> {
    let Some(parent_id) = parent_id else {
        return Ok(());
    };
    let tree = client.categories().tree().await?;
    if shared::tree::find_node(&tree, parent_id).is_none() {
        return Err(AppError::with_message(
            ErrorCode::CategoryNotFound,
            format!("Category #{} not found", parent_id),
        )
        .with_detail("category_id", parent_id)
        .into());
    }
    let allowed = CategoryDraft::parent_candidates(&tree, editing_id)
        .iter()
        .any(|c| c.id == parent_id);
    if !allowed {
        return Err(AppError::with_message(
            ErrorCode::CategoryParentInvalid,
            format!(
                "Category #{} cannot be placed under #{}",
                editing_id.unwrap_or_default(),
                parent_id
            ),
        )
        .into());
    }
    Ok(())
}

async fn add_specs<C: HttpClient>(
    client: &CatalogClient<C>,
    draft: &mut CategoryDraft,
    category_id: i64,
    specs: Vec<AttributeSpec>,
) -> ClientResult<()> {
    // Catch duplicates among the new names before creating any of them
    let mut scratch = draft.clone();
    for spec in &specs {
        scratch.check_new_attribute(&spec.name)?;
        scratch.push_attribute(
            category_id,
            &Attribute::new(spec.name.trim(), spec.attribute_type),
            spec.required,
        );
    }
    for spec in specs {
        add_new_attribute(
            client,
            draft,
            category_id,
            &spec.name,
            spec.attribute_type,
            spec.required,
        )
        .await?;
    }
    Ok(())
}

async fn attribute<C: HttpClient>(
    client: &CatalogClient<C>,
    command: AttributeCommand,
) -> ClientResult<String> {
    match command {
        AttributeCommand::List => Ok(render::attributes(&client.attributes().list().await?)),
        AttributeCommand::Create {
            name,
            attribute_type,
        } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(AppError::required("Attribute name").into());
            }
            let created = client
                .attributes()
                .create(&Attribute::new(name, attribute_type))
                .await?;
            Ok(render::attributes(&[created]))
        }
        AttributeCommand::Link {
            category_id,
            attribute_id,
            required,
        } => {
            let category = client.categories().get(category_id).await?;
            let attribute = client
                .attributes()
                .list()
                .await?
                .into_iter()
                .find(|a| a.id == attribute_id)
                .ok_or_else(|| {
                    AppError::with_message(
                        ErrorCode::AttributeNotFound,
                        format!("Attribute #{} not found", attribute_id),
                    )
                    .with_detail("attribute_id", attribute_id)
                })?;
            let request =
                CategoryAttribute::link(category.id, category.name, &attribute, required);
            let saved = client.attributes().add_category_attribute(&request).await?;
            Ok(render::category_attributes(&[saved]))
        }
        AttributeCommand::Unlink { link_id } => {
            client.attributes().delete_category_attribute(link_id).await?;
            Ok(format!("Removed category attribute #{}\n", link_id))
        }
    }
}

async fn product<C: HttpClient>(
    client: &CatalogClient<C>,
    command: ProductCommand,
) -> ClientResult<String> {
    match command {
        ProductCommand::List => Ok(render::products(&client.products().list().await?)),
        ProductCommand::Search { term } => {
            Ok(render::products(&client.products().search(&term).await?))
        }
        ProductCommand::Create(args) => {
            let ProductArgs {
                title,
                category,
                price,
                stock,
                description,
                condition,
                values,
            } = args;
            let mut draft = ProductDraft::new();
            draft.title = title;
            draft.description = description;
            draft.price = price;
            draft.stock = stock;
            draft.condition = condition.into();
            load_product_attributes(client, &mut draft, category).await?;
            assign_values(&mut draft, &values)?;
            let product = submit_product(client, &draft, None).await?;
            Ok(render::products(&[product]))
        }
        ProductCommand::Update { id, product } => {
            let ProductUpdateArgs {
                title,
                category,
                price,
                stock,
                description,
                condition,
                values,
            } = product;
            let existing = client
                .products()
                .list()
                .await?
                .into_iter()
                .find(|p| p.id == id)
                .ok_or_else(|| {
                    AppError::with_message(
                        ErrorCode::ProductNotFound,
                        format!("Product #{} not found", id),
                    )
                    .with_detail("product_id", id)
                })?;

            let mut draft = ProductDraft::from_product(&existing);
            let category_id = category.unwrap_or(existing.category_id);
            load_product_attributes(client, &mut draft, category_id).await?;
            draft.apply_values(&existing.attribute_values);

            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(price) = price {
                draft.price = price;
            }
            if let Some(stock) = stock {
                draft.stock = stock;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(condition) = condition {
                draft.condition = condition.into();
            }
            assign_values(&mut draft, &values)?;
            let product = submit_product(client, &draft, Some(id)).await?;
            Ok(render::products(&[product]))
        }
        ProductCommand::Delete { id } => {
            client.products().delete(id).await?;
            Ok(format!("Deleted product #{}\n", id))
        }
    }
}

fn assign_values(draft: &mut ProductDraft, values: &[(i64, String)]) -> ClientResult<()> {
    for (attribute_id, raw) in values {
        draft.set_raw(*attribute_id, raw)?;
    }
    Ok(())
}
