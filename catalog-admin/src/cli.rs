//! Command line definitions

use crate::logger::DEFAULT_LOG_FILTER;
use catalog_client::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use shared::models::{AttributeType, ProductCondition};

#[derive(Debug, Parser)]
#[command(name = "catalog-admin", version, about = "Manage the product catalog")]
pub struct Cli {
    /// Catalog API base URL
    #[arg(long, env = "CATALOG_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(
        long,
        env = "CATALOG_API_TIMEOUT",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        global = true
    )]
    pub timeout: u64,

    /// Bearer token sent with every request
    #[arg(long, env = "CATALOG_API_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Log filter directive
    #[arg(long, env = "CATALOG_LOG_LEVEL", default_value = DEFAULT_LOG_FILTER, global = true)]
    pub log_level: String,

    /// Log as JSON
    #[arg(long, env = "CATALOG_LOG_JSON", global = true)]
    pub log_json: bool,

    /// Also write daily rotating log files here
    #[arg(long, env = "CATALOG_LOG_DIR", global = true)]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the category tree
    Tree {
        /// One category per line in pre-order, without indentation
        #[arg(long)]
        flat: bool,
    },
    /// List categories selectable as parent
    Parents {
        /// Category being edited; it and its subtree are left out
        #[arg(long)]
        exclude: Option<i64>,
    },
    /// List the direct children of a category
    Children { id: i64 },
    /// Show the attributes of a category, inherited ones included
    Attributes {
        category_id: i64,
        /// Only the category's own attributes
        #[arg(long)]
        own: bool,
        /// Bypass the attribute cache
        #[arg(long)]
        refresh: bool,
    },
    /// Category management
    #[command(subcommand)]
    Category(CategoryCommand),
    /// Attribute definitions and category links
    #[command(subcommand)]
    Attribute(AttributeCommand),
    /// Product management
    #[command(subcommand)]
    Product(ProductCommand),
}

#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    Show {
        id: i64,
    },
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        parent: Option<i64>,
        /// NAME:TYPE[:required], repeatable
        #[arg(long = "attribute", short = 'a', value_parser = parse_attribute_spec)]
        attributes: Vec<AttributeSpec>,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, conflicts_with = "root")]
        parent: Option<i64>,
        /// Detach from the current parent
        #[arg(long)]
        root: bool,
        /// NAME:TYPE[:required], repeatable
        #[arg(long = "attribute", short = 'a', value_parser = parse_attribute_spec)]
        attributes: Vec<AttributeSpec>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum AttributeCommand {
    List,
    Create {
        name: String,
        #[arg(long = "type", short = 't')]
        attribute_type: AttributeType,
    },
    /// Attach an existing attribute to a category
    Link {
        category_id: i64,
        attribute_id: i64,
        #[arg(long)]
        required: bool,
    },
    /// Remove a category link by its id
    Unlink {
        link_id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    List,
    Search {
        term: String,
    },
    Create(ProductArgs),
    Update {
        id: i64,
        #[command(flatten)]
        product: ProductUpdateArgs,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Args)]
pub struct ProductArgs {
    pub title: String,
    #[arg(long)]
    pub category: i64,
    #[arg(long, default_value = "0")]
    pub price: Decimal,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub stock: i64,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, value_enum, default_value_t = ConditionArg::New)]
    pub condition: ConditionArg,
    /// ATTRIBUTE_ID=VALUE, repeatable
    #[arg(long = "value", short = 'v', value_parser = parse_value_assignment)]
    pub values: Vec<(i64, String)>,
}

#[derive(Debug, Args)]
pub struct ProductUpdateArgs {
    #[arg(long)]
    pub title: Option<String>,
    /// Move to another category; attribute values are rebound
    #[arg(long)]
    pub category: Option<i64>,
    #[arg(long)]
    pub price: Option<Decimal>,
    #[arg(long, allow_negative_numbers = true)]
    pub stock: Option<i64>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, value_enum)]
    pub condition: Option<ConditionArg>,
    /// ATTRIBUTE_ID=VALUE, repeatable
    #[arg(long = "value", short = 'v', value_parser = parse_value_assignment)]
    pub values: Vec<(i64, String)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConditionArg {
    New,
    Used,
}

impl From<ConditionArg> for ProductCondition {
    fn from(arg: ConditionArg) -> Self {
        match arg {
            ConditionArg::New => ProductCondition::New,
            ConditionArg::Used => ProductCondition::Used,
        }
    }
}

/// New attribute requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: String,
    pub attribute_type: AttributeType,
    pub required: bool,
}

/// Parse `NAME:TYPE[:required]`
pub fn parse_attribute_spec(s: &str) -> Result<AttributeSpec, String> {
    let mut parts = s.split(':').map(str::trim);
    let name = parts.next().filter(|n| !n.is_empty());
    let attribute_type = parts.next();
    let (Some(name), Some(attribute_type)) = (name, attribute_type) else {
        return Err(format!("expected NAME:TYPE[:required], got '{}'", s));
    };
    let required = match parts.next() {
        None => false,
        Some(flag) if flag.eq_ignore_ascii_case("required") => true,
        Some(other) => return Err(format!("unknown attribute flag '{}'", other)),
    };
    if parts.next().is_some() {
        return Err(format!("expected NAME:TYPE[:required], got '{}'", s));
    }
    Ok(AttributeSpec {
        name: name.to_string(),
        attribute_type: attribute_type.parse()?,
        required,
    })
}

/// Parse `ATTRIBUTE_ID=VALUE`; the value may be empty
pub fn parse_value_assignment(s: &str) -> Result<(i64, String), String> {
    let (id, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ATTRIBUTE_ID=VALUE, got '{}'", s))?;
    let id = id
        .trim()
        .parse()
        .map_err(|_| format!("invalid attribute id '{}'", id.trim()))?;
    Ok((id, value.to_string()))
}
