//! Form state for category and product editing
//!
//! Drafts are plain data updated by explicit calls. Local checks return
//! [`AppError`](shared::error::AppError) before any request is sent; the
//! async workflows next to each draft perform the remote side.

mod category;
mod product;

pub use category::{
    CategoryDraft, SavedCategory, add_new_attribute, load_inherited_attributes, remove_attribute,
    submit_category,
};
pub use product::{FieldValue, ProductDraft, load_product_attributes, submit_product};
