//! Per-category attribute cache
//!
//! Memoizes `GET /category-attributes/category/{id}` by category id. Any
//! write to category attributes clears the whole cache.

use shared::models::CategoryAttribute;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub struct AttributeCache {
    inner: Mutex<HashMap<i64, Vec<CategoryAttribute>>>,
}

impl AttributeCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<i64, Vec<CategoryAttribute>>> {
        // Entries are plain data, a panic mid-insert cannot leave them half-written
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, category_id: i64) -> Option<Vec<CategoryAttribute>> {
        self.lock().get(&category_id).cloned()
    }

    /// Store (or overwrite) the list fetched for `category_id`
    pub fn insert(&self, category_id: i64, attributes: Vec<CategoryAttribute>) {
        self.lock().insert(category_id, attributes);
    }

    pub fn contains(&self, category_id: i64) -> bool {
        self.lock().contains_key(&category_id)
    }

    /// Drop every entry
    pub fn clear(&self) {
        let mut guard = self.lock();
        if !guard.is_empty() {
            tracing::debug!(entries = guard.len(), "Clearing attribute cache");
        }
        guard.clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
