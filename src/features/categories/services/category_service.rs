use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{format_categories, CategoryMap};
use crate::modules::storage::TriviaStore;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn TriviaStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// All categories as an id → type map; an empty table is not found
    pub async fn list(&self) -> Result<CategoryMap> {
        let categories = self.store.list_categories().await?;

        if categories.is_empty() {
            return Err(AppError::NotFound("No categories available".to_string()));
        }

        Ok(format_categories(&categories))
    }
}
