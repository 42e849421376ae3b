use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Categories flattened to `{id: type}`
pub type CategoryMap = BTreeMap<i32, String>;

/// Response body of `GET /categories`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponseDto {
    pub success: bool,
    #[schema(value_type = Object, example = json!({"1": "Science", "2": "Art"}))]
    pub categories: CategoryMap,
}

/// Project categories into an id → type lookup. Later duplicates win.
pub fn format_categories<'a, I>(categories: I) -> CategoryMap
where
    I: IntoIterator<Item = &'a Category>,
{
    categories
        .into_iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}
