//! Storage module for trivia data
//!
//! Defines the `TriviaStore` seam that services depend on, and the
//! PostgreSQL implementation used in production.

mod postgres_store;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

pub use postgres_store::PgTriviaStore;

/// Persistent storage of categories and questions.
///
/// Every scan that returns questions is ordered by id. Deleting a category
/// removes its questions at the storage level.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn get_category(&self, id: i32) -> Result<Option<Category>>;

    async fn list_questions(&self) -> Result<Vec<Question>>;

    async fn list_questions_by_category(&self, category_id: i32) -> Result<Vec<Question>>;

    /// Case-insensitive substring match on the question text
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>>;

    async fn get_question(&self, id: i32) -> Result<Option<Question>>;

    /// Questions not in `excluded`, optionally restricted to one category
    async fn list_questions_excluding(
        &self,
        category_id: Option<i32>,
        excluded: &[i32],
    ) -> Result<Vec<Question>>;

    /// Fails with `AppError::Unprocessable` when the category does not exist
    async fn insert_question(&self, question: NewQuestion) -> Result<Question>;

    /// Returns false when no row matched
    async fn delete_question(&self, id: i32) -> Result<bool>;
}
