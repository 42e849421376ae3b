use async_trait::async_trait;
use sqlx::PgPool;

use super::TriviaStore;
use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

/// PostgreSQL-backed trivia store
#[derive(Clone)]
pub struct PgTriviaStore {
    pool: PgPool,
}

impl PgTriviaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape LIKE wildcards so the term matches literally
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl TriviaStore for PgTriviaStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list questions: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_questions_by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to list questions for category {}: {:?}",
                category_id,
                e
            );
            AppError::Database(e)
        })
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search questions: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn get_question(&self, id: i32) -> Result<Option<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get question {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn list_questions_excluding(
        &self,
        category_id: Option<i32>,
        excluded: &[i32],
    ) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE ($1::INTEGER IS NULL OR category = $1)
              AND NOT (id = ANY($2))
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .bind(excluded)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list quiz candidates: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question> {
        let inserted = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, difficulty, category
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.difficulty)
        .bind(question.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let missing_category = e
                .as_database_error()
                .is_some_and(|db| db.is_foreign_key_violation());

            if missing_category {
                AppError::Unprocessable(format!("Category {} does not exist", question.category))
            } else {
                tracing::error!("Failed to insert question: {:?}", e);
                AppError::Database(e)
            }
        })?;

        tracing::info!(
            "Question created: id={}, category={}",
            inserted.id,
            inserted.category
        );

        Ok(inserted)
    }

    async fn delete_question(&self, id: i32) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete question {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!("Question deleted: id={}", id);
        }

        Ok(deleted)
    }
}
