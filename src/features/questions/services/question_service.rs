use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::format_categories;
use crate::features::questions::dtos::{
    CategoryQuestionsResponseDto, CreateQuestionDto, QuestionListResponseDto,
    QuestionResponseDto, QuestionSearchResponseDto,
};
use crate::features::questions::models::Question;
use crate::modules::storage::TriviaStore;
use crate::shared::pagination::paginate;
use crate::shared::random::{choose, RandomSource};

/// Service for listing, searching, creating and deleting questions
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
    random: Arc<dyn RandomSource>,
}

fn page_of(page: i64, questions: &[Question]) -> Vec<QuestionResponseDto> {
    paginate(page, questions).iter().map(Into::into).collect()
}

impl QuestionService {
    pub fn new(store: Arc<dyn TriviaStore>, random: Arc<dyn RandomSource>) -> Self {
        Self { store, random }
    }

    /// One page of all questions together with every category.
    ///
    /// An empty page or an empty category table is not found.
    pub async fn list(&self, page: i64) -> Result<QuestionListResponseDto> {
        let questions = self.store.list_questions().await?;

        let current = page_of(page, &questions);
        if current.is_empty() {
            return Err(AppError::NotFound(format!("No questions on page {}", page)));
        }

        let categories = self.store.list_categories().await?;
        let current_category = choose(self.random.as_ref(), &categories)
            .map(|c| c.kind.clone())
            .ok_or_else(|| AppError::NotFound("No categories available".to_string()))?;

        Ok(QuestionListResponseDto {
            success: true,
            questions: current,
            total_questions: questions.len(),
            categories: format_categories(&categories),
            current_category,
        })
    }

    /// Delete a question, then list `page` as it looks afterwards
    pub async fn delete(&self, id: i32, page: i64) -> Result<QuestionListResponseDto> {
        if self.store.get_question(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Question {} not found", id)));
        }

        // A concurrent delete may win the race; report it the same way.
        if !self.store.delete_question(id).await? {
            return Err(AppError::NotFound(format!("Question {} not found", id)));
        }

        self.list(page).await
    }

    /// Insert a question, then list `page`
    pub async fn create(
        &self,
        dto: CreateQuestionDto,
        page: i64,
    ) -> Result<QuestionListResponseDto> {
        let new_question = dto.into_new_question()?;
        self.store.insert_question(new_question).await?;

        self.list(page).await
    }

    /// Case-insensitive substring search over question text
    pub async fn search(&self, term: &str, page: i64) -> Result<QuestionSearchResponseDto> {
        let questions = self.store.search_questions(term).await?;

        tracing::debug!("Search '{}' matched {} questions", term, questions.len());

        Ok(QuestionSearchResponseDto {
            success: true,
            questions: page_of(page, &questions),
            total_questions: questions.len(),
            current_category: None,
        })
    }

    /// One page of the questions in a category; an unknown category is not found
    pub async fn list_by_category(
        &self,
        category_id: i32,
        page: i64,
    ) -> Result<CategoryQuestionsResponseDto> {
        let category = self
            .store
            .get_category(category_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", category_id)))?;

        let questions = self.store.list_questions_by_category(category.id).await?;

        Ok(CategoryQuestionsResponseDto {
            success: true,
            questions: page_of(page, &questions),
            total_questions: questions.len(),
            current_category: category.kind,
        })
    }
}
