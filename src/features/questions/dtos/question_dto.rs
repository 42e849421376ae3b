use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryMap;
use crate::features::questions::models::{NewQuestion, Question};
use crate::shared::deserializers::deserialize_lenient_i32;

/// Response DTO for question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponseDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

impl From<Question> for QuestionResponseDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            difficulty: q.difficulty,
            category: q.category,
        }
    }
}

impl From<&Question> for QuestionResponseDto {
    fn from(q: &Question) -> Self {
        q.clone().into()
    }
}

/// Page of all questions plus every category.
///
/// `currentCategory` is a randomly chosen category label and is not tied to
/// the questions on the page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
    #[schema(value_type = Object, example = json!({"1": "Science", "2": "Art"}))]
    pub categories: CategoryMap,
    #[serde(rename = "currentCategory")]
    pub current_category: String,
}

/// Page of search results; `currentCategory` is always null
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionSearchResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
    #[serde(rename = "currentCategory")]
    pub current_category: Option<String>,
}

/// Page of questions belonging to one category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
    #[serde(rename = "currentCategory")]
    pub current_category: String,
}

/// Body of `POST /questions`: either a search or a new question
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct QuestionRequestDto {
    /// When non-empty the request is a search and every other field is ignored
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,

    #[serde(default)]
    pub question: Option<String>,

    #[serde(default)]
    pub answer: Option<String>,

    #[serde(default, deserialize_with = "deserialize_lenient_i32")]
    #[schema(value_type = Option<i32>)]
    pub difficulty: Option<i32>,

    #[serde(default, deserialize_with = "deserialize_lenient_i32")]
    #[schema(value_type = Option<i32>)]
    pub category: Option<i32>,
}

impl QuestionRequestDto {
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|term| !term.is_empty())
    }
}

/// Create-question fields after the search branch has been ruled out
#[derive(Debug, Clone, Validate)]
pub struct CreateQuestionDto {
    #[validate(length(min = 1, message = "Question must not be empty"))]
    pub question: String,

    #[validate(length(min = 1, message = "Answer must not be empty"))]
    pub answer: String,

    #[validate(required(message = "Difficulty is required"))]
    pub difficulty: Option<i32>,

    #[validate(required(message = "Category is required"))]
    pub category: Option<i32>,
}

impl From<QuestionRequestDto> for CreateQuestionDto {
    fn from(dto: QuestionRequestDto) -> Self {
        Self {
            question: dto.question.unwrap_or_default(),
            answer: dto.answer.unwrap_or_default(),
            difficulty: dto.difficulty,
            category: dto.category,
        }
    }
}

impl CreateQuestionDto {
    /// Validate and convert into an insertable row
    pub fn into_new_question(self) -> Result<NewQuestion> {
        self.validate()
            .map_err(|e| AppError::Unprocessable(e.to_string()))?;

        match (self.difficulty, self.category) {
            (Some(difficulty), Some(category)) => Ok(NewQuestion {
                question: self.question,
                answer: self.answer,
                difficulty,
                category,
            }),
            _ => Err(AppError::Unprocessable(
                "Difficulty and category are required".to_string(),
            )),
        }
    }
}
