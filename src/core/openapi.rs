use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::questions::{dtos as questions_dtos, handlers as questions_handlers};
use crate::features::quizzes::{dtos as quizzes_dtos, handlers as quizzes_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        // Questions
        questions_handlers::list_questions,
        questions_handlers::delete_question,
        questions_handlers::create_or_search_questions,
        questions_handlers::list_questions_by_category,
        // Quizzes
        quizzes_handlers::play_quiz,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Categories
            categories_dtos::CategoriesResponseDto,
            // Questions
            questions_dtos::QuestionResponseDto,
            questions_dtos::QuestionListResponseDto,
            questions_dtos::QuestionSearchResponseDto,
            questions_dtos::CategoryQuestionsResponseDto,
            questions_dtos::QuestionRequestDto,
            // Quizzes
            quizzes_dtos::QuizCategoryDto,
            quizzes_dtos::PlayQuizRequestDto,
            quizzes_dtos::PlayQuizResponseDto,
        )
    ),
    tags(
        (name = "categories", description = "Trivia categories"),
        (name = "questions", description = "Question listing, search, creation and deletion"),
        (name = "quizzes", description = "Quiz play"),
    ),
    info(
        title = "Trivia API",
        version = "0.1.0",
        description = "Categories, questions and quiz play for the trivia game",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
