use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::questions::dtos::{
    CategoryQuestionsResponseDto, QuestionListResponseDto, QuestionRequestDto,
};
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ErrorResponse, PageQuery};

/// List questions, ten per page
///
/// Also returns every category and a `currentCategory` label picked at
/// random from them.
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of questions", body = QuestionListResponseDto),
        (status = 404, description = "Page is empty or no categories exist", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<QuestionListResponseDto>> {
    let response = service.list(query.page()).await?;
    Ok(Json(response))
}

/// Delete a question
///
/// Responds with the requested page of the remaining questions.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Question deleted", body = QuestionListResponseDto),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i32>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<QuestionListResponseDto>> {
    let response = service.delete(id, query.page()).await?;
    Ok(Json(response))
}

/// Create a question, or search questions when `searchTerm` is set
///
/// A search returns `{success, questions, total_questions, currentCategory: null}`.
/// A create returns the same body as `GET /questions`.
#[utoipa::path(
    post,
    path = "/questions",
    params(PageQuery),
    request_body = QuestionRequestDto,
    responses(
        (status = 200, description = "Question created; a search returns QuestionSearchResponseDto instead", body = QuestionListResponseDto),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Missing or empty question fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn create_or_search_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(query): AppQuery<PageQuery>,
    AppJson(dto): AppJson<QuestionRequestDto>,
) -> Result<Response> {
    if let Some(term) = dto.search_term() {
        let results = service.search(term, query.page()).await?;
        return Ok(Json(results).into_response());
    }

    let response = service.create(dto.into(), query.page()).await?;
    Ok(Json(response).into_response())
}

/// List the questions of one category
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Page of the category's questions", body = CategoryQuestionsResponseDto),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions_by_category(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i32>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<CategoryQuestionsResponseDto>> {
    let response = service.list_by_category(id, query.page()).await?;
    Ok(Json(response))
}
