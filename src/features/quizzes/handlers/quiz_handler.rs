use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{PlayQuizRequestDto, PlayQuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::ErrorResponse;

/// Play one quiz turn
///
/// Returns a random question from the chosen category that is not in
/// `previous_questions`, or `"question": false` once none remain.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = PlayQuizRequestDto,
    responses(
        (status = 200, description = "Next question, or false when the quiz is over", body = PlayQuizResponseDto),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "quizzes"
)]
pub async fn play_quiz(
    State(service): State<Arc<QuizService>>,
    AppJson(dto): AppJson<PlayQuizRequestDto>,
) -> Result<Json<PlayQuizResponseDto>> {
    let question = service
        .next_question(dto.category_id(), &dto.previous_questions)
        .await?;

    Ok(Json(PlayQuizResponseDto {
        success: true,
        question,
    }))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{
        seeded_store, test_server, test_server_with_random, InMemoryStore, ScriptedRandom,
    };

    #[tokio::test]
    async fn test_play_quiz_returns_unseen_question() {
        let server = test_server(seeded_store(&["Science", "Art"], 6));

        let response = server
            .post("/quizzes")
            .json(&json!({"quiz_category": {"type": "Science", "id": 1}, "previous_questions": [1]}))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        let id = body["question"]["id"].as_i64().unwrap();
        assert!(id == 3 || id == 5);
        assert_eq!(body["question"]["category"], 1);
    }

    #[tokio::test]
    async fn test_play_quiz_exhausted_category_returns_false() {
        let server = test_server(seeded_store(&["Science", "Art"], 6));

        let response = server
            .post("/quizzes")
            .json(&json!({"quiz_category": {"id": 1}, "previous_questions": [1, 3, 5]}))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({"success": true, "question": false}));
    }

    #[tokio::test]
    async fn test_play_quiz_all_categories() {
        let store = InMemoryStore::new();
        let science = store.add_category("Science");
        let art = store.add_category("Art");
        store.add_question("Q1", "A1", 1, science);
        store.add_question("Q2", "A2", 1, art);
        let server = test_server_with_random(store, ScriptedRandom::new(vec![1]));

        let response = server
            .post("/quizzes")
            .json(&json!({"quiz_category": {"type": "click", "id": 0}, "previous_questions": []}))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "success": true,
            "question": {"id": 2, "question": "Q2", "answer": "A2", "difficulty": 1, "category": 2}
        }));
    }

    #[tokio::test]
    async fn test_full_quiz_serves_every_question_once() {
        let server = test_server(seeded_store(&["Science", "Art"], 7));
        let mut previous: Vec<i64> = Vec::new();

        loop {
            let body: Value = server
                .post("/quizzes")
                .json(&json!({"quiz_category": {"id": "0"}, "previous_questions": previous}))
                .await
                .json();

            if body["question"] == Value::Bool(false) {
                break;
            }
            previous.push(body["question"]["id"].as_i64().unwrap());
            assert!(previous.len() <= 7);
        }

        let unique: HashSet<i64> = previous.iter().copied().collect();
        assert_eq!(unique.len(), 7);
    }

    #[tokio::test]
    async fn test_play_quiz_with_empty_body_picks_any() {
        let server = test_server(seeded_store(&["Science"], 1));

        let response = server.post("/quizzes").json(&json!({})).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["question"]["id"], 1);
    }

    #[tokio::test]
    async fn test_play_quiz_bad_previous_questions_is_400() {
        let server = test_server(seeded_store(&["Science"], 1));

        let response = server
            .post("/quizzes")
            .json(&json!({"quiz_category": {"id": 1}, "previous_questions": "1,2"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
