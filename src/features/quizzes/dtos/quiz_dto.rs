use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use crate::features::questions::dtos::QuestionResponseDto;
use crate::shared::deserializers::deserialize_lenient_i32;

/// Category picked on the quiz screen
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    /// Category id; `0` or an unknown id means any category
    #[serde(default, deserialize_with = "deserialize_lenient_i32")]
    #[schema(value_type = Option<i32>)]
    pub id: Option<i32>,
}

/// Request DTO for one quiz turn
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PlayQuizRequestDto {
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryDto>,

    /// Ids already served in this quiz
    #[serde(default)]
    pub previous_questions: Vec<i32>,
}

impl PlayQuizRequestDto {
    pub fn category_id(&self) -> Option<i32> {
        self.quiz_category.as_ref().and_then(|c| c.id)
    }
}

/// Response DTO for one quiz turn.
///
/// An exhausted quiz is sent as `"question": false` rather than `null`,
/// which is what existing clients test for.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlayQuizResponseDto {
    pub success: bool,
    #[serde(serialize_with = "serialize_question_or_false")]
    #[schema(value_type = Option<QuestionResponseDto>)]
    pub question: Option<QuestionResponseDto>,
}

fn serialize_question_or_false<S>(
    question: &Option<QuestionResponseDto>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match question {
        Some(q) => q.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}
