use std::sync::Arc;

use crate::core::error::Result;
use crate::features::questions::dtos::QuestionResponseDto;
use crate::features::questions::models::Question;
use crate::modules::storage::TriviaStore;
use crate::shared::random::{choose, RandomSource};

/// Picks the next unseen quiz question.
///
/// Holds no per-session state: the client sends back the ids it has already
/// been served on every turn.
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
    random: Arc<dyn RandomSource>,
}

/// Uniform pick over the candidate pool, `None` when it is empty
pub fn select_question(candidates: &[Question], random: &dyn RandomSource) -> Option<Question> {
    choose(random, candidates).cloned()
}

impl QuizService {
    pub fn new(store: Arc<dyn TriviaStore>, random: Arc<dyn RandomSource>) -> Self {
        Self { store, random }
    }

    /// Next question for the quiz, or `None` once the pool is exhausted.
    ///
    /// A category id that does not resolve (including the front end's `0`
    /// for "all") means any category.
    pub async fn next_question(
        &self,
        category_id: Option<i32>,
        previous_questions: &[i32],
    ) -> Result<Option<QuestionResponseDto>> {
        let category = match category_id {
            Some(id) => self.store.get_category(id).await?,
            None => None,
        };

        let candidates = self
            .store
            .list_questions_excluding(category.as_ref().map(|c| c.id), previous_questions)
            .await?;

        tracing::debug!(
            "Quiz candidates: category={:?}, previous={}, remaining={}",
            category.as_ref().map(|c| c.kind.as_str()),
            previous_questions.len(),
            candidates.len()
        );

        Ok(select_question(&candidates, self.random.as_ref()).map(Into::into))
    }
}
