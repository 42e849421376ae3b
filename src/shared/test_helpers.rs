//! In-memory doubles and fixtures shared by unit and handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use fake::faker::lorem::en::{Sentence, Word};
use fake::Fake;

use crate::core::app::api_router;
use crate::core::error::{AppError, Result};
use crate::core::middleware::cors_layer;
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};
use crate::modules::storage::TriviaStore;
use crate::shared::random::{RandomSource, ThreadRandom};

/// Category id that no fixture ever creates
const MISSING_CATEGORY_ID: i32 = 999;

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    last_category_id: i32,
    last_question_id: i32,
}

/// `TriviaStore` kept in memory; ids are assigned from 1 like `SERIAL`.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    failing: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_category(&self, kind: &str) -> i32 {
        let mut tables = self.tables.lock().unwrap();
        tables.last_category_id += 1;
        let id = tables.last_category_id;
        tables.categories.push(Category {
            id,
            kind: kind.to_string(),
        });
        id
    }

    pub fn add_question(
        &self,
        question: &str,
        answer: &str,
        difficulty: i32,
        category: i32,
    ) -> i32 {
        let mut tables = self.tables.lock().unwrap();
        tables.last_question_id += 1;
        let id = tables.last_question_id;
        tables.questions.push(Question {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
            difficulty,
            category,
        });
        id
    }

    /// Question whose category row does not exist
    pub fn insert_orphan_question(&self, question: &str, answer: &str) -> i32 {
        self.add_question(question, answer, 1, MISSING_CATEGORY_ID)
    }

    pub fn question(&self, id: i32) -> Option<Question> {
        let tables = self.tables.lock().unwrap();
        tables.questions.iter().find(|q| q.id == id).cloned()
    }

    pub fn question_count(&self) -> usize {
        self.tables.lock().unwrap().questions.len()
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn questions_where<F>(&self, keep: F) -> Result<Vec<Question>>
    where
        F: Fn(&Question) -> bool,
    {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        let mut questions: Vec<Question> =
            tables.questions.iter().filter(|q| keep(q)).cloned().collect();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }
}

#[async_trait]
impl TriviaStore for InMemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.check()?;
        let mut categories = self.tables.lock().unwrap().categories.clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        self.questions_where(|_| true)
    }

    async fn list_questions_by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        self.questions_where(|q| q.category == category_id)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let needle = term.to_lowercase();
        self.questions_where(|q| q.question.to_lowercase().contains(&needle))
    }

    async fn get_question(&self, id: i32) -> Result<Option<Question>> {
        self.check()?;
        Ok(self.question(id))
    }

    async fn list_questions_excluding(
        &self,
        category_id: Option<i32>,
        excluded: &[i32],
    ) -> Result<Vec<Question>> {
        self.questions_where(|q| {
            category_id.map_or(true, |c| q.category == c) && !excluded.contains(&q.id)
        })
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question> {
        self.check()?;
        if self.get_category(question.category).await?.is_none() {
            return Err(AppError::Unprocessable(format!(
                "Category {} does not exist",
                question.category
            )));
        }

        let id = self.add_question(
            &question.question,
            &question.answer,
            question.difficulty,
            question.category,
        );
        self.question(id)
            .ok_or_else(|| AppError::Internal("Inserted question vanished".to_string()))
    }

    async fn delete_question(&self, id: i32) -> Result<bool> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        let before = tables.questions.len();
        tables.questions.retain(|q| q.id != id);
        Ok(tables.questions.len() < before)
    }
}

/// Store whose every call fails like an unreachable database
pub fn failing_store() -> InMemoryStore {
    InMemoryStore {
        failing: true,
        ..Default::default()
    }
}

/// Store with the given categories and `questions` questions spread over
/// them round-robin. Question `i` has id `i` and its text starts with
/// `"Question i"`.
pub fn seeded_store(categories: &[&str], questions: usize) -> InMemoryStore {
    let store = InMemoryStore::new();
    let ids: Vec<i32> = categories.iter().map(|c| store.add_category(c)).collect();

    for i in 0..questions {
        let sentence: String = Sentence(3..6).fake();
        let answer: String = Word().fake();
        let category = ids.get(i % ids.len().max(1)).copied().unwrap_or(MISSING_CATEGORY_ID);
        store.add_question(
            &format!("Question {}: {}", i + 1, sentence),
            &answer,
            (i % 5) as i32 + 1,
            category,
        );
    }

    store
}

/// Random source replaying a fixed script of indices (wrapped into range)
#[derive(Default)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    calls: AtomicUsize,
}

impl ScriptedRandom {
    pub fn new(script: Vec<usize>) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&self, len: usize) -> usize {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.script.is_empty() {
            return 0;
        }
        self.script[call % self.script.len()] % len
    }
}

pub fn test_server(store: InMemoryStore) -> TestServer {
    build_server(store, Arc::new(ThreadRandom))
}

pub fn test_server_with_random(store: InMemoryStore, random: ScriptedRandom) -> TestServer {
    build_server(store, Arc::new(random))
}

fn build_server(store: InMemoryStore, random: Arc<dyn RandomSource>) -> TestServer {
    let app = api_router(Arc::new(store), random).layer(cors_layer(vec!["*".to_string()]));
    TestServer::new(app).unwrap()
}
