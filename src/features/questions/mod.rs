//! Trivia questions: paginated listing, search, creation and deletion.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | Page of questions with all categories |
//! | POST | `/questions?page=N` | Create a question, or search with `searchTerm` |
//! | DELETE | `/questions/{id}` | Delete a question |
//! | GET | `/categories/{id}/questions?page=N` | Page of one category's questions |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionService;
