//! Quiz play.
//!
//! Stateless: the client keeps the list of questions it has seen and sends
//! it with every turn.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/quizzes` | Next unseen question, or `false` when none remain |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::QuizService;
