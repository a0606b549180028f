//! Model-backed collaborators for interviewer.
//!
//! This crate provides:
//! - [`OllamaClient`], a small non-streaming chat client
//! - [`OllamaQuestionGenerator`] and [`OllamaAnswerEvaluator`], which plug an
//!   Ollama model into the interview controller
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              InterviewController              │
//! └───────────────┬───────────────┬──────────────┘
//!                 │               │
//!                 ▼               ▼
//! ┌─────────────────────┐ ┌─────────────────────┐
//! │ OllamaQuestionGen.  │ │ OllamaAnswerEval.   │
//! └──────────┬──────────┘ └──────────┬──────────┘
//!            └───────────┬───────────┘
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │         OllamaClient (POST /api/chat)         │
//! └──────────────────────────────────────────────┘
//! ```

mod error;

pub mod collaborators;
pub mod ollama;
pub mod prompts;

pub use collaborators::{OllamaAnswerEvaluator, OllamaQuestionGenerator};
pub use error::{Error, Result};
pub use ollama::{DEFAULT_BASE_URL, DEFAULT_MODEL, OllamaClient};
