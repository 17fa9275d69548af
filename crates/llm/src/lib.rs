//! `chefbyte-llm`
//!
//! **Responsibility:** the language-model boundary.
//!
//! This crate is intentionally **not** part of the reconciliation core:
//! - It produces raw, untyped action records; the engine validates them.
//! - It never mutates inventory state.
//! - Replies are schema-parsed, never evaluated.

pub mod config;
pub mod error;
pub mod openai;
pub mod parse;
pub mod prompt;
pub mod source;

pub use config::OpenAiConfig;
pub use error::LlmError;
pub use openai::OpenAiActionSource;
pub use parse::parse_actions;
pub use source::ActionSource;
