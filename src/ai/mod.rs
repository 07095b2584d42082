//! Chat-completion API connectivity
//!
//! A minimal client for the `doctor` smoke test. BYOK (bring your own
//! key): credentials come from environment variables, optionally loaded
//! from a local `.env` file by the caller.
//!
//! # Environment Variables
//!
//! - `OPENAI_API_KEY`: OpenAI backend
//! - `ANTHROPIC_API_KEY`: Anthropic backend

mod client;

pub use client::{ChatClient, ChatConfig, LlmBackend, Message, Role};

use thiserror::Error;

/// Errors that can occur in the AI module
#[derive(Error, Debug)]
pub enum AiError {
    #[error("Missing API key: {env_var} not set")]
    MissingApiKey { env_var: String },

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse API response: {0}")]
    ParseError(String),
}

pub type AiResult<T> = Result<T, AiError>;
