//! Text-generation adapters. Implement TextGenerator for LLM integration.
//!
//! Provides OpenAI-compatible adapter, mock adapter for testing, and the
//! default prompt templates.

pub mod mock_adapter;
pub mod openai_adapter;
pub mod prompts;

pub use mock_adapter::MockTextGenerator;
pub use openai_adapter::OpenAiAdapter;
