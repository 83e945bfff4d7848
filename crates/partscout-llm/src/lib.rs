//! Remote text completion for Partscout.
//!
//! [`TextCompletion`] is the capability the keyword extractor depends on;
//! [`ChatCompletionsClient`] implements it against any OpenAI-compatible
//! `/chat/completions` endpoint (Groq by default).

pub mod error;
pub mod openai;
pub mod traits;

pub use error::CompletionError;
pub use openai::{api_key_from_env, ChatCompletionsClient};
pub use traits::TextCompletion;
