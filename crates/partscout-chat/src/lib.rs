//! Conversational lookup for Partscout.
//!
//! Turns a free-text query into catalog matches: the [`KeywordExtractor`]
//! asks a language model for search keywords, the catalog matcher filters
//! rows, and every turn lands in the [`ConversationSession`] transcript.

pub mod assistant;
pub mod error;
pub mod extractor;
pub mod response;
pub mod session;

pub use assistant::CatalogAssistant;
pub use error::{ChatError, ExtractionError};
pub use extractor::{parse_keywords, KeywordExtractor};
pub use response::{ResponseRenderer, TableHeaders};
pub use session::{ConversationEntry, ConversationSession, TurnOutcome};
