//! Catalog assistant: the pipeline boundary for one lookup turn.
//!
//! query → keyword extraction → catalog match → transcript entry. Per-query
//! failures are recorded in the transcript instead of being returned.

use partscout_catalog::{match_catalog, CatalogStore};
use partscout_llm::TextCompletion;
use tracing::{info, warn};

use crate::error::ChatError;
use crate::extractor::KeywordExtractor;
use crate::session::{ConversationEntry, ConversationSession, TurnOutcome};

/// Owns the extractor, the read-only catalog and the session transcript.
pub struct CatalogAssistant<C> {
    extractor: KeywordExtractor<C>,
    catalog: CatalogStore,
    session: ConversationSession,
}

impl<C: TextCompletion> CatalogAssistant<C> {
    pub fn new(extractor: KeywordExtractor<C>, catalog: CatalogStore) -> Self {
        Self {
            extractor,
            catalog,
            session: ConversationSession::new(),
        }
    }

    /// Run one turn and return the entry it appended.
    ///
    /// Only an empty query is rejected; extraction failures and empty
    /// matches are recorded as entries.
    pub async fn submit(&mut self, query: &str) -> Result<&ConversationEntry, ChatError> {
        if query.trim().is_empty() {
            return Err(ChatError::EmptyQuery);
        }

        let outcome = match self.extractor.extract(query).await {
            Ok(keywords) => {
                let result = match_catalog(&keywords, &self.catalog);
                info!(
                    keywords = keywords.len(),
                    matches = result.as_ref().map_or(0, |r| r.len()),
                    "Lookup finished"
                );
                TurnOutcome::from_match(result)
            }
            Err(e) => {
                warn!(error = %e, "Keyword extraction failed");
                TurnOutcome::ExtractionFailed { message: e.message }
            }
        };

        Ok(self.session.record(query, outcome))
    }

    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    /// Clear the transcript. The catalog is untouched.
    pub fn reset_session(&mut self) {
        self.session.reset();
        info!(session = %self.session.id(), "Session reset");
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }
}
