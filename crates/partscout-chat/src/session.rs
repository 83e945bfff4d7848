//! Conversation transcript.
//!
//! The session is an explicit, caller-owned state object: append-only while
//! it lives, emptied only by [`ConversationSession::reset`], gone when the
//! process exits.

use chrono::{DateTime, Local};
use partscout_core::MatchResult;
use serde::Serialize;
use uuid::Uuid;

// =============================================================================
// Entries
// =============================================================================

/// What one submitted query produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnOutcome {
    /// One or more catalog rows matched.
    Matches { result: MatchResult },
    /// Keywords were extracted but nothing matched.
    NoMatch,
    /// The remote keyword extraction failed; the matcher did not run.
    ExtractionFailed { message: String },
}

impl TurnOutcome {
    /// Outcome for a matcher result; an absent result is `NoMatch`.
    pub fn from_match(result: Option<MatchResult>) -> Self {
        match result {
            Some(result) => TurnOutcome::Matches { result },
            None => TurnOutcome::NoMatch,
        }
    }
}

/// One (query, outcome) pair of the transcript.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationEntry {
    pub query: String,
    pub outcome: TurnOutcome,
    pub submitted_at: DateTime<Local>,
}

impl ConversationEntry {
    /// Matched rows, if any. Absent for both no-match and failed turns.
    pub fn result(&self) -> Option<&MatchResult> {
        match &self.outcome {
            TurnOutcome::Matches { result } => Some(result),
            _ => None,
        }
    }

    /// Extraction failure message, if the turn failed.
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            TurnOutcome::ExtractionFailed { message } => Some(message),
            _ => None,
        }
    }
}

// =============================================================================
// ConversationSession
// =============================================================================

/// Ordered, append-only transcript of one interactive session.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    id: Uuid,
    started_at: DateTime<Local>,
    entries: Vec<ConversationEntry>,
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationSession {
    /// Start an empty session.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Local::now(),
            entries: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    /// Append a turn and return it.
    pub fn record(&mut self, query: impl Into<String>, outcome: TurnOutcome) -> &ConversationEntry {
        self.entries.push(ConversationEntry {
            query: query.into(),
            outcome,
            submitted_at: Local::now(),
        });
        &self.entries[self.entries.len() - 1]
    }

    /// All turns in submission order.
    pub fn history(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ConversationEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Explicitly discard the transcript and start over with a new id.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partscout_core::ProductRow;

    fn one_row() -> MatchResult {
        MatchResult::from_rows(vec![ProductRow::new("TU1208", "MANGUERA 12MM", 5.0, "3 DIAS")])
            .unwrap()
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = ConversationSession::new();
        assert!(session.is_empty());
        assert!(session.history().is_empty());
        assert!(session.last().is_none());
        assert_ne!(session.id(), Uuid::nil());
    }

    #[test]
    fn test_record_keeps_submission_order_regardless_of_outcome() {
        let mut session = ConversationSession::new();
        session.record("manguera", TurnOutcome::from_match(Some(one_row())));
        session.record("xyz", TurnOutcome::from_match(None));
        session.record(
            "valvula",
            TurnOutcome::ExtractionFailed {
                message: "timeout".to_string(),
            },
        );

        let queries: Vec<&str> = session.history().iter().map(|e| e.query.as_str()).collect();
        assert_eq!(queries, vec!["manguera", "xyz", "valvula"]);
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn test_record_returns_new_entry() {
        let mut session = ConversationSession::new();
        let entry = session.record("manguera", TurnOutcome::NoMatch);
        assert_eq!(entry.query, "manguera");
        assert_eq!(entry.outcome, TurnOutcome::NoMatch);
    }

    #[test]
    fn test_entry_accessors() {
        let mut session = ConversationSession::new();
        session.record("a", TurnOutcome::from_match(Some(one_row())));
        session.record("b", TurnOutcome::NoMatch);
        session.record(
            "c",
            TurnOutcome::ExtractionFailed {
                message: "boom".to_string(),
            },
        );

        let history = session.history();
        assert_eq!(history[0].result().map(|r| r.len()), Some(1));
        assert!(history[0].error().is_none());
        assert!(history[1].result().is_none());
        assert!(history[1].error().is_none());
        assert!(history[2].result().is_none());
        assert_eq!(history[2].error(), Some("boom"));
    }

    #[test]
    fn test_entries_are_timestamped_in_order() {
        let mut session = ConversationSession::new();
        session.record("a", TurnOutcome::NoMatch);
        session.record("b", TurnOutcome::NoMatch);
        let h = session.history();
        assert!(h[0].submitted_at <= h[1].submitted_at);
        assert!(session.started_at() <= h[0].submitted_at);
    }

    #[test]
    fn test_reset_clears_and_renews_id() {
        let mut session = ConversationSession::new();
        let old_id = session.id();
        session.record("a", TurnOutcome::NoMatch);
        session.reset();
        assert!(session.is_empty());
        assert_ne!(session.id(), old_id);
    }

    #[test]
    fn test_outcome_serialization_is_tagged() {
        let json = serde_json::to_value(TurnOutcome::NoMatch).unwrap();
        assert_eq!(json["kind"], "no_match");

        let json = serde_json::to_value(TurnOutcome::ExtractionFailed {
            message: "x".to_string(),
        })
        .unwrap();
        assert_eq!(json["kind"], "extraction_failed");
        assert_eq!(json["message"], "x");
    }
}
