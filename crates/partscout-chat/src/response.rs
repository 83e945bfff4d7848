//! Plain-text rendering of transcript entries.
//!
//! Matches are shown as an aligned table; no-match and failed turns get the
//! configured fixed messages.

use partscout_core::config::{CatalogConfig, ChatConfig};
use partscout_core::{MatchResult, ProductRow};

use crate::session::{ConversationEntry, ConversationSession, TurnOutcome};

/// Column titles for the result table.
#[derive(Debug, Clone)]
pub struct TableHeaders {
    pub code: String,
    pub description: String,
    pub quantity: String,
    pub lead_time: String,
}

impl Default for TableHeaders {
    fn default() -> Self {
        Self::from(&CatalogConfig::default())
    }
}

impl From<&CatalogConfig> for TableHeaders {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            code: config.code_column.clone(),
            description: config.description_column.clone(),
            quantity: config.quantity_column.clone(),
            lead_time: config.lead_time_column.clone(),
        }
    }
}

/// Renders entries and whole transcripts for a terminal.
pub struct ResponseRenderer {
    messages: ChatConfig,
    headers: TableHeaders,
}

impl ResponseRenderer {
    pub fn new(messages: ChatConfig, headers: TableHeaders) -> Self {
        Self { messages, headers }
    }

    /// Title and greeting shown once at startup.
    pub fn banner(&self) -> String {
        format!("{}\n{}\n", self.messages.title, self.messages.greeting)
    }

    /// The user's line followed by the assistant's reply.
    pub fn render_entry(&self, entry: &ConversationEntry) -> String {
        let mut out = format!("> {}\n", entry.query);
        match &entry.outcome {
            TurnOutcome::Matches { result } => out.push_str(&self.render_table(result)),
            TurnOutcome::NoMatch => {
                out.push_str(&self.messages.no_match_message);
                out.push('\n');
            }
            TurnOutcome::ExtractionFailed { message } => {
                out.push_str(&format!(
                    "{}: {}\n",
                    self.messages.extraction_error_message, message
                ));
            }
        }
        out
    }

    /// Every entry of the session, oldest first.
    pub fn render_transcript(&self, session: &ConversationSession) -> String {
        session
            .history()
            .iter()
            .map(|e| self.render_entry(e))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Aligned four-column table of matched rows.
    pub fn render_table(&self, result: &MatchResult) -> String {
        let header = [
            self.headers.code.clone(),
            self.headers.description.clone(),
            self.headers.quantity.clone(),
            self.headers.lead_time.clone(),
        ];
        let body: Vec<[String; 4]> = result.rows().iter().map(row_cells).collect();

        let mut widths = header.clone().map(|h| h.chars().count());
        for cells in &body {
            for (w, cell) in widths.iter_mut().zip(cells) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        out.push_str(&format_line(&header, &widths));
        out.push_str(
            &widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        out.push('\n');
        for cells in &body {
            out.push_str(&format_line(cells, &widths));
        }
        out.push_str(&format!("({} resultado(s))\n", result.len()));
        out
    }
}

fn row_cells(row: &ProductRow) -> [String; 4] {
    [
        row.code.clone().unwrap_or_default(),
        row.description.clone().unwrap_or_default(),
        row.quantity_display(),
        row.lead_time.clone().unwrap_or_default(),
    ]
}

fn format_line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| {
            let pad = w.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    format!("{}\n", padded.join(" | ").trim_end())
}
