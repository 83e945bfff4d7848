//! LLM-backed keyword extraction.
//!
//! Renders the instruction prompt around the user's query, sends it through a
//! [`TextCompletion`] and splits the reply into a [`KeywordSet`].

use partscout_core::config::{LlmConfig, DEFAULT_PROMPT_TEMPLATE, QUERY_PLACEHOLDER};
use partscout_core::KeywordSet;
use partscout_llm::TextCompletion;
use tracing::debug;

use crate::error::ExtractionError;

/// Split a completion reply on commas and newlines into normalized keywords.
///
/// Pieces are trimmed and uppercased; empty pieces are dropped, so the result
/// may be empty.
pub fn parse_keywords(text: &str) -> KeywordSet {
    KeywordSet::from_pieces(text.split(|c: char| c == ',' || c == '\n'))
}

/// Extracts search keywords from a free-text query.
pub struct KeywordExtractor<C> {
    completion: C,
    prompt_template: String,
}

impl<C: TextCompletion> KeywordExtractor<C> {
    /// Create an extractor with an explicit prompt template containing
    /// `{query}`.
    pub fn new(completion: C, prompt_template: impl Into<String>) -> Self {
        Self {
            completion,
            prompt_template: prompt_template.into(),
        }
    }

    /// Create an extractor using the prompt from `config`.
    pub fn from_config(completion: C, config: &LlmConfig) -> Self {
        Self::new(completion, config.prompt_template.clone())
    }

    /// Create an extractor with the built-in prompt.
    pub fn with_default_prompt(completion: C) -> Self {
        Self::new(completion, DEFAULT_PROMPT_TEMPLATE)
    }

    pub fn completion(&self) -> &C {
        &self.completion
    }

    /// The prompt sent for `query`. The query is embedded verbatim.
    pub fn render_prompt(&self, query: &str) -> String {
        self.prompt_template.replace(QUERY_PLACEHOLDER, query)
    }

    /// Ask the model for keywords. One remote call, no retry.
    pub async fn extract(&self, query: &str) -> Result<KeywordSet, ExtractionError> {
        let prompt = self.render_prompt(query);
        let reply = self.completion.complete(&prompt).await?;
        let keywords = parse_keywords(&reply);
        debug!(count = keywords.len(), keywords = ?keywords.as_slice(), "Keywords extracted");
        Ok(keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use partscout_llm::CompletionError;
    use std::sync::Mutex;

    /// Replies with a canned result and records every prompt it receives.
    struct ScriptedCompletion {
        reply: Result<String, String>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedCompletion {
        fn ok(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextCompletion for ScriptedCompletion {
        async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply
                .clone()
                .map_err(CompletionError::MalformedResponse)
        }
    }

    #[test]
    fn test_parse_keywords_commas_and_newlines() {
        let set = parse_keywords("manguera, 12mm\nTU1208 ,\n\n , poliuretano");
        assert_eq!(set.as_slice(), &["MANGUERA", "12MM", "TU1208", "POLIURETANO"]);
    }

    #[test]
    fn test_parse_keywords_crlf() {
        let set = parse_keywords("valvula\r\nsolenoide\r\n");
        assert_eq!(set.as_slice(), &["VALVULA", "SOLENOIDE"]);
    }

    #[test]
    fn test_parse_keywords_keeps_inner_spaces() {
        let set = parse_keywords("conector recto, 1/4 pulgada");
        assert_eq!(set.as_slice(), &["CONECTOR RECTO", "1/4 PULGADA"]);
    }

    #[test]
    fn test_parse_keywords_empty_reply() {
        assert!(parse_keywords("").is_empty());
        assert!(parse_keywords(" , \n ,").is_empty());
    }

    #[test]
    fn test_render_prompt_embeds_query() {
        let extractor = KeywordExtractor::new(ScriptedCompletion::ok(""), "Q=[{query}]");
        assert_eq!(extractor.render_prompt("a, b"), "Q=[a, b]");
    }

    #[test]
    fn test_default_prompt_asks_for_comma_list() {
        let extractor = KeywordExtractor::with_default_prompt(ScriptedCompletion::ok(""));
        let prompt = extractor.render_prompt("manguera de 12mm, azul");
        assert!(prompt.contains("Pregunta del usuario: manguera de 12mm, azul"));
        assert!(prompt.contains("separados por comas"));
        assert!(!prompt.contains(QUERY_PLACEHOLDER));
    }

    #[tokio::test]
    async fn test_extract_sends_prompt_and_parses_reply() {
        let completion = ScriptedCompletion::ok("manguera, 12mm, TU1208");
        let extractor = KeywordExtractor::new(completion, "buscar: {query}");

        let keywords = extractor.extract("manguera de 12").await.unwrap();
        assert_eq!(keywords.as_slice(), &["MANGUERA", "12MM", "TU1208"]);

        let prompts = extractor.completion.prompts.lock().unwrap();
        assert_eq!(prompts.as_slice(), &["buscar: manguera de 12"]);
    }

    #[tokio::test]
    async fn test_extract_may_return_empty_set() {
        let extractor = KeywordExtractor::with_default_prompt(ScriptedCompletion::ok(" ,\n"));
        let keywords = extractor.extract("??").await.unwrap();
        assert!(keywords.is_empty());
    }

    #[tokio::test]
    async fn test_extract_failure_becomes_extraction_error() {
        let extractor =
            KeywordExtractor::with_default_prompt(ScriptedCompletion::failing("no choices"));
        let err = extractor.extract("manguera").await.unwrap_err();
        assert!(err.message.contains("no choices"));
        assert_eq!(extractor.completion.prompts.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_from_config_uses_configured_template() {
        let config = LlmConfig {
            prompt_template: "kw? {query}".to_string(),
            ..LlmConfig::default()
        };
        let extractor = KeywordExtractor::from_config(ScriptedCompletion::ok(""), &config);
        assert_eq!(extractor.render_prompt("x"), "kw? x");
    }
}
