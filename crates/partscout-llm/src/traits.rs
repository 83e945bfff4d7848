use async_trait::async_trait;

use crate::error::CompletionError;

// =============================================================================
// TextCompletion Trait
// =============================================================================

/// Single-turn text completion: send a prompt, get the reply text back.
///
/// Each call is independent. Implementations must not retry or cache.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
