pub mod gemini;

use crate::types::ContextTurn;
use async_trait::async_trait;
use thiserror::Error;

pub use gemini::GeminiProvider;

/// A single failed request to the model service. There is no retry anywhere;
/// every failure is terminal for that request.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to the model service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("model service returned HTTP {status}: {body}")]
    Api { status: u16, body: String },
    #[error("could not read the model response envelope: {0}")]
    Envelope(#[from] serde_json::Error),
}

/// The two call shapes this app needs from a generative-model service.
///
/// Implementations issue exactly one outbound request per call. Returned
/// text may be empty when the service answered without producing any
/// candidate; callers decide what an empty reply means for their screen.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// One generation call constrained to `schema`, returning the raw JSON
    /// text the model produced.
    async fn generate_structured(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> Result<String, ProviderError>;

    /// One multi-turn chat completion: `system_instruction` establishes the
    /// persona, `history` is replayed as prior turns, `message` is the
    /// newest user turn.
    async fn chat(
        &self,
        system_instruction: &str,
        history: &[ContextTurn],
        message: &str,
    ) -> Result<String, ProviderError>;
}
