/// AI module for Life Alive
///
/// This module is the boundary to the external generative-model service.
/// Each screen intent (generate a recipe, get coaching advice, analyze a
/// journal note) maps to exactly one request; the integration contract is
/// "ask for structured output, deserialize against a fixed shape".
///
/// # Architecture
///
/// - `client` - The `WellnessAI` gateway with the three domain operations
/// - `providers` - The `ModelProvider` seam and the Gemini implementation
mod client;
pub mod providers;

pub use client::WellnessAI;
pub use providers::{GeminiProvider, ModelProvider, ProviderError};

use once_cell::sync::OnceCell;

static GATEWAY: OnceCell<WellnessAI> = OnceCell::new();

/// Validates the model configuration and installs the shared gateway.
/// Called once from `main` before the UI launches; a missing credential is
/// a startup fault, not a runtime condition.
pub fn init_from_env() -> anyhow::Result<()> {
    let gateway = WellnessAI::from_env()?;
    let _ = GATEWAY.set(gateway);
    Ok(())
}

/// The shared gateway instance the views call into.
pub fn gateway() -> &'static WellnessAI {
    GATEWAY
        .get()
        .expect("ai::init_from_env must run before the UI launches")
}
