use crate::ai::providers::{GeminiProvider, ModelProvider, ProviderError};
use crate::types::{ContextTurn, Dietary, MoodAnalysis, Recipe};
use anyhow::Result;
use serde_json::json;

/// Persona for the Coach screen, established once per advice call.
const COACH_SYSTEM_INSTRUCTION: &str = "You are a warm, empathetic, and holistic wellness coach \
for the 'Life Alive' app. Focus on organic nutrition, mindfulness, and gentle lifestyle changes. \
Be concise but encouraging.";

const MOOD_FALLBACK_EMPTY: &str = "Unable to analyze";
const MOOD_FALLBACK_ERROR: &str = "Error analyzing";

/// The model client gateway. Translates one domain intent into one external
/// call and back into typed data; every operation issues a single request
/// with no retry.
pub struct WellnessAI {
    provider: Box<dyn ModelProvider>,
}

impl WellnessAI {
    /// Builds the gateway against the Gemini service configured in the
    /// environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            provider: Box::new(GeminiProvider::from_env()?),
        })
    }

    /// Builds the gateway over any provider. The seam tests use to
    /// substitute a scripted model.
    pub fn with_provider(provider: Box<dyn ModelProvider>) -> Self {
        Self { provider }
    }

    /// Generates one recipe from free-text ingredients and a dietary
    /// preference. Any failure (transport, API, empty reply, malformed
    /// JSON) degrades to `None`; the screen shows its empty state.
    pub async fn generate_recipe(&self, ingredients: &str, dietary: Dietary) -> Option<Recipe> {
        let prompt = recipe_prompt(ingredients, dietary);
        match self
            .provider
            .generate_structured(&prompt, &recipe_schema())
            .await
        {
            Ok(text) => parse_recipe_json(&text),
            Err(err) => {
                tracing::warn!("recipe generation failed: {err}");
                None
            }
        }
    }

    /// Asks the coach for a reply given the prior conversation. Failures
    /// propagate to the caller; an empty reply is returned as-is and the
    /// conversation layer substitutes its placeholder.
    pub async fn wellness_advice(
        &self,
        history: &[ContextTurn],
        message: &str,
    ) -> Result<String, ProviderError> {
        self.provider
            .chat(COACH_SYSTEM_INSTRUCTION, history, message)
            .await
    }

    /// Analyzes a journal note. Never fails: the journal entry must be
    /// recordable whatever the model service did, so every failure becomes
    /// a fixed fallback value.
    pub async fn analyze_mood(&self, note: &str) -> MoodAnalysis {
        let prompt = mood_prompt(note);
        match self
            .provider
            .generate_structured(&prompt, &mood_schema())
            .await
        {
            Ok(text) if text.trim().is_empty() => mood_fallback(MOOD_FALLBACK_EMPTY),
            Ok(text) => match serde_json::from_str(&text) {
                Ok(analysis) => analysis,
                Err(err) => {
                    tracing::warn!("mood analysis returned malformed JSON: {err}");
                    mood_fallback(MOOD_FALLBACK_ERROR)
                }
            },
            Err(err) => {
                tracing::warn!("mood analysis failed: {err}");
                mood_fallback(MOOD_FALLBACK_ERROR)
            }
        }
    }
}

fn recipe_prompt(ingredients: &str, dietary: Dietary) -> String {
    format!(
        "Create a healthy, organic, \"Life Alive\" cafe style bowl or dish using these \
ingredients: {ingredients}. Dietary preferences: {dietary}. Make it vibrant and nourishing."
    )
}

fn mood_prompt(note: &str) -> String {
    format!(
        "Analyze this journal entry and provide a brief sentiment summary (1 sentence) and \
3 quick holistic wellness suggestions (e.g. herbal tea, a stretch, a breathing exercise). \
Entry: \"{note}\""
    )
}

fn recipe_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "description": { "type": "STRING" },
            "ingredients": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "instructions": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "benefits": { "type": "STRING" },
            "prepTime": { "type": "STRING" },
            "calories": { "type": "NUMBER" }
        }
    })
}

fn mood_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "sentiment": { "type": "STRING" },
            "suggestions": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        }
    })
}

fn parse_recipe_json(text: &str) -> Option<Recipe> {
    if text.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(text) {
        Ok(recipe) => Some(recipe),
        Err(err) => {
            tracing::warn!("recipe response was not valid JSON: {err}");
            None
        }
    }
}

fn mood_fallback(sentiment: &str) -> MoodAnalysis {
    MoodAnalysis {
        sentiment: sentiment.to_string(),
        suggestions: Vec::new(),
    }
}
