//! Tests for the model client gateway against a scripted provider.

use async_trait::async_trait;
use life_alive::ai::{ModelProvider, ProviderError, WellnessAI};
use life_alive::state::{Conversation, MoodJournal};
use life_alive::types::{ContextTurn, Dietary};
use serde_json::Value;
use std::sync::{Arc, Mutex};

struct StructuredCall {
    prompt: String,
    schema: Value,
}

struct ChatCall {
    system_instruction: String,
    history: Vec<ContextTurn>,
    message: String,
}

/// A scripted stand-in for the model service. `None` replies simulate a
/// failed request.
#[derive(Default)]
struct MockProvider {
    structured_reply: Option<String>,
    chat_reply: Option<String>,
    structured_calls: Arc<Mutex<Vec<StructuredCall>>>,
    chat_calls: Arc<Mutex<Vec<ChatCall>>>,
}

impl MockProvider {
    fn structured_ok(reply: &str) -> Self {
        Self {
            structured_reply: Some(reply.to_string()),
            ..Self::default()
        }
    }

    fn chat_ok(reply: &str) -> Self {
        Self {
            chat_reply: Some(reply.to_string()),
            ..Self::default()
        }
    }

    fn failing() -> Self {
        Self::default()
    }

    fn structured_calls(&self) -> Arc<Mutex<Vec<StructuredCall>>> {
        Arc::clone(&self.structured_calls)
    }

    fn chat_calls(&self) -> Arc<Mutex<Vec<ChatCall>>> {
        Arc::clone(&self.chat_calls)
    }
}

fn service_down() -> ProviderError {
    ProviderError::Api {
        status: 503,
        body: "service unavailable".to_string(),
    }
}

#[async_trait]
impl ModelProvider for MockProvider {
    async fn generate_structured(
        &self,
        prompt: &str,
        schema: &Value,
    ) -> Result<String, ProviderError> {
        self.structured_calls.lock().unwrap().push(StructuredCall {
            prompt: prompt.to_string(),
            schema: schema.clone(),
        });
        match &self.structured_reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(service_down()),
        }
    }

    async fn chat(
        &self,
        system_instruction: &str,
        history: &[ContextTurn],
        message: &str,
    ) -> Result<String, ProviderError> {
        self.chat_calls.lock().unwrap().push(ChatCall {
            system_instruction: system_instruction.to_string(),
            history: history.to_vec(),
            message: message.to_string(),
        });
        match &self.chat_reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(service_down()),
        }
    }
}

const RECIPE_JSON: &str = r#"{
    "name": "Emerald Harvest Bowl",
    "description": "A vibrant bowl of greens and grains.",
    "ingredients": ["1 cup quinoa", "2 cups kale"],
    "instructions": ["Rinse and cook the quinoa.", "Massage the kale with lemon.", "Assemble and serve."],
    "benefits": "Rich in iron and fiber.",
    "prepTime": "25 min",
    "calories": 430
}"#;

mod recipe_tests {
    use super::*;

    #[tokio::test]
    async fn test_generate_recipe_issues_one_call_with_both_inputs_in_the_prompt() {
        let mock = MockProvider::structured_ok(RECIPE_JSON);
        let calls = mock.structured_calls();
        let ai = WellnessAI::with_provider(Box::new(mock));

        let recipe = ai.generate_recipe("quinoa, kale", Dietary::Vegan).await.unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].prompt.contains("quinoa, kale"));
        assert!(calls[0].prompt.contains("Vegan"));
        assert_eq!(calls[0].schema["properties"]["calories"]["type"], "NUMBER");

        // Calories arrive as a number and instructions as a non-empty
        // ordered sequence.
        assert_eq!(recipe.calories, 430.0);
        assert!(!recipe.instructions.is_empty());
        assert_eq!(recipe.instructions[0], "Rinse and cook the quinoa.");
    }

    #[tokio::test]
    async fn test_generate_recipe_treats_malformed_json_as_total_failure() {
        let ai = WellnessAI::with_provider(Box::new(MockProvider::structured_ok(
            "Here's a lovely bowl for you!",
        )));
        assert!(ai.generate_recipe("quinoa", Dietary::Paleo).await.is_none());
    }

    #[tokio::test]
    async fn test_generate_recipe_returns_none_on_empty_reply() {
        let ai = WellnessAI::with_provider(Box::new(MockProvider::structured_ok("")));
        assert!(ai.generate_recipe("quinoa", Dietary::Vegan).await.is_none());
    }

    #[tokio::test]
    async fn test_generate_recipe_swallows_service_failure() {
        let ai = WellnessAI::with_provider(Box::new(MockProvider::failing()));
        assert!(ai.generate_recipe("quinoa", Dietary::Vegan).await.is_none());
    }

    #[test]
    fn test_recipe_serde_round_trip_is_lossless() {
        let recipe: life_alive::types::Recipe = serde_json::from_str(RECIPE_JSON).unwrap();
        let serialized = serde_json::to_string(&recipe).unwrap();

        // The wire keys keep their camelCase names.
        assert!(serialized.contains("\"prepTime\""));

        let round_tripped: life_alive::types::Recipe = serde_json::from_str(&serialized).unwrap();
        assert_eq!(round_tripped, recipe);
    }
}

mod advice_tests {
    use super::*;
    use life_alive::state::conversation::GREETING;
    use life_alive::types::Role;

    #[tokio::test]
    async fn test_advice_propagates_service_failure() {
        let ai = WellnessAI::with_provider(Box::new(MockProvider::failing()));
        let result = ai.wellness_advice(&[], "I feel anxious").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_second_turn_replays_the_full_prior_conversation() {
        let mock = MockProvider::chat_ok("Take a slow breath with me.");
        let calls = mock.chat_calls();
        let ai = WellnessAI::with_provider(Box::new(mock));

        let mut conversation = Conversation::new();

        // First user turn.
        let (context, message) = conversation.begin_turn("I feel anxious").unwrap();
        let reply = ai.wellness_advice(&context, &message.text).await.unwrap();
        conversation.append_model(&reply);

        // Second user turn: the context replays seed + user + model.
        let (context, message) = conversation.begin_turn("What about sleep?").unwrap();
        ai.wellness_advice(&context, &message.text).await.unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 2);

        let second = &calls[1];
        assert_eq!(second.history.len(), 3);
        assert_eq!(second.history[0].role, Role::Model);
        assert_eq!(second.history[0].text, GREETING);
        assert_eq!(second.history[1].role, Role::User);
        assert_eq!(second.history[1].text, "I feel anxious");
        assert_eq!(second.history[2].role, Role::Model);
        assert_eq!(second.history[2].text, "Take a slow breath with me.");
        assert_eq!(second.message, "What about sleep?");
        assert!(second.system_instruction.contains("wellness coach"));
    }

    #[tokio::test]
    async fn test_failed_turn_appends_no_model_message() {
        let ai = WellnessAI::with_provider(Box::new(MockProvider::failing()));
        let mut conversation = Conversation::new();

        let (context, message) = conversation.begin_turn("hello?").unwrap();
        let result = ai.wellness_advice(&context, &message.text).await;
        assert!(result.is_err());

        // The user's message stays the last entry; no error turn appears.
        let messages = conversation.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages.last().unwrap().role, Role::User);
    }
}

mod mood_tests {
    use super::*;

    #[tokio::test]
    async fn test_analyze_mood_parses_the_declared_shape() {
        let ai = WellnessAI::with_provider(Box::new(MockProvider::structured_ok(
            r#"{"sentiment": "Hopeful under the tiredness.", "suggestions": ["Chamomile tea", "A short walk", "Box breathing"]}"#,
        )));
        let analysis = ai.analyze_mood("I'm exhausted but hopeful").await;
        assert_eq!(analysis.sentiment, "Hopeful under the tiredness.");
        assert_eq!(analysis.suggestions.len(), 3);
    }

    #[tokio::test]
    async fn test_analyze_mood_never_propagates_failure() {
        let ai = WellnessAI::with_provider(Box::new(MockProvider::failing()));
        let analysis = ai.analyze_mood("anything at all").await;
        assert_eq!(analysis.sentiment, "Error analyzing");
        assert!(analysis.suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_analyze_mood_falls_back_on_empty_reply() {
        let ai = WellnessAI::with_provider(Box::new(MockProvider::structured_ok("")));
        let analysis = ai.analyze_mood("quiet day").await;
        assert_eq!(analysis.sentiment, "Unable to analyze");
        assert!(analysis.suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_analyze_mood_falls_back_on_malformed_reply() {
        let ai = WellnessAI::with_provider(Box::new(MockProvider::structured_ok("not json")));
        let analysis = ai.analyze_mood("quiet day").await;
        assert_eq!(analysis.sentiment, "Error analyzing");
        assert!(analysis.suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_entry_is_recorded_even_when_analysis_fails() {
        let ai = WellnessAI::with_provider(Box::new(MockProvider::failing()));
        let mut journal = MoodJournal::new();

        let note = "I'm exhausted but hopeful";
        let ticket = journal.begin_entry(note).unwrap();
        let analysis = ai.analyze_mood(note).await;
        assert!(journal.record(ticket, note, 6, analysis));

        let newest = &journal.entries()[0];
        assert_eq!(newest.notes, note);
        assert_eq!(
            journal.latest_analysis().unwrap().sentiment,
            "Error analyzing"
        );
    }
}
