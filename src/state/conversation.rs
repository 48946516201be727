use crate::types::{ChatMessage, ContextTurn, Role};
use time::OffsetDateTime;

/// The seeded opening turn every conversation starts with.
pub const GREETING: &str = "Hello! I'm your Life Alive wellness companion. How are you feeling \
today? I can help with mindfulness tips, nutrition questions, or just finding some balance.";

/// Substituted when the model answers with no text at all.
pub const STILLNESS_PLACEHOLDER: &str =
    "I'm having a moment of stillness. Could you try asking again?";

/// Ordered, append-only history for the Coach screen. Messages are never
/// reordered or mutated; ids are unique within the conversation.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Conversation {
    pub fn new() -> Self {
        let mut conversation = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        conversation.append(Role::Model, GREETING);
        conversation
    }

    fn append(&mut self, role: Role, text: &str) -> ChatMessage {
        let message = ChatMessage {
            id: format!("msg-{}", self.next_id),
            role,
            text: text.to_string(),
            timestamp: OffsetDateTime::now_utc(),
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }

    pub fn append_user(&mut self, text: &str) -> ChatMessage {
        self.append(Role::User, text)
    }

    /// Appends the model's reply. A blank reply becomes the fixed stillness
    /// placeholder so the coach always answers with something.
    pub fn append_model(&mut self, text: &str) -> ChatMessage {
        let text = if text.trim().is_empty() {
            STILLNESS_PLACEHOLDER
        } else {
            text
        };
        self.append(Role::Model, text)
    }

    /// Opens a user turn: refuses blank input, otherwise snapshots the
    /// context *before* appending the new message and returns both. The
    /// snapshot ordering keeps the new message out of the replayed history;
    /// it reaches the model exactly once, as the standalone newest turn.
    pub fn begin_turn(&mut self, text: &str) -> Option<(Vec<ContextTurn>, ChatMessage)> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let context = self.history_as_context();
        let message = self.append_user(trimmed);
        Some((context, message))
    }

    /// Every stored message, in insertion order, in the shape the gateway
    /// replays to the model service.
    pub fn history_as_context(&self) -> Vec<ContextTurn> {
        self.messages
            .iter()
            .map(|message| ContextTurn {
                role: message.role,
                text: message.text.clone(),
            })
            .collect()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
