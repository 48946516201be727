pub mod conversation;
pub mod mood;
pub mod recipe;

pub use conversation::Conversation;
pub use mood::MoodJournal;
pub use recipe::RecipeBoard;

/// Identifies one in-flight request against a state slot. A slot commits a
/// completion only while its ticket is still the latest one issued, so a
/// superseded request can never overwrite a newer result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(pub(crate) u64);
