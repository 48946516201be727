use super::RequestTicket;
use crate::types::Recipe;

/// State holder for the Nourish screen's single recipe slot. Each request
/// clears the previous result up front, so the in-flight window is
/// observably resultless, and each new request supersedes any outstanding
/// one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeBoard {
    current: Option<Recipe>,
    seq: u64,
}

impl RecipeBoard {
    /// Opens a generation request. Blank or whitespace-only ingredient
    /// input refuses to start one: no call is made and nothing changes.
    pub fn begin_request(&mut self, ingredients: &str) -> Option<RequestTicket> {
        if ingredients.trim().is_empty() {
            return None;
        }
        self.current = None;
        self.seq += 1;
        Some(RequestTicket(self.seq))
    }

    /// Commits a settled request. A stale ticket is discarded, returning
    /// false without touching the slot.
    pub fn commit(&mut self, ticket: RequestTicket, recipe: Option<Recipe>) -> bool {
        if ticket.0 != self.seq {
            return false;
        }
        self.current = recipe;
        true
    }

    pub fn current(&self) -> Option<&Recipe> {
        self.current.as_ref()
    }
}
