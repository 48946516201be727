//! Tests for the per-screen state holders (recipe slot, mood journal).

use life_alive::state::{MoodJournal, RecipeBoard};
use life_alive::types::{MoodAnalysis, Recipe};

fn sample_recipe(name: &str) -> Recipe {
    Recipe {
        name: name.to_string(),
        description: "Bright and grounding.".to_string(),
        ingredients: vec!["quinoa".to_string(), "kale".to_string()],
        instructions: vec!["Cook quinoa.".to_string(), "Massage kale.".to_string()],
        benefits: "Iron and calm.".to_string(),
        prep_time: "20 min".to_string(),
        calories: 420.0,
    }
}

fn sample_analysis(sentiment: &str) -> MoodAnalysis {
    MoodAnalysis {
        sentiment: sentiment.to_string(),
        suggestions: vec!["Herbal tea".to_string()],
    }
}

mod recipe_board_tests {
    use super::*;

    #[test]
    fn test_blank_ingredients_refuse_to_open_a_request() {
        let mut board = RecipeBoard::default();
        assert!(board.begin_request("").is_none());
        assert!(board.begin_request("  \n\t ").is_none());
        assert!(board.current().is_none());
    }

    #[test]
    fn test_new_request_clears_the_previous_recipe() {
        let mut board = RecipeBoard::default();
        let ticket = board.begin_request("quinoa").unwrap();
        assert!(board.commit(ticket, Some(sample_recipe("First Bowl"))));
        assert!(board.current().is_some());

        // The in-flight window is observably resultless.
        let _ticket = board.begin_request("kale").unwrap();
        assert!(board.current().is_none());
    }

    #[test]
    fn test_failed_request_settles_into_the_empty_state() {
        let mut board = RecipeBoard::default();
        let ticket = board.begin_request("quinoa").unwrap();
        assert!(board.commit(ticket, None));
        assert!(board.current().is_none());
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut board = RecipeBoard::default();
        let first = board.begin_request("quinoa").unwrap();
        let second = board.begin_request("kale").unwrap();

        // The superseded request settles last-issued-wins, not last-settled.
        assert!(!board.commit(first, Some(sample_recipe("Stale Bowl"))));
        assert!(board.current().is_none());

        assert!(board.commit(second, Some(sample_recipe("Fresh Bowl"))));
        assert_eq!(board.current().unwrap().name, "Fresh Bowl");

        // A very late stale completion cannot undo the committed result.
        assert!(!board.commit(first, None));
        assert_eq!(board.current().unwrap().name, "Fresh Bowl");
    }
}

mod mood_journal_tests {
    use super::*;

    #[test]
    fn test_journal_starts_with_the_sample_entry() {
        let journal = MoodJournal::new();
        assert_eq!(journal.entries().len(), 1);
        assert_eq!(journal.entries()[0].date, "Today");
        assert!(journal.latest_analysis().is_none());
    }

    #[test]
    fn test_blank_note_refuses_to_open_an_entry() {
        let mut journal = MoodJournal::new();
        assert!(journal.begin_entry("").is_none());
        assert!(journal.begin_entry("   ").is_none());
        assert_eq!(journal.entries().len(), 1);
    }

    #[test]
    fn test_record_prepends_the_literal_note() {
        let mut journal = MoodJournal::new();
        let ticket = journal.begin_entry("I'm exhausted but hopeful").unwrap();
        assert!(journal.record(ticket, "I'm exhausted but hopeful", 6, sample_analysis("Tired yet optimistic.")));

        let newest = &journal.entries()[0];
        assert_eq!(newest.notes, "I'm exhausted but hopeful");
        assert_eq!(newest.mood, 6);
        assert_eq!(newest.energy, 8);
        assert_eq!(journal.entries().len(), 2);
        assert_eq!(journal.latest_analysis().unwrap().sentiment, "Tired yet optimistic.");
    }

    #[test]
    fn test_stale_ticket_keeps_the_entry_but_not_the_analysis() {
        let mut journal = MoodJournal::new();
        let first = journal.begin_entry("first note").unwrap();
        let second = journal.begin_entry("second note").unwrap();

        // The superseded submission still lands in the append-only history,
        // but its analysis never reaches the panel.
        assert!(!journal.record(first, "first note", 4, sample_analysis("stale")));
        assert_eq!(journal.entries()[0].notes, "first note");
        assert!(journal.latest_analysis().is_none());

        assert!(journal.record(second, "second note", 7, sample_analysis("fresh")));
        assert_eq!(journal.entries()[0].notes, "second note");
        assert_eq!(journal.latest_analysis().unwrap().sentiment, "fresh");
        assert_eq!(journal.entries().len(), 3);
    }
}
