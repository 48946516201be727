use super::RequestTicket;
use crate::types::{MoodAnalysis, MoodEntry};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Entries carry this fixed energy value.
/// TODO: derive energy from a real input once the check-in form grows one.
const PLACEHOLDER_ENERGY: u8 = 8;

const ENTRY_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");

/// State holder for the Balance screen: the reverse-chronological entry
/// history plus the latest analysis panel. Entries are never mutated or
/// deleted within a session.
#[derive(Clone, Debug, PartialEq)]
pub struct MoodJournal {
    entries: Vec<MoodEntry>,
    latest: Option<MoodAnalysis>,
    seq: u64,
}

impl MoodJournal {
    pub fn new() -> Self {
        Self {
            entries: vec![MoodEntry {
                date: "Today".to_string(),
                mood: 7,
                energy: 6,
                notes: "Feeling good, just a bit tired.".to_string(),
            }],
            latest: None,
            seq: 0,
        }
    }

    /// Opens a journal submission. A blank note refuses to start one.
    pub fn begin_entry(&mut self, note: &str) -> Option<RequestTicket> {
        if note.trim().is_empty() {
            return None;
        }
        self.seq += 1;
        Some(RequestTicket(self.seq))
    }

    /// Records the submission. The entry itself is always prepended with
    /// the literal note text (analysis never fails, and the history is
    /// append-only even across superseded requests), but the analysis
    /// panel commits only while the ticket is still the latest.
    pub fn record(
        &mut self,
        ticket: RequestTicket,
        note: &str,
        mood: u8,
        analysis: MoodAnalysis,
    ) -> bool {
        self.entries.insert(
            0,
            MoodEntry {
                date: entry_date_label(),
                mood,
                energy: PLACEHOLDER_ENERGY,
                notes: note.to_string(),
            },
        );
        if ticket.0 != self.seq {
            return false;
        }
        self.latest = Some(analysis);
        true
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn latest_analysis(&self) -> Option<&MoodAnalysis> {
        self.latest.as_ref()
    }
}

impl Default for MoodJournal {
    fn default() -> Self {
        Self::new()
    }
}

fn entry_date_label() -> String {
    let mut now = OffsetDateTime::now_utc();
    if let Ok(offset) = UtcOffset::current_local_offset() {
        now = now.to_offset(offset);
    }
    now.format(ENTRY_DATE_FORMAT)
        .unwrap_or_else(|_| now.date().to_string())
}
