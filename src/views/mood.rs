use crate::ai;
use crate::state::MoodJournal;
use crate::types::MoodEntry;
use dioxus::prelude::*;

#[component]
pub fn MoodView() -> Element {
    let journal = use_signal(MoodJournal::new);
    let mut note = use_signal(String::new);
    let mut mood = use_signal(|| 7u8);
    let analyzing = use_signal(|| false);

    let mut save_entry = {
        let mut journal = journal;
        let mut analyzing_signal = analyzing;
        move || {
            if analyzing_signal() {
                return;
            }
            let text = note();
            let ticket = journal.with_mut(|j| j.begin_entry(&text));
            let Some(ticket) = ticket else { return };
            analyzing_signal.set(true);
            let level = mood();
            spawn(async move {
                // analyze_mood never fails, so the entry is recorded either
                // way; a fallback sentiment lands in the insight panel.
                let analysis = ai::gateway().analyze_mood(&text).await;
                journal.with_mut(|j| {
                    j.record(ticket, &text, level, analysis);
                });
                analyzing_signal.set(false);
            });
        }
    };

    let snapshot = journal();

    rsx! {
        div { class: "main-container",
            div { class: "mood-grid",
                div { class: "mood-column",
                    div { class: "page-heading",
                        h1 { "Check-In" }
                        p { class: "text-muted", "Take a moment to reflect on your being." }
                    }
                    div { class: "card checkin-card",
                        div { class: "field",
                            label { "How are you feeling? ({mood}/10)" }
                            input {
                                r#type: "range",
                                min: "1",
                                max: "10",
                                value: "{mood}",
                                oninput: move |ev| {
                                    if let Ok(level) = ev.value().parse() {
                                        mood.set(level);
                                    }
                                },
                            }
                            div { class: "range-scale",
                                span { "Low" }
                                span { "Balanced" }
                                span { "Vibrant" }
                            }
                        }
                        div { class: "field",
                            label { "Journal Entry" }
                            textarea {
                                rows: "5",
                                placeholder: "What's on your mind? How does your body feel?",
                                value: "{note}",
                                oninput: move |ev| note.set(ev.value()),
                            }
                        }
                        button {
                            class: "btn btn-dark",
                            r#type: "button",
                            disabled: analyzing() || note().trim().is_empty(),
                            onclick: move |_| save_entry(),
                            if analyzing() { "Reflecting..." } else { "Save Entry" }
                        }
                    }
                    if let Some(analysis) = snapshot.latest_analysis() {
                        div { class: "card insight-card",
                            h3 { "Insight" }
                            p { class: "insight-sentiment", "{analysis.sentiment}" }
                            div { class: "suggestion-list",
                                for suggestion in analysis.suggestions.iter() {
                                    div { class: "suggestion", "{suggestion}" }
                                }
                            }
                        }
                    }
                }
                div { class: "mood-column",
                    div { class: "history-header",
                        h2 { "Recent Reflections" }
                    }
                    div { class: "history-list",
                        for entry in snapshot.entries().iter() {
                            MoodEntryCard { entry: entry.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MoodEntryCard(entry: MoodEntry) -> Element {
    rsx! {
        div { class: "card entry-card",
            div { class: "entry-top",
                span { class: "entry-date", "{entry.date}" }
                div { class: "mood-ticks",
                    for idx in 0..10u8 {
                        div {
                            class: format_args!(
                                "tick {}",
                                if idx < entry.mood { "tick-filled" } else { "" }
                            ),
                        }
                    }
                }
            }
            p { class: "entry-notes", "{entry.notes}" }
        }
    }
}
