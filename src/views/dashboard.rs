use crate::ui::AppTab;
use dioxus::prelude::*;

const WEEKLY_VITALITY: [(&str, u32); 7] = [
    ("Mon", 70),
    ("Tue", 85),
    ("Wed", 60),
    ("Thu", 90),
    ("Fri", 75),
    ("Sat", 95),
    ("Sun", 80),
];

const HYDRATION_GOAL: u32 = 8;

#[component]
pub fn DashboardView(active_tab: Signal<AppTab>) -> Element {
    let mut active_tab = active_tab;
    let mut hydration = use_signal(|| 4u32);

    rsx! {
        div { class: "main-container",
            div { class: "page-heading",
                h1 { "Good Morning, Maryam" }
                p { class: "text-muted", "Let's nurture your vitality today." }
            }

            div { class: "stat-grid",
                // One tap logs one glass.
                button {
                    class: "stat-card stat-card-action",
                    r#type: "button",
                    onclick: move |_| {
                        let count = hydration();
                        if count < HYDRATION_GOAL {
                            hydration.set(count + 1);
                        }
                    },
                    StatBody {
                        label: "Hydration",
                        value: format!("{} / {}", hydration(), HYDRATION_GOAL),
                        subtext: "Glasses of water",
                    }
                }
                div { class: "stat-card",
                    StatBody { label: "Mindfulness", value: "15 min".to_string(), subtext: "Morning meditation" }
                }
                div { class: "stat-card",
                    StatBody { label: "Sleep", value: "7h 20m".to_string(), subtext: "Restful sleep" }
                }
                div { class: "stat-card",
                    StatBody { label: "Breath", value: "Calm".to_string(), subtext: "Current state" }
                }
            }

            div { class: "dashboard-grid",
                div { class: "card chart-card",
                    div { class: "chart-header",
                        h2 { "Weekly Vitality" }
                        span { class: "chart-legend", "Wellness Score" }
                    }
                    div { class: "bar-chart",
                        for (i, (day, score)) in WEEKLY_VITALITY.iter().enumerate() {
                            div { class: "bar-column",
                                div {
                                    class: format_args!("bar {}", if i == 5 { "bar-peak" } else { "" }),
                                    style: "height: {score}%;",
                                }
                                span { class: "bar-label", "{day}" }
                            }
                        }
                    }
                }
                div { class: "card cta-card",
                    h2 { "Feeling hungry?" }
                    p { "Discover a nourishing bowl tailored to your body's needs today." }
                    button {
                        class: "btn btn-light",
                        r#type: "button",
                        onclick: move |_| active_tab.set(AppTab::Nourish),
                        "Generate Meal"
                    }
                }
            }

            div { class: "daily-wisdom",
                p { class: "wisdom-eyebrow", "Daily Wisdom" }
                p { class: "wisdom-quote", "\"Let food be thy medicine and medicine be thy food.\"" }
            }
        }
    }
}

#[component]
fn StatBody(label: &'static str, value: String, subtext: &'static str) -> Element {
    rsx! {
        p { class: "stat-label", "{label}" }
        h3 { class: "stat-value", "{value}" }
        p { class: "stat-subtext", "{subtext}" }
    }
}
