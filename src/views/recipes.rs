use crate::ai;
use crate::state::RecipeBoard;
use crate::types::{Dietary, Recipe};
use dioxus::prelude::*;

#[component]
pub fn RecipesView() -> Element {
    let board = use_signal(RecipeBoard::default);
    let mut ingredients = use_signal(String::new);
    let mut dietary = use_signal(Dietary::default);
    let loading = use_signal(|| false);

    let mut generate = {
        let mut board = board;
        let mut loading_signal = loading;
        move || {
            let text = ingredients();
            let ticket = board.with_mut(|b| b.begin_request(&text));
            let Some(ticket) = ticket else { return };
            loading_signal.set(true);
            let choice = dietary();
            spawn(async move {
                let result = ai::gateway().generate_recipe(&text, choice).await;
                // A stale completion leaves the newer request's loading
                // indicator alone.
                if board.with_mut(|b| b.commit(ticket, result)) {
                    loading_signal.set(false);
                }
            });
        }
    };

    let snapshot = board();

    rsx! {
        div { class: "main-container",
            div { class: "page-heading centered",
                h1 { "Nourish Your Body" }
                p { class: "text-muted", "Transform your available ingredients into a vibrant Life Alive bowl." }
            }

            div { class: "card recipe-form",
                div { class: "form-grid",
                    div { class: "field",
                        label { "Ingredients on hand" }
                        textarea {
                            rows: "5",
                            placeholder: "e.g., quinoa, kale, sweet potato, tahini...",
                            value: "{ingredients}",
                            oninput: move |ev| ingredients.set(ev.value()),
                        }
                    }
                    div { class: "field-stack",
                        div { class: "field",
                            label { "Dietary Preferences" }
                            select {
                                value: "{dietary().label()}",
                                onchange: move |ev| dietary.set(Dietary::from_label(&ev.value())),
                                for choice in Dietary::ALL {
                                    option {
                                        value: "{choice.label()}",
                                        selected: choice == dietary(),
                                        "{choice.label()}"
                                    }
                                }
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: loading() || ingredients().trim().is_empty(),
                            onclick: move |_| generate(),
                            if loading() { "Composing..." } else { "Generate Recipe" }
                        }
                    }
                }
            }

            if loading() {
                div { class: "card loading-card",
                    span { class: "shimmer-text", "Composing your bowl..." }
                }
            }

            if let Some(recipe) = snapshot.current() {
                RecipeCard { recipe: recipe.clone() }
            }
        }
    }
}

#[component]
fn RecipeCard(recipe: Recipe) -> Element {
    rsx! {
        div { class: "card recipe-card",
            div { class: "recipe-header",
                h2 { "{recipe.name}" }
                p { class: "text-muted", "{recipe.description}" }
                div { class: "recipe-chips",
                    span { class: "chip", "{recipe.prep_time}" }
                    span { class: "chip", "{recipe.calories} kcal" }
                    span { class: "chip", "Plant-Based" }
                }
            }
            div { class: "recipe-columns",
                div {
                    h3 { "Ingredients" }
                    ul { class: "ingredient-list",
                        for item in recipe.ingredients.iter() {
                            li { "{item}" }
                        }
                    }
                }
                div {
                    h3 { "Instructions" }
                    ol { class: "instruction-list",
                        for step in recipe.instructions.iter() {
                            li { "{step}" }
                        }
                    }
                }
            }
            div { class: "recipe-benefits",
                h4 { "Wellness Benefit" }
                p { "{recipe.benefits}" }
            }
        }
    }
}
