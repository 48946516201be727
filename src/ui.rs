use crate::theme::theme_definition;
use crate::types::ThemeMode;
use crate::views::{CoachView, DashboardView, MoodView, RecipesView};
use dioxus::prelude::*;

const LIFEALIVE_CSS: Asset = asset!("/assets/lifealive.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppTab {
    Overview,
    Nourish,
    Coach,
    Balance,
}

impl AppTab {
    const ALL: [AppTab; 4] = [AppTab::Overview, AppTab::Nourish, AppTab::Coach, AppTab::Balance];

    fn label(self) -> &'static str {
        match self {
            AppTab::Overview => "Overview",
            AppTab::Nourish => "Nourish",
            AppTab::Coach => "Coach",
            AppTab::Balance => "Balance",
        }
    }
}

#[component]
pub fn App() -> Element {
    let active_tab = use_signal(|| AppTab::Overview);
    let theme = use_signal(ThemeMode::default);

    rsx! {
        ThemeStyles { theme }
        AppHeader { active_tab, theme }
        TabPanels { active_tab }
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: LIFEALIVE_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(active_tab: Signal<AppTab>, theme: Signal<ThemeMode>) -> Element {
    let mut theme = theme;
    let toggle_label = match theme() {
        ThemeMode::Light => "Dark",
        ThemeMode::Dark => "Light",
    };
    rsx! {
        div { class: "header",
            div { class: "header-content",
                div { class: "wordmark", "Life Alive" }
                TabNavigation { active_tab }
                button {
                    class: "theme-toggle",
                    r#type: "button",
                    onclick: move |_| {
                        let next = match theme() {
                            ThemeMode::Light => ThemeMode::Dark,
                            ThemeMode::Dark => ThemeMode::Light,
                        };
                        theme.set(next);
                    },
                    "{toggle_label}"
                }
            }
        }
    }
}

#[component]
fn TabNavigation(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "tabs",
            for tab in AppTab::ALL {
                TabButton { active_tab, tab, label: tab.label() }
            }
        }
    }
}

#[component]
fn TabButton(active_tab: Signal<AppTab>, tab: AppTab, label: &'static str) -> Element {
    let mut active_tab = active_tab;
    let class = if active_tab() == tab { "tab active" } else { "tab" };
    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| active_tab.set(tab),
            "{label}"
        }
    }
}

#[component]
fn TabPanels(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "tab-panels",
            TabPanel {
                active_tab,
                tab: AppTab::Overview,
                children: rsx!( DashboardView { active_tab } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Nourish,
                children: rsx!( RecipesView {} ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Coach,
                children: rsx!( CoachView {} ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Balance,
                children: rsx!( MoodView {} ),
            }
        }
    }
}

#[component]
fn TabPanel(active_tab: Signal<AppTab>, tab: AppTab, children: Element) -> Element {
    let is_active = active_tab() == tab;
    let class_suffix = if is_active { "active" } else { "" };
    rsx! {
        div {
            class: format_args!("tab-panel {}", class_suffix),
            aria_hidden: (!is_active).to_string(),
            {children}
        }
    }
}
