use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Role label used by the model service's turn format.
    pub fn as_wire(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One turn of the coach conversation. Never mutated after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub text: String,
    pub timestamp: OffsetDateTime,
}

/// The gateway-facing projection of a stored message.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextTurn {
    pub role: Role,
    pub text: String,
}

/// A generated dish. Replaced wholesale on every request; the camelCase
/// renames match the JSON shape the model is asked to produce.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub benefits: String,
    pub prep_time: String,
    pub calories: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: String,
    /// 1-10
    pub mood: u8,
    /// 1-10
    pub energy: u8,
    pub notes: String,
}

/// Latest journal analysis. Transient: overwritten by the next request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoodAnalysis {
    pub sentiment: String,
    pub suggestions: Vec<String>,
}

/// Closed set of dietary preferences offered by the recipe screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dietary {
    Vegan,
    #[default]
    Vegetarian,
    GlutenFree,
    Paleo,
}

impl Dietary {
    pub const ALL: [Dietary; 4] = [
        Dietary::Vegan,
        Dietary::Vegetarian,
        Dietary::GlutenFree,
        Dietary::Paleo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Dietary::Vegan => "Vegan",
            Dietary::Vegetarian => "Vegetarian",
            Dietary::GlutenFree => "Gluten-Free",
            Dietary::Paleo => "Paleo",
        }
    }

    /// Maps a select-widget label back to the enum, falling back to the
    /// default preference for anything unrecognized.
    pub fn from_label(label: &str) -> Dietary {
        Dietary::ALL
            .into_iter()
            .find(|dietary| dietary.label() == label)
            .unwrap_or_default()
    }
}

impl fmt::Display for Dietary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}
