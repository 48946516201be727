//! Life Alive, a wellness companion app.
//!
//! The core lives in [`ai`] (the model gateway) and [`state`] (per-screen
//! state holders); [`ui`] and [`views`] render that state with Dioxus.

pub mod ai;
pub mod state;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;
