//! FitForge UI Components
//!
//! Dioxus view components for the FitForge fitness dashboard:
//!
//! - **Navigation buttons**: `BuddyFinderButton`, `ExerciseCounterButton` and
//!   `FormAnalysisButton` route to their feature page through the
//!   [`Navigation`] handle provided by the host.
//! - **StatsCard**: a labeled metric with an optional signed trend.
//! - **WorkoutCard**: workout image with duration and difficulty badges.
//!
//! Components hold no state. Icons come from the inline [`Icon`] glyph set
//! and navigation from whatever [`Navigate`] impl the host registers.

pub mod components;
pub mod error;
pub mod model;
pub mod navigation;

pub use components::*;
pub use error::{UiError, UiResult};
pub use model::{Difficulty, Stat, StatValue, Trend, Workout};
pub use navigation::{provide_navigation, use_navigation, NavTarget, Navigate, Navigation};
