//! Workout Card Component
//!
//! Image card summarizing a workout: duration and difficulty badges over the
//! image, title and subtitle below.

use dioxus::prelude::*;

use super::{Icon, IconGlyph};
use crate::model::{Difficulty, Workout};

/// Properties for the WorkoutCard component
#[derive(Clone, PartialEq, Props)]
pub struct WorkoutCardProps {
    #[props(into)]
    pub title: String,
    #[props(into)]
    pub subtitle: String,
    /// Image URL or asset path
    #[props(into)]
    pub image: String,
    pub difficulty: Difficulty,
    /// Duration text, e.g. "30 min"
    #[props(into)]
    pub duration: String,
    /// Called once per activation of the card
    #[props(default)]
    pub on_click: Option<EventHandler<()>>,
}

impl WorkoutCardProps {
    /// Props for `workout` with no click handler
    pub fn from_workout(workout: Workout) -> Self {
        Self {
            title: workout.title,
            subtitle: workout.subtitle,
            image: workout.image,
            difficulty: workout.difficulty,
            duration: workout.duration,
            on_click: None,
        }
    }
}

/// Workout summary card
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     WorkoutCard {
///         title: "Morning HIIT",
///         subtitle: "Full body burn",
///         image: "assets/hiit.jpg",
///         difficulty: Difficulty::Hard,
///         duration: "25 min",
///         on_click: move |_| open_workout("hiit"),
///     }
/// }
/// ```
#[component]
pub fn WorkoutCard(props: WorkoutCardProps) -> Element {
    let on_click = props.on_click;
    let card_class = if on_click.is_some() {
        "workout-card workout-card--interactive"
    } else {
        "workout-card"
    };
    let badge_class = props.difficulty.class();

    rsx! {
        div {
            class: card_class,
            onclick: move |_| {
                if let Some(handler) = &on_click {
                    handler.call(());
                }
            },

            div { class: "workout-card__media",
                img {
                    class: "workout-card__image",
                    src: "{props.image}",
                    alt: "{props.title}",
                }
                span { class: "workout-card__duration",
                    IconGlyph { icon: Icon::Clock, size: 14 }
                    "{props.duration}"
                }
                span { class: "difficulty-badge {badge_class}",
                    "{props.difficulty.label()}"
                }
            }

            div { class: "workout-card__content",
                h3 { class: "workout-card__title", "{props.title}" }
                p { class: "workout-card__subtitle", "{props.subtitle}" }
            }
        }
    }
}
