//! Navigation Buttons
//!
//! Dashboard tiles that send the user to a feature page. Each variant has a
//! fixed icon, label and destination; they take no props.

use dioxus::prelude::*;

use super::{Button, ButtonVariant, IconGlyph};
use crate::navigation::{use_navigation, NavTarget};

/// Feature tile navigating to `target` when activated.
///
/// Requires a [`Navigation`](crate::Navigation) handle in context.
#[component]
pub fn NavigationButton(target: NavTarget) -> Element {
    let navigation = use_navigation();
    let class = format!("nav-button nav-button--{}", target.slug());

    rsx! {
        Button {
            variant: ButtonVariant::Feature,
            class: class,
            onclick: move |_| navigation.go(target),
            span { class: "nav-button__icon",
                IconGlyph { icon: target.icon(), size: 28 }
            }
            span { class: "nav-button__label", "{target.label()}" }
        }
    }
}

/// Opens the workout buddy finder
#[component]
pub fn BuddyFinderButton() -> Element {
    rsx! {
        NavigationButton { target: NavTarget::BuddyFinder }
    }
}

/// Opens the camera based rep counter
#[component]
pub fn ExerciseCounterButton() -> Element {
    rsx! {
        NavigationButton { target: NavTarget::ExerciseCounter }
    }
}

/// Opens posture and form analysis
#[component]
pub fn FormAnalysisButton() -> Element {
    rsx! {
        NavigationButton { target: NavTarget::FormAnalysis }
    }
}
