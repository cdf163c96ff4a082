//! Feature pending page.
//!
//! Catch-all for paths the shell has no page for, including the feature
//! pages the dashboard buttons point at.

use dioxus::prelude::*;
use fitforge_ui::{Button, ButtonVariant};

use crate::app::Route;

#[component]
pub fn FeaturePending(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        main { class: "feature-pending",
            h1 { class: "page-title", "Coming Soon" }
            p { class: "body-text",
                "Nothing lives at "
                code { class: "feature-pending__path", "{path}" }
                " in this build yet."
            }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| {
                    navigator.push(Route::Dashboard {});
                },
                "Back to dashboard"
            }
        }
    }
}
