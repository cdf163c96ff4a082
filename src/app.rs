use dioxus::prelude::*;

use crate::pages::{Dashboard, FeaturePending};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Dashboard with stats, quick actions and workouts
/// - anything else - Placeholder naming the requested feature path
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/:..segments")]
    FeaturePending { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, the dashboard snapshot, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(crate::get_snapshot()));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
