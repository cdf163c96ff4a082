//! Context providers for the FitForge shell.
//!
//! Bridges the UI crate's navigation capability onto the Dioxus router and
//! exposes the dashboard snapshot to pages.
//!
//! ## Usage
//!
//! ```ignore
//! // In a routed page
//! provide_navigation(use_router_navigation());
//!
//! // Anywhere below App
//! let snapshot = use_snapshot();
//! ```

use dioxus::prelude::*;
use fitforge_ui::{Navigate, Navigation};

use crate::app::Route;
use crate::snapshot::DashboardSnapshot;

/// [`Navigate`] impl that pushes router routes.
///
/// Paths are parsed into [`Route`]; anything that does not parse is logged
/// and dropped.
pub struct RouterNavigator {
    navigator: Navigator,
}

impl RouterNavigator {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

impl Navigate for RouterNavigator {
    fn navigate(&self, path: &str) {
        match path.parse::<Route>() {
            Ok(route) => {
                if self.navigator.push(route).is_some() {
                    tracing::warn!(path, "Navigation failed");
                }
            }
            Err(_) => {
                tracing::warn!(path, "No route for path");
            }
        }
    }
}

/// Hook building a [`Navigation`] backed by the current router.
///
/// Must be called inside a `Router`.
pub fn use_router_navigation() -> Navigation {
    let navigator = use_navigator();
    Navigation::new(RouterNavigator::new(navigator))
}

/// Hook to access the dashboard snapshot from context.
pub fn use_snapshot() -> Signal<DashboardSnapshot> {
    use_context::<Signal<DashboardSnapshot>>()
}
