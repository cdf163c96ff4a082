//! Dashboard page - the app's home screen.
//!
//! Stats across the top, feature shortcuts in the middle, recommended
//! workouts below.

use dioxus::prelude::*;
use fitforge_ui::{
    provide_navigation, BuddyFinderButton, ExerciseCounterButton, FormAnalysisButton, StatsCard,
    WorkoutCard,
};

use crate::context::{use_router_navigation, use_snapshot};

/// Dashboard page component.
///
/// Registers the router-backed navigation handle for the buttons below it.
#[component]
pub fn Dashboard() -> Element {
    provide_navigation(use_router_navigation());
    let snapshot = use_snapshot();
    let snapshot = snapshot.read();

    rsx! {
        main { class: "dashboard",
            header { class: "dashboard-header",
                h1 { class: "page-title", "FitForge" }
                p { class: "tagline", "Your training at a glance" }
            }

            // Stats
            section { class: "stats-grid",
                for stat in snapshot.stats.iter() {
                    StatsCard {
                        key: "{stat.title}",
                        title: stat.title.clone(),
                        value: stat.value.clone(),
                        icon: stat.icon,
                        trend: stat.trend,
                    }
                }
            }

            // Feature shortcuts
            section { class: "quick-actions",
                h2 { class: "section-header", "Quick Actions" }
                div { class: "quick-actions__grid",
                    BuddyFinderButton {}
                    ExerciseCounterButton {}
                    FormAnalysisButton {}
                }
            }

            // Workouts
            section { class: "workouts",
                h2 { class: "section-header", "Recommended Workouts" }
                if snapshot.workouts.is_empty() {
                    p { class: "empty-state", "No workouts planned yet" }
                }
                div { class: "workout-grid",
                    for workout in snapshot.workouts.iter() {
                        {
                            let selected = workout.title.clone();
                            rsx! {
                                WorkoutCard {
                                    key: "{workout.title}",
                                    title: workout.title.clone(),
                                    subtitle: workout.subtitle.clone(),
                                    image: workout.image.clone(),
                                    difficulty: workout.difficulty,
                                    duration: workout.duration.clone(),
                                    on_click: move |_| {
                                        tracing::info!(workout = %selected, "Workout selected");
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
