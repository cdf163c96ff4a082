//! Stats Card Component
//!
//! Labeled dashboard metric with an icon slot and an optional trend line.

use dioxus::prelude::*;

use super::{Icon, IconGlyph};
use crate::model::{Stat, StatValue, Trend};

/// Properties for the StatsCard component
#[derive(Clone, PartialEq, Props)]
pub struct StatsCardProps {
    /// Metric name, e.g. "Calories Burned"
    #[props(into)]
    pub title: String,
    /// Metric value, text or number
    #[props(into)]
    pub value: StatValue,
    /// Glyph shown beside the value
    pub icon: Icon,
    /// Change relative to the previous period
    #[props(default)]
    pub trend: Option<Trend>,
}

impl From<Stat> for StatsCardProps {
    fn from(stat: Stat) -> Self {
        Self {
            title: stat.title,
            value: stat.value,
            icon: stat.icon,
            trend: stat.trend,
        }
    }
}

/// CSS classes for a trend line; direction comes from `is_positive`.
pub fn trend_class(trend: &Trend) -> &'static str {
    if trend.is_positive {
        "stats-card__trend stats-card__trend--up"
    } else {
        "stats-card__trend stats-card__trend--down"
    }
}

/// Displays one metric
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatsCard {
///         title: "Calories Burned",
///         value: 1250,
///         icon: Icon::Flame,
///         trend: Trend::new(8.0, true),
///     }
/// }
/// ```
#[component]
pub fn StatsCard(props: StatsCardProps) -> Element {
    rsx! {
        div { class: "stats-card",
            div { class: "stats-card__body",
                p { class: "stats-card__title", "{props.title}" }
                p { class: "stats-card__value", "{props.value}" }
                if let Some(trend) = props.trend {
                    p { class: trend_class(&trend), "{trend.label()}" }
                }
            }
            div { class: "stats-card__icon",
                IconGlyph { icon: props.icon, size: 24 }
            }
        }
    }
}
