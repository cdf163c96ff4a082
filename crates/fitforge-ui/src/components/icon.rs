//! Icon Glyphs
//!
//! Inline Lucide SVG glyphs. Components ask for an icon by name and size and
//! get back a renderable element; no asset files are involved.

use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{UiError, UiResult};

/// Glyphs available to the dashboard components
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    /// Lucide users
    Users,
    /// Lucide dumbbell
    Dumbbell,
    /// Lucide camera
    Camera,
    /// Lucide clock
    Clock,
    /// Lucide flame
    Flame,
    /// Lucide activity
    Activity,
    /// Lucide heart
    Heart,
    /// Lucide trophy
    Trophy,
}

/// One SVG primitive of a glyph, in the 24x24 Lucide grid
enum Shape {
    Path(&'static str),
    Circle {
        cx: &'static str,
        cy: &'static str,
        r: &'static str,
    },
}

impl Icon {
    pub const ALL: [Icon; 8] = [
        Icon::Users,
        Icon::Dumbbell,
        Icon::Camera,
        Icon::Clock,
        Icon::Flame,
        Icon::Activity,
        Icon::Heart,
        Icon::Trophy,
    ];

    /// Kebab-case name used in data files and CSS
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Users => "users",
            Icon::Dumbbell => "dumbbell",
            Icon::Camera => "camera",
            Icon::Clock => "clock",
            Icon::Flame => "flame",
            Icon::Activity => "activity",
            Icon::Heart => "heart",
            Icon::Trophy => "trophy",
        }
    }

    fn shapes(&self) -> &'static [Shape] {
        match self {
            Icon::Users => &[
                Shape::Path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"),
                Shape::Circle { cx: "9", cy: "7", r: "4" },
                Shape::Path("M22 21v-2a4 4 0 0 0-3-3.87"),
                Shape::Path("M16 3.13a4 4 0 0 1 0 7.75"),
            ],
            Icon::Dumbbell => &[
                Shape::Path("m6.5 6.5 11 11"),
                Shape::Path("m21 21-1-1"),
                Shape::Path("m3 3 1 1"),
                Shape::Path("m18 22 4-4"),
                Shape::Path("m2 6 4-4"),
                Shape::Path("m3 10 7-7"),
                Shape::Path("m14 21 7-7"),
            ],
            Icon::Camera => &[
                Shape::Path("M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z"),
                Shape::Circle { cx: "12", cy: "13", r: "3" },
            ],
            Icon::Clock => &[
                Shape::Circle { cx: "12", cy: "12", r: "10" },
                Shape::Path("M12 6v6l4 2"),
            ],
            Icon::Flame => &[Shape::Path(
                "M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z",
            )],
            Icon::Activity => &[Shape::Path("M22 12h-4l-3 9L9 3l-3 9H2")],
            Icon::Heart => &[Shape::Path(
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            )],
            Icon::Trophy => &[
                Shape::Path("M6 9H4.5a2.5 2.5 0 0 1 0-5H6"),
                Shape::Path("M18 9h1.5a2.5 2.5 0 0 0 0-5H18"),
                Shape::Path("M4 22h16"),
                Shape::Path("M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22"),
                Shape::Path("M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22"),
                Shape::Path("M18 2H6v7a6 6 0 0 0 12 0V2Z"),
            ],
        }
    }

    /// Render this glyph as an inline SVG `size` pixels square
    pub fn render(&self, size: u32) -> Element {
        let name = self.name();
        rsx! {
            svg {
                class: "icon icon--{name}",
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                "aria-hidden": "true",
                for shape in self.shapes().iter() {
                    {render_shape(shape)}
                }
            }
        }
    }
}

fn render_shape(shape: &Shape) -> Element {
    match shape {
        Shape::Path(d) => rsx! {
            path { d: "{d}" }
        },
        Shape::Circle { cx, cy, r } => rsx! {
            circle { cx: "{cx}", cy: "{cy}", r: "{r}" }
        },
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Icon {
    type Err = UiError;

    fn from_str(s: &str) -> UiResult<Self> {
        Icon::ALL
            .into_iter()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| UiError::UnknownIcon(s.to_string()))
    }
}

/// Icon slot component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     IconGlyph { icon: Icon::Flame, size: 20 }
/// }
/// ```
#[component]
pub fn IconGlyph(
    /// Glyph to draw
    icon: Icon,
    /// Width and height in pixels
    #[props(default = 24)]
    size: u32,
) -> Element {
    icon.render(size)
}
