//! Dashboard components
//!
//! Every component is a pure function of its props. Clickable ones build on
//! [`Button`] or forward a caller supplied handler; navigation goes through
//! the [`Navigation`](crate::Navigation) handle in context.

mod button;
mod icon;
mod nav_buttons;
mod stats_card;
mod workout_card;

pub use button::*;
pub use icon::*;
pub use nav_buttons::*;
pub use stats_card::*;
pub use workout_card::*;
