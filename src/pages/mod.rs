//! Page components for FitForge.

mod dashboard;
mod feature_pending;

pub use dashboard::Dashboard;
pub use feature_pending::FeaturePending;
