//! Color constants for the FitForge palette.
//!
//! Mirrors the custom properties declared at the top of the global
//! stylesheet.

#![allow(dead_code)]

// === SURFACES ===
pub const SURFACE: &str = "#0f172a";
pub const SURFACE_RAISED: &str = "#1e293b";
pub const SURFACE_BORDER: &str = "#334155";

// === BRAND ===
pub const ACCENT: &str = "#f97316";
pub const ACCENT_GLOW: &str = "rgba(249, 115, 22, 0.35)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f8fafc";
pub const TEXT_SECONDARY: &str = "#cbd5e1";
pub const TEXT_MUTED: &str = "#94a3b8";

// === TREND ===
pub const TREND_UP: &str = "#22c55e";
pub const TREND_DOWN: &str = "#ef4444";

// === DIFFICULTY ===
pub const DIFFICULTY_EASY: &str = "#22c55e";
pub const DIFFICULTY_MEDIUM: &str = "#eab308";
pub const DIFFICULTY_HARD: &str = "#ef4444";
