//! View model types
//!
//! Plain data handed to the display cards. Nothing here has identity or a
//! lifecycle beyond a single render; callers build fresh values per render.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::components::Icon;
use crate::error::{UiError, UiResult};

/// Value shown in a stats card, either free text or a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) => write!(f, "{}", n),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for StatValue {
    fn from(s: &str) -> Self {
        StatValue::Text(s.to_string())
    }
}

impl From<String> for StatValue {
    fn from(s: String) -> Self {
        StatValue::Text(s)
    }
}

impl From<f64> for StatValue {
    fn from(n: f64) -> Self {
        StatValue::Number(n)
    }
}

impl From<i32> for StatValue {
    fn from(n: i32) -> Self {
        StatValue::Number(n.into())
    }
}

impl From<u32> for StatValue {
    fn from(n: u32) -> Self {
        StatValue::Number(n.into())
    }
}

/// Directional change relative to a prior period
///
/// The displayed sign is taken from `is_positive` only. `value` contributes
/// its magnitude, so `{ value: -5.0, is_positive: true }` renders `+5%`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    /// Percentage change; only the absolute value is displayed
    pub value: f64,
    /// Direction of the change
    pub is_positive: bool,
}

impl Trend {
    pub fn new(value: f64, is_positive: bool) -> Self {
        Self { value, is_positive }
    }

    /// Absolute percentage shown to the user
    pub fn magnitude(&self) -> f64 {
        self.value.abs()
    }

    pub fn sign(&self) -> char {
        if self.is_positive {
            '+'
        } else {
            '-'
        }
    }

    /// Text of the trend indicator, e.g. `+5%`
    pub fn label(&self) -> String {
        format!("{}{}%", self.sign(), self.magnitude())
    }
}

/// A single dashboard statistic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub title: String,
    pub value: StatValue,
    pub icon: Icon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

impl Stat {
    pub fn new(title: impl Into<String>, value: impl Into<StatValue>, icon: Icon) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            icon,
            trend: None,
        }
    }

    /// Attach a trend indicator
    pub fn with_trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }
}

/// Workout difficulty, a closed three-value vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Lowercase name used in data and CSS
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Returns the CSS class carrying this difficulty's badge color
    pub fn class(&self) -> &'static str {
        match self {
            Difficulty::Easy => "difficulty-badge--easy",
            Difficulty::Medium => "difficulty-badge--medium",
            Difficulty::Hard => "difficulty-badge--hard",
        }
    }

    /// Badge text: the name with only its first character capitalized
    pub fn label(&self) -> String {
        capitalize_first(self.as_str())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = UiError;

    fn from_str(s: &str) -> UiResult<Self> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(UiError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Summary of one workout as shown by a workout card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub title: String,
    pub subtitle: String,
    /// Image URL or asset path
    pub image: String,
    pub difficulty: Difficulty,
    /// Human readable duration, e.g. `30 min`
    pub duration: String,
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_sign_follows_direction_flag() {
        assert_eq!(Trend::new(5.0, true).label(), "+5%");
        assert_eq!(Trend::new(-5.0, false).label(), "-5%");
        assert_eq!(Trend::new(-5.0, true).label(), "+5%");
        assert_eq!(Trend::new(12.5, false).label(), "-12.5%");
    }

    #[test]
    fn stat_value_display() {
        assert_eq!(StatValue::from(1250).to_string(), "1250");
        assert_eq!(StatValue::from(7.5).to_string(), "7.5");
        assert_eq!(StatValue::from("4h 20m").to_string(), "4h 20m");
    }

    #[test]
    fn stat_value_deserializes_text_or_number() {
        let n: StatValue = serde_json::from_str("12").unwrap();
        assert_eq!(n, StatValue::Number(12.0));

        let t: StatValue = serde_json::from_str("\"12 km\"").unwrap();
        assert_eq!(t, StatValue::Text("12 km".to_string()));
    }

    #[test]
    fn difficulty_labels_capitalize_first_char() {
        assert_eq!(Difficulty::Easy.label(), "Easy");
        assert_eq!(Difficulty::Medium.label(), "Medium");
        assert_eq!(Difficulty::Hard.label(), "Hard");
    }

    #[test]
    fn difficulty_classes_are_distinct() {
        let classes: Vec<_> = Difficulty::ALL.iter().map(|d| d.class()).collect();
        assert_eq!(
            classes,
            [
                "difficulty-badge--easy",
                "difficulty-badge--medium",
                "difficulty-badge--hard"
            ]
        );
    }

    #[test]
    fn difficulty_parse() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "Hard".parse::<Difficulty>(),
            Err(UiError::UnknownDifficulty("Hard".to_string()))
        );
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn stat_deserializes_camel_case_trend() {
        let json = r#"{
            "title": "Calories",
            "value": 1250,
            "icon": "flame",
            "trend": { "value": 8, "isPositive": true }
        }"#;
        let stat: Stat = serde_json::from_str(json).unwrap();
        assert_eq!(stat.icon, Icon::Flame);
        assert_eq!(stat.trend, Some(Trend::new(8.0, true)));
    }

    #[test]
    fn stat_trend_is_optional() {
        let json = r#"{ "title": "Streak", "value": "6 days", "icon": "trophy" }"#;
        let stat: Stat = serde_json::from_str(json).unwrap();
        assert!(stat.trend.is_none());
    }
}
