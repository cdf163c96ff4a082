//! Property-based tests for the view model
//!
//! Uses proptest to check the display rules of trends, difficulties and
//! stat values over arbitrary inputs.

use fitforge_ui::{Difficulty, Icon, StatValue, Trend, UiError};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Finite percentages, including negatives and zero
fn percentage_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        (-1000i32..1000).prop_map(f64::from),
        -1000.0f64..1000.0,
    ]
}

fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(Difficulty::ALL.to_vec())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The sign shown is decided by the direction flag alone
    #[test]
    fn trend_sign_follows_flag(value in percentage_strategy(), is_positive in any::<bool>()) {
        let label = Trend::new(value, is_positive).label();
        let expected = if is_positive { '+' } else { '-' };

        prop_assert_eq!(label.chars().next(), Some(expected));
        prop_assert!(label.ends_with('%'));
    }

    /// The body of the label is the absolute value of the change
    #[test]
    fn trend_shows_magnitude(value in percentage_strategy(), is_positive in any::<bool>()) {
        let trend = Trend::new(value, is_positive);
        let label = trend.label();
        let body = &label[1..label.len() - 1];

        prop_assert!(trend.magnitude() >= 0.0);
        prop_assert_eq!(body, trend.magnitude().to_string());
        prop_assert!(!body.starts_with('-'));
    }

    /// Flipping the sign of the value never changes what is displayed
    #[test]
    fn trend_label_ignores_value_sign(value in percentage_strategy(), is_positive in any::<bool>()) {
        prop_assert_eq!(
            Trend::new(value, is_positive).label(),
            Trend::new(-value, is_positive).label()
        );
    }

    /// Labels capitalize the first character and keep the rest lowercase
    #[test]
    fn difficulty_label_capitalizes_first_char(difficulty in difficulty_strategy()) {
        let label = difficulty.label();
        let mut chars = label.chars();
        let first = chars.next().unwrap();

        prop_assert!(first.is_uppercase());
        prop_assert_eq!(label.to_lowercase(), difficulty.as_str());
        prop_assert!(chars.all(|c| c.is_lowercase()));
    }

    /// Anything outside the vocabulary is rejected with the offending input
    #[test]
    fn unknown_difficulty_rejected(input in "[a-zA-Z]{0,12}") {
        prop_assume!(!["easy", "medium", "hard"].contains(&input.as_str()));

        prop_assert_eq!(
            input.parse::<Difficulty>(),
            Err(UiError::UnknownDifficulty(input.clone()))
        );
    }

    /// Text values display verbatim
    #[test]
    fn text_value_displays_verbatim(text in "[a-zA-Z0-9 ]{0,40}") {
        prop_assert_eq!(StatValue::from(text.clone()).to_string(), text);
    }

    /// Icon parsing accepts exactly the known names
    #[test]
    fn icon_parse_matches_known_names(input in "[a-z-]{1,12}") {
        let known = Icon::ALL.iter().any(|icon| icon.name() == input);
        prop_assert_eq!(input.parse::<Icon>().is_ok(), known);
    }
}
