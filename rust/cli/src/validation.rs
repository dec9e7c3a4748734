//! Input parsing for the interactive numbered menus.
//!
//! Every prompt in the game is a numbered menu ("1. Yes / 2. No"). Input
//! that is non-numeric or outside the menu range is never an error condition:
//! the caller re-presents the same menu with a hint listing the valid
//! choices by position, and the round state is untouched.

use crate::ui::invalid_choice_hint;

/// Result type for parsing a menu response.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A valid 1-based menu position
    Choice(usize),
    /// Anything else, carrying the hint to re-prompt with
    Invalid(String),
}

/// Parse user input against a numbered menu of `labels`.
///
/// Accepts a single integer between 1 and `labels.len()` inclusive.
/// Everything else (non-numeric text, out-of-range numbers, empty input)
/// yields `Invalid` with a hint built from the labels, e.g.
/// "Please enter 1 for 'Yes' or 2 for 'No'.".
///
/// # Example
///
/// ```rust
/// use blackjack_cli::validation::{parse_menu_choice, ParseResult};
///
/// assert_eq!(parse_menu_choice("2", &["Yes", "No"]), ParseResult::Choice(2));
///
/// match parse_menu_choice("5", &["Yes", "No"]) {
///     ParseResult::Invalid(hint) => assert!(hint.contains("1 for 'Yes'")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_menu_choice(input: &str, labels: &[&str]) -> ParseResult {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=labels.len()).contains(&n) => ParseResult::Choice(n),
        _ => ParseResult::Invalid(invalid_choice_hint(labels)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAY_LABELS: [&str; 2] = ["Yes", "No"];
    const TURN_LABELS: [&str; 3] = ["Stand/Stick", "Hit/Twist", "Quit Game"];

    #[test]
    fn test_each_position_parses() {
        for (i, _) in TURN_LABELS.iter().enumerate() {
            let input = (i + 1).to_string();
            assert_eq!(
                parse_menu_choice(&input, &TURN_LABELS),
                ParseResult::Choice(i + 1)
            );
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_accepted() {
        assert_eq!(
            parse_menu_choice(" 1 ", &PLAY_LABELS),
            ParseResult::Choice(1)
        );
    }

    #[test]
    fn test_out_of_range_number_is_invalid() {
        match parse_menu_choice("5", &TURN_LABELS) {
            ParseResult::Invalid(hint) => {
                assert!(hint.contains("1 for 'Stand/Stick'"));
                assert!(hint.contains("2 for 'Hit/Twist'"));
                assert!(hint.contains("3 for 'Quit Game'"));
            }
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_is_invalid() {
        assert!(matches!(
            parse_menu_choice("0", &PLAY_LABELS),
            ParseResult::Invalid(_)
        ));
    }

    #[test]
    fn test_non_numeric_is_invalid() {
        assert!(matches!(
            parse_menu_choice("hit", &TURN_LABELS),
            ParseResult::Invalid(_)
        ));
        assert!(matches!(
            parse_menu_choice("", &TURN_LABELS),
            ParseResult::Invalid(_)
        ));
    }
}
