//! Property tests for segment matching and capacity.

use proptest::prelude::*;
use textpattern::{
    total_values_potential, validate_segment_value, validate_text_pattern_value,
    validate_value_type, TextPattern, TextPatternSegment, ValueType,
};

/// RANDOM parameter drawn from the marker alphabet plus one literal.
fn random_parameter() -> impl Strategy<Value = String> {
    prop::string::string_regex("[*#Xx/]{1,12}").expect("valid regex")
}

/// Regex over the values a RANDOM parameter implies.
fn implied_alphabet(parameter: &str) -> String {
    parameter
        .chars()
        .map(|c| match c {
            '*' | 'X' | 'x' => "[A-Za-z]".to_string(),
            '#' => "[0-9]".to_string(),
            other => other.to_string(),
        })
        .collect()
}

fn random_parameter_and_value() -> impl Strategy<Value = (String, String)> {
    random_parameter().prop_flat_map(|parameter| {
        let values = prop::string::string_regex(&implied_alphabet(&parameter)).expect("valid regex");
        (Just(parameter), values)
    })
}

proptest! {
    #[test]
    fn random_values_of_implied_alphabet_match((parameter, value) in random_parameter_and_value()) {
        let segment = TextPatternSegment::random(parameter);
        prop_assert!(validate_segment_value(&segment, &value).unwrap());
    }

    #[test]
    fn random_values_of_other_length_never_match(
        parameter in random_parameter(),
        value in "[A-Za-z0-9/]{0,16}"
    ) {
        prop_assume!(value.chars().count() != parameter.chars().count());
        let segment = TextPatternSegment::random(parameter);
        prop_assert!(!validate_segment_value(&segment, &value).unwrap());
    }

    #[test]
    fn random_capacity_is_marker_product(parameter in random_parameter()) {
        let expected: u64 = parameter
            .chars()
            .map(|c| match c {
                '#' => 10,
                '/' => 1,
                _ => 26,
            })
            .product();
        let segment = TextPatternSegment::random(parameter);
        prop_assert_eq!(total_values_potential(Some(&segment)).unwrap(), expected);
    }

    #[test]
    fn sequential_capacity_excludes_zero(width in 1usize..=19) {
        let segment = TextPatternSegment::sequential("#".repeat(width));
        let expected = 10u64.pow(width as u32) - 1;
        prop_assert_eq!(total_values_potential(Some(&segment)).unwrap(), expected);
        prop_assert!(validate_segment_value(&segment, &"0".repeat(width)).unwrap());
    }

    #[test]
    fn text_matches_only_itself(literal in ".{0,10}", suffix in ".{1,3}") {
        let pattern = TextPattern::new().segment(TextPatternSegment::text(literal.clone()));
        prop_assert!(validate_text_pattern_value(&pattern, &literal).unwrap());
        let appended = format!("{literal}{suffix}");
        let prefixed = format!("{suffix}{literal}");
        prop_assert!(!validate_text_pattern_value(&pattern, &appended).unwrap());
        prop_assert!(!validate_text_pattern_value(&pattern, &prefixed).unwrap());
    }

    #[test]
    fn every_pattern_is_text(parameter in random_parameter(), literal in ".{0,6}") {
        let pattern = TextPattern::new()
            .segment(TextPatternSegment::text(literal))
            .segment(TextPatternSegment::random(parameter));
        prop_assert!(validate_value_type(&pattern, ValueType::Text));
    }
}
