use crate::error::{Error, Result};
use crate::segment::TextPattern;
use std::fmt;
use std::str::FromStr;

/// Classification declared for the values a pattern produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Text,
    LongText,
    Letter,
    PhoneNumber,
    Email,
    Boolean,
    Date,
    Number,
    Integer,
    IntegerPositive,
    Percentage,
}

impl ValueType {
    pub const ALL: [ValueType; 11] = [
        ValueType::Text,
        ValueType::LongText,
        ValueType::Letter,
        ValueType::PhoneNumber,
        ValueType::Email,
        ValueType::Boolean,
        ValueType::Date,
        ValueType::Number,
        ValueType::Integer,
        ValueType::IntegerPositive,
        ValueType::Percentage,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ValueType::Text => "TEXT",
            ValueType::LongText => "LONG_TEXT",
            ValueType::Letter => "LETTER",
            ValueType::PhoneNumber => "PHONE_NUMBER",
            ValueType::Email => "EMAIL",
            ValueType::Boolean => "BOOLEAN",
            ValueType::Date => "DATE",
            ValueType::Number => "NUMBER",
            ValueType::Integer => "INTEGER",
            ValueType::IntegerPositive => "INTEGER_POSITIVE",
            ValueType::Percentage => "PERCENTAGE",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ValueType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownValueType(s.to_string()))
    }
}

/// Whether every value of `pattern` can be stored under `value_type`.
///
/// Only free text and numbers have a rule; any other type is rejected.
pub fn validate_value_type(pattern: &TextPattern, value_type: ValueType) -> bool {
    match value_type {
        ValueType::Text => true,
        // Every segment is checked, no early exit.
        ValueType::Number => pattern
            .segments()
            .iter()
            .fold(true, |all, segment| segment.is_numeric_only() && all),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::SegmentMethod;
    use crate::segment::TextPatternSegment;

    #[test]
    fn test_letter_disqualifies_number() {
        let pattern = TextPattern::new()
            .segment(TextPatternSegment::text("A"))
            .segment(TextPatternSegment::random("##"));
        assert!(!validate_value_type(&pattern, ValueType::Number));
        assert!(validate_value_type(&pattern, ValueType::Text));
    }

    #[test]
    fn test_digits_only_is_number() {
        let pattern = TextPattern::new()
            .segment(TextPatternSegment::sequential("0000"))
            .segment(TextPatternSegment::random("###"));
        assert!(validate_value_type(&pattern, ValueType::Number));
    }

    #[test]
    fn test_numeric_text_is_number() {
        let pattern = TextPattern::new()
            .segment(TextPatternSegment::text("47"))
            .segment(TextPatternSegment::text(""))
            .segment(TextPatternSegment::sequential("##"));
        assert!(validate_value_type(&pattern, ValueType::Number));
    }

    #[test]
    fn test_random_letter_marker_is_not_number() {
        let pattern = TextPattern::new().segment(TextPatternSegment::random("#X#"));
        assert!(!validate_value_type(&pattern, ValueType::Number));
    }

    #[test]
    fn test_resolved_methods_are_not_number() {
        let pattern = TextPattern::new()
            .segment(TextPatternSegment::new(SegmentMethod::CurrentDate, "yyyyMMdd"));
        assert!(!validate_value_type(&pattern, ValueType::Number));
    }

    #[test]
    fn test_empty_pattern_is_number() {
        assert!(validate_value_type(&TextPattern::new(), ValueType::Number));
    }

    #[test]
    fn test_other_types_rejected() {
        let pattern = TextPattern::new().segment(TextPatternSegment::sequential("###"));
        for value_type in ValueType::ALL {
            let expected = matches!(value_type, ValueType::Text | ValueType::Number);
            assert_eq!(validate_value_type(&pattern, value_type), expected, "{value_type}");
        }
    }

    #[test]
    fn test_parse_value_type() {
        assert_eq!("number".parse::<ValueType>().unwrap(), ValueType::Number);
        assert_eq!(
            "INTEGER_POSITIVE".parse::<ValueType>().unwrap(),
            ValueType::IntegerPositive
        );
        assert!(matches!(
            "DECIMAL".parse::<ValueType>(),
            Err(Error::UnknownValueType(_))
        ));
    }
}
