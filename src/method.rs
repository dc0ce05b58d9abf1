//! Generation methods and their per-method rules.
//!
//! Every method carries three behaviours: the regex fragment describing the
//! values it produces, whether those values are digits only, and how many
//! distinct values it can produce. They are kept side by side here so a new
//! method has to answer all three.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

const LETTER_CLASS: &str = "[A-Za-z]";
const DIGIT_CLASS: &str = "[0-9]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentMethod {
    /// Fixed text, matched verbatim.
    Text,
    /// Random draw, one marker per generated character.
    Random,
    /// Counter padded to the parameter's width.
    Sequential,
    /// Resolved to the organisation unit code before validation.
    OrgUnitCode,
    /// Resolved to a formatted date before validation.
    CurrentDate,
}

impl SegmentMethod {
    pub const ALL: [SegmentMethod; 5] = [
        SegmentMethod::Text,
        SegmentMethod::Random,
        SegmentMethod::Sequential,
        SegmentMethod::OrgUnitCode,
        SegmentMethod::CurrentDate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SegmentMethod::Text => "TEXT",
            SegmentMethod::Random => "RANDOM",
            SegmentMethod::Sequential => "SEQUENTIAL",
            SegmentMethod::OrgUnitCode => "ORG_UNIT_CODE",
            SegmentMethod::CurrentDate => "CURRENT_DATE",
        }
    }

    /// Whether values of this method are produced by the generator rather
    /// than resolved from context.
    pub fn is_generated(self) -> bool {
        matches!(self, SegmentMethod::Random | SegmentMethod::Sequential)
    }

    /// Unanchored regex fragment matching exactly the values this method can
    /// produce for `parameter`.
    pub fn value_regex(self, parameter: &str) -> Result<String> {
        match self {
            SegmentMethod::Text => Ok(regex::escape(parameter)),
            SegmentMethod::Random => {
                if parameter.is_empty() {
                    return Err(self.malformed(parameter, "expected at least one marker"));
                }
                let mut fragment = String::with_capacity(parameter.len() * LETTER_CLASS.len());
                let mut buf = [0u8; 4];
                for c in parameter.chars() {
                    match c {
                        '*' | 'X' | 'x' => fragment.push_str(LETTER_CLASS),
                        '#' => fragment.push_str(DIGIT_CLASS),
                        other => fragment.push_str(&regex::escape(other.encode_utf8(&mut buf))),
                    }
                }
                Ok(fragment)
            }
            SegmentMethod::Sequential => {
                let width = parameter.chars().count();
                if width == 0 {
                    return Err(self.malformed(parameter, "expected a positive width"));
                }
                Ok(format!("{}{{{}}}", DIGIT_CLASS, width))
            }
            SegmentMethod::OrgUnitCode | SegmentMethod::CurrentDate => {
                Err(Error::UnsupportedMethod { method: self })
            }
        }
    }

    /// Whether every value this method can produce consists of digits only.
    pub fn is_numeric_only(self, parameter: &str) -> bool {
        match self {
            SegmentMethod::Sequential => true,
            SegmentMethod::Random => !parameter.is_empty() && parameter.chars().all(|c| c == '#'),
            SegmentMethod::Text => parameter.chars().all(|c| c.is_ascii_digit()),
            SegmentMethod::OrgUnitCode | SegmentMethod::CurrentDate => false,
        }
    }

    /// Number of distinct values this method can produce for `parameter`.
    ///
    /// Sequential values skip the all-zero counter, so a width of `n` yields
    /// `10^n - 1` values. Methods that resolve to a single value yield 1.
    pub fn capacity(self, parameter: &str) -> Result<u64> {
        match self {
            SegmentMethod::Sequential => {
                let width = u32::try_from(parameter.chars().count())
                    .map_err(|_| self.overflow(parameter))?;
                10u64
                    .checked_pow(width)
                    .map(|n| n - 1)
                    .ok_or_else(|| self.overflow(parameter))
            }
            SegmentMethod::Random => parameter.chars().try_fold(1u64, |acc, c| {
                acc.checked_mul(marker_cardinality(c))
                    .ok_or_else(|| self.overflow(parameter))
            }),
            _ => Ok(1),
        }
    }

    fn malformed(self, parameter: &str, reason: &'static str) -> Error {
        Error::MalformedParameter {
            method: self,
            parameter: parameter.to_string(),
            reason,
        }
    }

    fn overflow(self, parameter: &str) -> Error {
        tracing::debug!(method = %self, parameter, "capacity overflow");
        Error::CapacityOverflow {
            method: self,
            parameter: parameter.to_string(),
        }
    }
}

/// Values a single RANDOM marker can take. Unmarked characters are literals.
fn marker_cardinality(c: char) -> u64 {
    match c {
        '*' | 'X' | 'x' => 26,
        '#' => 10,
        _ => 1,
    }
}

impl fmt::Display for SegmentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SegmentMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SegmentMethod::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownMethod(s.to_string()))
    }
}
