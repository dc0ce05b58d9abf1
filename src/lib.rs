//! Validation and capacity rules for text patterns.
//!
//! A pattern is an ordered list of segments, each produced by a generation
//! method with a format parameter. This crate checks candidate values
//! against a pattern, counts how many values a generated segment can
//! produce, and decides whether a pattern fits a declared value type.
//!
//! # Example
//!
//! ```
//! use textpattern::{
//!     total_values_potential, validate_text_pattern_value, validate_value_type, TextPattern,
//!     TextPatternSegment, ValueType,
//! };
//!
//! let pattern = TextPattern::new()
//!     .segment(TextPatternSegment::text("ID-"))
//!     .segment(TextPatternSegment::sequential("####"));
//!
//! assert!(validate_text_pattern_value(&pattern, "ID-0042").unwrap());
//! assert!(!validate_text_pattern_value(&pattern, "ID-42").unwrap());
//!
//! assert_eq!(total_values_potential(pattern.generated_segment()).unwrap(), 9999);
//! assert!(!validate_value_type(&pattern, ValueType::Number));
//! ```

pub mod capacity;
pub mod cli;
pub mod error;
pub mod matcher;
pub mod method;
pub mod output;
pub mod segment;
pub mod value_type;

pub use capacity::total_values_potential;
pub use error::{Error, Result};
pub use matcher::{validate_segment_value, validate_text_pattern_value, CompiledPattern, PatternCache};
pub use method::SegmentMethod;
pub use segment::{TextPattern, TextPatternSegment};
pub use value_type::{validate_value_type, ValueType};
