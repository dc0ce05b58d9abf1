use crate::error::Result;
use crate::segment::TextPatternSegment;

/// Number of distinct values `segment` can produce.
///
/// A missing segment stands for a pattern with no generated part, which
/// contributes exactly one combination.
pub fn total_values_potential(segment: Option<&TextPatternSegment>) -> Result<u64> {
    match segment {
        Some(segment) => segment.method().capacity(segment.parameter()),
        None => Ok(1),
    }
}
