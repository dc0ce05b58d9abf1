use crate::capacity::total_values_potential;
use crate::error::Result;
use crate::method::SegmentMethod;

/// One unit of a pattern: a generation method and its format parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextPatternSegment {
    method: SegmentMethod,
    parameter: String,
}

impl TextPatternSegment {
    pub fn new(method: SegmentMethod, parameter: impl Into<String>) -> Self {
        Self {
            method,
            parameter: parameter.into(),
        }
    }

    pub fn text(parameter: impl Into<String>) -> Self {
        Self::new(SegmentMethod::Text, parameter)
    }

    pub fn random(parameter: impl Into<String>) -> Self {
        Self::new(SegmentMethod::Random, parameter)
    }

    pub fn sequential(parameter: impl Into<String>) -> Self {
        Self::new(SegmentMethod::Sequential, parameter)
    }

    pub fn method(&self) -> SegmentMethod {
        self.method
    }

    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    pub fn value_regex(&self) -> Result<String> {
        self.method.value_regex(&self.parameter)
    }

    pub fn is_numeric_only(&self) -> bool {
        self.method.is_numeric_only(&self.parameter)
    }
}

/// Ordered segments that concatenate left to right into a full value.
///
/// # Example
///
/// ```
/// use textpattern::{TextPattern, TextPatternSegment};
///
/// let pattern = TextPattern::new()
///     .segment(TextPatternSegment::text("ID-"))
///     .segment(TextPatternSegment::random("##XX"));
///
/// assert_eq!(pattern.segments().len(), 2);
/// assert_eq!(pattern.total_values_potential().unwrap(), 67_600);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextPattern {
    segments: Vec<TextPatternSegment>,
}

impl TextPattern {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segment(mut self, segment: TextPatternSegment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn segments(&self) -> &[TextPatternSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The first segment whose value comes from the generator, if any.
    pub fn generated_segment(&self) -> Option<&TextPatternSegment> {
        self.segments.iter().find(|s| s.method().is_generated())
    }

    /// Capacity of the generated segment; a pattern without one has exactly
    /// one possible value.
    pub fn total_values_potential(&self) -> Result<u64> {
        total_values_potential(self.generated_segment())
    }
}

impl From<Vec<TextPatternSegment>> for TextPattern {
    fn from(segments: Vec<TextPatternSegment>) -> Self {
        Self { segments }
    }
}

impl FromIterator<TextPatternSegment> for TextPattern {
    fn from_iter<I: IntoIterator<Item = TextPatternSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}
