//! Whole-value matching of patterns and single segments.

use crate::error::Result;
use crate::segment::{TextPattern, TextPatternSegment};
use parking_lot::RwLock;
use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Anchored matching rule for a whole pattern, compiled once.
///
/// # Example
///
/// ```
/// use textpattern::{CompiledPattern, TextPattern, TextPatternSegment};
///
/// let pattern = TextPattern::new()
///     .segment(TextPatternSegment::text("AB"))
///     .segment(TextPatternSegment::random("##"));
/// let compiled = CompiledPattern::new(&pattern).unwrap();
///
/// assert!(compiled.is_match("AB12"));
/// assert!(!compiled.is_match("XAB12"));
/// ```
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
}

impl CompiledPattern {
    pub fn new(pattern: &TextPattern) -> Result<Self> {
        let mut body = String::new();
        for segment in pattern.segments() {
            body.push_str(&segment.value_regex()?);
        }
        Ok(Self {
            regex: anchored(&body)?,
        })
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

fn anchored(body: &str) -> Result<Regex> {
    let regex_str = format!("^(?:{})$", body);
    tracing::trace!(regex = %regex_str, "compiling matching rule");
    Ok(Regex::new(&regex_str)?)
}

/// Whether `value` matches the full pattern, start to end.
pub fn validate_text_pattern_value(pattern: &TextPattern, value: &str) -> Result<bool> {
    Ok(CompiledPattern::new(pattern)?.is_match(value))
}

/// Whether `value` is a complete value of this one segment.
pub fn validate_segment_value(segment: &TextPatternSegment, value: &str) -> Result<bool> {
    let regex = anchored(&segment.value_regex()?)?;
    Ok(regex.is_match(value))
}

/// Compiled matching rules keyed by the full segment sequence.
///
/// Rules are compiled outside the lock and published whole, so readers never
/// observe a partially built entry. When two threads race on the same
/// pattern the first insert wins and both get the same rule.
#[derive(Debug, Default)]
pub struct PatternCache {
    rules: RwLock<FxHashMap<TextPattern, Arc<CompiledPattern>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compile(&self, pattern: &TextPattern) -> Result<Arc<CompiledPattern>> {
        if let Some(rule) = self.rules.read().get(pattern) {
            tracing::trace!(segments = pattern.segments().len(), "matching rule cache hit");
            return Ok(Arc::clone(rule));
        }

        let compiled = Arc::new(CompiledPattern::new(pattern)?);
        tracing::debug!(regex = compiled.as_str(), "matching rule cached");

        let mut rules = self.rules.write();
        let rule = rules.entry(pattern.clone()).or_insert(compiled);
        Ok(Arc::clone(rule))
    }

    pub fn validate(&self, pattern: &TextPattern, value: &str) -> Result<bool> {
        Ok(self.get_or_compile(pattern)?.is_match(value))
    }

    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }
}
