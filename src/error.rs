use crate::method::SegmentMethod;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Segment method {method} has no matching rule")]
    UnsupportedMethod { method: SegmentMethod },

    #[error("Malformed parameter '{parameter}' for {method}: {reason}")]
    MalformedParameter {
        method: SegmentMethod,
        parameter: String,
        reason: &'static str,
    },

    #[error("Capacity of {method}({parameter}) exceeds the representable range")]
    CapacityOverflow {
        method: SegmentMethod,
        parameter: String,
    },

    #[error("Failed to build pattern regex: {0}")]
    RegexBuild(#[from] regex::Error),

    #[error("Unknown segment method '{0}'")]
    UnknownMethod(String),

    #[error("Unknown value type '{0}'")]
    UnknownValueType(String),
}

pub type Result<T> = std::result::Result<T, Error>;
