use crate::method::SegmentMethod;
use crate::segment::{TextPattern, TextPatternSegment};
use crate::value_type::ValueType;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "textpattern",
    about = "Check values, capacity and value types of text patterns",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log matching-rule compilation and cache activity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check whether a value matches the whole pattern
    Check {
        #[command(flatten)]
        pattern: PatternArgs,

        /// Candidate value
        value: String,
    },

    /// Print how many values the pattern's generated segment can produce
    Capacity {
        #[command(flatten)]
        pattern: PatternArgs,
    },

    /// Check whether the pattern is compatible with a value type
    ValueType {
        #[command(flatten)]
        pattern: PatternArgs,

        /// Value type name (e.g. TEXT, NUMBER)
        #[arg(value_parser = parse_value_type)]
        value_type: ValueType,
    },
}

#[derive(Args)]
pub struct PatternArgs {
    /// Segment as METHOD:PARAMETER, in pattern order (e.g. -s TEXT:ID- -s RANDOM:##XX)
    #[arg(short, long = "segment", value_parser = parse_segment)]
    pub segments: Vec<TextPatternSegment>,
}

impl PatternArgs {
    pub fn pattern(&self) -> TextPattern {
        self.segments.iter().cloned().collect()
    }
}

/// Splits `METHOD:PARAMETER` at the first colon; the parameter may be empty
/// and may itself contain colons.
pub fn parse_segment(arg: &str) -> Result<TextPatternSegment, String> {
    let (method, parameter) = arg
        .split_once(':')
        .ok_or_else(|| format!("expected METHOD:PARAMETER, got '{}'", arg))?;
    let method: SegmentMethod = method.parse().map_err(|e| format!("{}", e))?;
    Ok(TextPatternSegment::new(method, parameter))
}

fn parse_value_type(arg: &str) -> Result<ValueType, String> {
    arg.parse().map_err(|e| format!("{}", e))
}
