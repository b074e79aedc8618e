#![doc = include_str!("../readme.md")]
#![allow(clippy::uninlined_format_args)]
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Range;

pub mod config;
pub mod currency_format;
pub mod currency_input;
pub mod delegate;
pub mod digits;
pub mod engine;
pub mod raw_value;
pub mod text_host;

mod grapheme;

pub use config::FormatConfig;
pub use currency_input::CurrencyInput;
pub use engine::{CurrencyEngine, EditRequest, EditResult};
pub use pure_rust_locales::Locale;
pub use raw_value::RawValue;

pub use format_num_pattern::NumberFmtError;

#[derive(Debug, PartialEq)]
pub enum CurrencyError {
    /// The text is not a plain decimal literal.
    InvalidNumber(String),
    /// Error from the number formatting backend.
    Format(String),
    /// Indicates that the passed range was out of bounds.
    ///
    /// Contains the range and the actual grapheme count
    /// of the text, in that order.
    RangeOutOfBounds(Range<upos_type>, upos_type),
    /// Indicates that a reversed range (end < start) was
    /// encountered.
    InvalidRange(
        upos_type, // Start.
        upos_type, // End.
    ),
    /// The host has no text to work with.
    NoText,
}

impl Display for CurrencyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for CurrencyError {}

impl From<NumberFmtError> for CurrencyError {
    fn from(value: NumberFmtError) -> Self {
        CurrencyError::Format(format!("{:?}", value))
    }
}

/// Column type. All offsets are grapheme indices.
#[allow(non_camel_case_types)]
pub type upos_type = u32;

mod _private {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NonExhaustive;
}
