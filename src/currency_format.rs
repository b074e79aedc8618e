//!
//! The currency formatter.
//!
//! Provides the [CurrencyFormat] trait to plug in any number
//! formatting backend. The default implementation uses
//! [format_num_pattern](https://docs.rs/format_num_pattern).
//!

use crate::config::FormatConfig;
use crate::raw_value::RawValue;
use crate::CurrencyError;
use dyn_clone::{DynClone, clone_box};
use format_num_pattern::core::map_num;
use format_num_pattern::{CurrencySym, NumberFormat, NumberSymbols};
use log::debug;
use std::fmt::Debug;

/// Formats a decimal value as currency and back.
pub trait CurrencyFormat: DynClone + Debug {
    /// Format the value.
    ///
    /// Shows at least `min_fraction_digits` and at most
    /// `config.decimal_places` fraction digits.
    /// Returns None if the value can't be formatted.
    fn format(
        &self,
        value: &RawValue,
        min_fraction_digits: u8,
        config: &FormatConfig,
    ) -> Option<String>;

    /// Parse the display text.
    fn parse(&self, text: &str) -> Option<RawValue>;
}

impl Clone for Box<dyn CurrencyFormat> {
    fn clone(&self) -> Self {
        clone_box(self.as_ref())
    }
}

impl CurrencyFormat for Box<dyn CurrencyFormat> {
    fn format(
        &self,
        value: &RawValue,
        min_fraction_digits: u8,
        config: &FormatConfig,
    ) -> Option<String> {
        self.as_ref().format(value, min_fraction_digits, config)
    }

    fn parse(&self, text: &str) -> Option<RawValue> {
        self.as_ref().parse(text)
    }
}

/// Default formatter.
///
/// Builds a number pattern that exactly fits the value and
/// maps the value with [format_num_pattern]. The currency marker
/// from [FormatConfig::display_symbol] is always a prefix.
///
/// The numeric symbols are fixed to `.` and `,`. The digit
/// extraction depends on `.` being the decimal point.
#[derive(Debug, Default, Clone)]
pub struct PatternCurrencyFormat;

impl PatternCurrencyFormat {
    pub fn new() -> Self {
        Self
    }

    /// Number pattern for the value.
    ///
    /// One `0` per integer digit, grouped by three, and one
    /// `0` per fraction digit. The currency marker is escaped.
    pub fn pattern(value: &RawValue, symbol: &str) -> String {
        let mut pattern = String::new();
        for c in symbol.chars() {
            pattern.push('\\');
            pattern.push(c);
        }

        let len = value.integer().len().max(1);
        for i in 0..len {
            if i > 0 && (len - i) % 3 == 0 {
                pattern.push(',');
            }
            pattern.push('0');
        }

        if value.fraction_len() > 0 {
            pattern.push('.');
            for _ in 0..value.fraction_len() {
                pattern.push('0');
            }
        }

        pattern
    }

    fn try_format(
        &self,
        value: &RawValue,
        min_fraction_digits: u8,
        config: &FormatConfig,
    ) -> Result<String, CurrencyError> {
        let max = config.decimal_places as usize;
        let min = (min_fraction_digits as usize).min(max);

        let mut value = value.clone();
        value.fit_fraction(min, max);

        let pattern = Self::pattern(&value, &config.display_symbol());
        let fmt = NumberFormat::news(pattern, internal_symbols())?;

        let mut out = String::new();
        match map_num::<_, false>(value.to_literal().as_str(), &fmt, fmt.sym(), &mut out) {
            Ok(_) => Ok(out),
            Err(e) => Err(CurrencyError::Format(format!("{:?}", e))),
        }
    }
}

impl CurrencyFormat for PatternCurrencyFormat {
    fn format(
        &self,
        value: &RawValue,
        min_fraction_digits: u8,
        config: &FormatConfig,
    ) -> Option<String> {
        match self.try_format(value, min_fraction_digits, config) {
            Ok(v) => Some(v),
            Err(e) => {
                debug!("currency format failed {:?} for {:?}", e, value);
                None
            }
        }
    }

    fn parse(&self, text: &str) -> Option<RawValue> {
        RawValue::parse_display(text).ok()
    }
}

// The display text must use the same decimal point the
// digit extraction uses.
fn internal_symbols() -> NumberSymbols {
    NumberSymbols {
        decimal_sep: '.',
        decimal_grp: Some(','),
        negative_sym: '-',
        positive_sym: ' ',
        exponent_upper_sym: 'E',
        exponent_lower_sym: 'e',
        currency_sym: CurrencySym::new("$"),
    }
}
