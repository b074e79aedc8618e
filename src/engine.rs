//!
//! Reformats the text with every edit and keeps the cursor
//! with the digit that was edited.
//!
//! The engine gets the text before the edit, the edited range and
//! the replacement, and decides what the text looks like afterward:
//!
//! 1. Remove everything but digits and `.` from the replacement.
//!    "12,34" pasted becomes "1234".
//! 2. It's a deletion if the replacement is shorter than the range.
//! 3. Count the digits the cursor must stay anchored to. For
//!    an insertion these are the digits in front of the range plus
//!    the inserted digits. For a deletion the digits after the range.
//! 4. A deletion that covers grouping separators is extended to the
//!    left until it covers as many digits as it had characters.
//!    Backspace behind a ',' removes the digit in front of it.
//! 5. Replace the range. An empty result is accepted as is.
//! 6. Strip everything but digits and `.` and parse. If this is not
//!    a number, only deletions are accepted.
//! 7. Fraction digits up to the configured decimal places are shown
//!    as typed. Any more and the value is shifted to the left:
//!    typing "5" behind "$1.23" gives "$12.35".
//! 8. Format. If the formatter fails the raw edit is accepted.
//! 9. A typed `.` without fraction digits is kept.
//! 10. Place the cursor behind the same count of digits.
//!
//! The result is either 'accept the raw edit', 'reject the raw edit'
//! or 'reject the raw edit and use this text and cursor instead'.
//! This never fails, every error is resolved into one of these.
//!

use crate::config::FormatConfig;
use crate::currency_format::{CurrencyFormat, PatternCurrencyFormat};
use crate::digits::{count_digit_class, count_digit_class_in, offset_after_digits};
use crate::grapheme::{replace_range, str_len};
use crate::raw_value::{RawValue, find_fractional_part, strip_non_digits};
use crate::upos_type;
use log::{debug, trace};
use pure_rust_locales::Locale;
use std::cmp::min;
use std::ops::Range;

/// One edit as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest<'a> {
    /// Text before the edit.
    pub old_text: &'a str,
    /// Replaced range of the old text as grapheme offsets.
    pub range: Range<upos_type>,
    /// Replacement as typed or pasted.
    pub replacement: &'a str,
}

impl<'a> EditRequest<'a> {
    pub fn new(old_text: &'a str, range: Range<upos_type>, replacement: &'a str) -> Self {
        Self {
            old_text,
            range,
            replacement,
        }
    }
}

/// Outcome of one edit.
///
/// * accepted, no text: the host applies the raw edit.
/// * not accepted, no text: the host ignores the raw edit.
/// * not accepted, text and cursor: the host ignores the raw edit
///   and replaces its text and cursor with these.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EditResult {
    /// Apply the raw edit.
    pub accepted: bool,
    /// Formatted replacement for the whole text.
    pub new_text: Option<String>,
    /// Cursor position in the new text.
    pub new_cursor: Option<upos_type>,
}

impl EditResult {
    /// Let the host apply the raw edit.
    pub fn accept() -> Self {
        Self {
            accepted: true,
            new_text: None,
            new_cursor: None,
        }
    }

    /// Leave the text as is.
    pub fn reject() -> Self {
        Self {
            accepted: false,
            new_text: None,
            new_cursor: None,
        }
    }

    /// Reject the raw edit and use this text.
    pub fn formatted(text: String, cursor: upos_type) -> Self {
        Self {
            accepted: false,
            new_text: Some(text),
            new_cursor: Some(cursor),
        }
    }

    /// Text was formatted by the engine.
    pub fn is_formatted(&self) -> bool {
        self.new_text.is_some()
    }
}

/// Currency formatting engine for one input.
#[derive(Debug, Clone)]
pub struct CurrencyEngine {
    config: FormatConfig,
    formatter: Box<dyn CurrencyFormat>,
    /// Fraction digits shown by the last format.
    min_fraction_digits: u8,
}

impl Default for CurrencyEngine {
    fn default() -> Self {
        Self {
            config: Default::default(),
            formatter: Box::new(PatternCurrencyFormat::new()),
            min_fraction_digits: 0,
        }
    }
}

impl CurrencyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// New with the given configuration.
    pub fn with_config(config: FormatConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Use a different formatter.
    pub fn with_formatter(mut self, formatter: impl CurrencyFormat + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// Doesn't reformat anything. The next edit or the end of
    /// editing uses the new configuration.
    pub fn set_config(&mut self, config: FormatConfig) {
        self.config = config;
    }

    /// Fraction digits.
    ///
    /// Doesn't reformat anything.
    pub fn set_decimal_places(&mut self, places: u8) {
        self.config.decimal_places = places;
    }

    /// Currency code and symbol from the locale.
    ///
    /// Doesn't reformat anything.
    pub fn set_locale(&mut self, locale: Locale) {
        self.config.set_locale(locale);
    }

    /// Currency code.
    ///
    /// Doesn't reformat anything.
    pub fn set_currency_code(&mut self, code: Option<String>) {
        self.config.currency_code = code;
    }

    /// Currency symbol.
    ///
    /// Doesn't reformat anything.
    pub fn set_currency_symbol(&mut self, symbol: Option<String>) {
        self.config.currency_symbol = symbol;
    }

    /// Set the formatter.
    pub fn set_formatter(&mut self, formatter: impl CurrencyFormat + 'static) {
        self.formatter = Box::new(formatter);
    }

    /// Minimum fraction digits used by the last format.
    pub fn min_fraction_digits(&self) -> u8 {
        self.min_fraction_digits
    }

    /// Format a value with all configured decimal places.
    pub fn format_value(&self, value: &RawValue) -> Option<String> {
        self.formatter
            .format(value, self.config.decimal_places, &self.config)
    }

    /// Parse the display text.
    pub fn parse_value(&self, text: &str) -> Option<RawValue> {
        self.formatter.parse(text)
    }

    /// Process one edit.
    pub fn edit(&mut self, req: &EditRequest<'_>) -> EditResult {
        let result = self.edit_inner(req);
        debug!(
            "currency edit {:?} {:?} {:?} -> {:?}",
            req.old_text, req.range, req.replacement, result
        );
        result
    }

    fn edit_inner(&mut self, req: &EditRequest<'_>) -> EditResult {
        let old_text = req.old_text;
        let old_len = str_len(old_text);
        let range = req.range.clone();

        if range.start > range.end || range.end > old_len {
            debug!("currency edit range {:?} invalid for len {}", range, old_len);
            return EditResult::reject();
        }

        let replacement = strip_non_digits(req.replacement);
        let range_len = range.end - range.start;
        let was_deleted = str_len(&replacement) < range_len;

        let num_digits = if old_text.is_empty() {
            count_digit_class(&replacement).max(1)
        } else if was_deleted {
            count_digit_class_in(old_text, range.end..old_len)
        } else {
            count_digit_class_in(old_text, 0..range.start) + count_digit_class(&replacement)
        };

        // deletions remove digits, not separators.
        let mut start = range.start;
        if was_deleted {
            while count_digit_class_in(old_text, start..range.end) < range_len && start > 0 {
                start -= 1;
            }
        }

        let replaced = match replace_range(old_text, start..range.end, &replacement) {
            Ok(v) => v,
            Err(e) => {
                debug!("currency edit {:?}", e);
                return EditResult::reject();
            }
        };
        if replaced.is_empty() {
            return EditResult::accept();
        }

        let literal = strip_non_digits(&replaced);
        let mut value = match RawValue::parse(&literal) {
            Ok(v) => v,
            Err(e) => {
                debug!("currency edit {:?} deleted={}", e, was_deleted);
                return if was_deleted {
                    EditResult::accept()
                } else {
                    EditResult::reject()
                };
            }
        };

        let places = self.config.decimal_places as usize;
        if let Some((match_len, _)) = find_fractional_part(&literal) {
            let fraction_digits = match_len - 1;
            self.min_fraction_digits = min(places, fraction_digits) as u8;
            if fraction_digits > places {
                value.shift_left(fraction_digits - places);
            }
        } else if old_text.is_empty() {
            // a new value starts with the full precision.
            self.min_fraction_digits = self.config.decimal_places;
        } else {
            self.min_fraction_digits = 0;
        }
        trace!(
            "currency literal {:?} value {} min_fraction {}",
            literal, value, self.min_fraction_digits
        );

        let Some(mut formatted) =
            self.formatter
                .format(&value, self.min_fraction_digits, &self.config)
        else {
            debug!("currency edit format failed, accept raw edit");
            return EditResult::accept();
        };

        if replacement == "." && literal.ends_with('.') {
            formatted.push('.');
        }

        let new_len = str_len(&formatted);
        let cursor = if was_deleted {
            let total = count_digit_class(&formatted);
            offset_after_digits(&formatted, total.saturating_sub(num_digits))
        } else {
            offset_after_digits(
                &formatted,
                num_digits.saturating_sub(value.leading_zeros()),
            )
        };
        trace!(
            "currency cursor anchor {} deleted={} -> {}",
            num_digits, was_deleted, cursor
        );

        if cursor > new_len {
            debug!("currency cursor {} out of bounds {}", cursor, new_len);
            return EditResult::reject();
        }

        EditResult::formatted(formatted, cursor)
    }

    /// Reformat when editing ends.
    ///
    /// Always shows all configured decimal places. Returns None
    /// if the text doesn't contain a number, the text should
    /// stay as it is then.
    pub fn end_editing(&mut self, text: &str) -> Option<String> {
        let value = match RawValue::parse(&strip_non_digits(text)) {
            Ok(v) => v,
            Err(e) => {
                debug!("currency end editing {:?}", e);
                return None;
            }
        };

        self.min_fraction_digits = self.config.decimal_places;
        let formatted = self
            .formatter
            .format(&value, self.min_fraction_digits, &self.config);
        debug!("currency end editing {:?} -> {:?}", text, formatted);
        formatted
    }
}
