//!
//! Currency input.
//!
//! Combines a [TextHost] with the [CurrencyDelegate]. All
//! edits go through the delegate first, and the text is
//! reformatted as currency while typing.
//!
//! ```
//! use rat_currency::{CurrencyInput, FormatConfig};
//!
//! let mut input = CurrencyInput::new()
//!     .with_config(FormatConfig::new().with_currency_symbol("$"));
//! input.begin_editing();
//! input.insert_str("1234");
//! assert_eq!(input.text(), "$1,234.00");
//! ```
//!

use crate::config::FormatConfig;
use crate::delegate::{CurrencyDelegate, TextFieldDelegate};
use crate::engine::CurrencyEngine;
use crate::raw_value::RawValue;
use crate::text_host::{TextBuffer, TextHost};
use crate::{CurrencyError, upos_type};
use log::debug;
use pure_rust_locales::Locale;
use std::fmt::Display;
use std::ops::Range;
use std::str::FromStr;

/// Text input that formats its content as currency.
#[derive(Debug, Default, Clone)]
pub struct CurrencyInput<H: TextHost = TextBuffer> {
    host: H,
    delegate: CurrencyDelegate,
    editing: bool,
}

impl CurrencyInput<TextBuffer> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: TextHost> CurrencyInput<H> {
    /// Use this text widget.
    pub fn with_host(host: H) -> Self {
        Self {
            host,
            delegate: Default::default(),
            editing: false,
        }
    }

    /// Currency code and symbol from the locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.set_locale(locale);
        self
    }

    /// Fraction digits.
    pub fn with_decimal_places(mut self, places: u8) -> Self {
        self.set_decimal_places(places);
        self
    }

    /// Complete configuration.
    pub fn with_config(mut self, config: FormatConfig) -> Self {
        self.set_config(config);
        self
    }

    /// Second delegate.
    pub fn with_delegate(mut self, delegate: impl TextFieldDelegate + 'static) -> Self {
        self.set_delegate(delegate);
        self
    }

    /// Initial value.
    pub fn with_value<T: Display>(mut self, value: T) -> Result<Self, CurrencyError> {
        self.set_value(value)?;
        Ok(self)
    }

    /// Second delegate. Gets to see every event before
    /// the currency formatting.
    pub fn set_delegate(&mut self, delegate: impl TextFieldDelegate + 'static) {
        self.delegate.set_passthrough(delegate);
    }

    /// Second delegate.
    pub fn delegate(&self) -> Option<&dyn TextFieldDelegate> {
        self.delegate.passthrough()
    }

    /// The text widget.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The text widget.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Formatting engine.
    pub fn engine(&self) -> &CurrencyEngine {
        self.delegate.engine()
    }

    /// Current configuration.
    pub fn config(&self) -> &FormatConfig {
        self.delegate.engine().config()
    }
}

impl<H: TextHost> CurrencyInput<H> {
    /// Currency code and symbol from the locale.
    ///
    /// The text is not reformatted.
    pub fn set_locale(&mut self, locale: Locale) {
        self.delegate.engine_mut().set_locale(locale);
    }

    /// Fraction digits.
    ///
    /// The text is not reformatted.
    pub fn set_decimal_places(&mut self, places: u8) {
        self.delegate.engine_mut().set_decimal_places(places);
    }

    /// Currency code.
    ///
    /// The text is not reformatted.
    pub fn set_currency_code(&mut self, code: Option<String>) {
        self.delegate.engine_mut().set_currency_code(code);
    }

    /// Currency symbol.
    ///
    /// The text is not reformatted.
    pub fn set_currency_symbol(&mut self, symbol: Option<String>) {
        self.delegate.engine_mut().set_currency_symbol(symbol);
    }

    /// Complete configuration.
    ///
    /// The text is not reformatted.
    pub fn set_config(&mut self, config: FormatConfig) {
        self.delegate.engine_mut().set_config(config);
    }
}

impl<H: TextHost> CurrencyInput<H> {
    /// Text
    #[inline]
    pub fn text(&self) -> &str {
        self.host.text()
    }

    /// Empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.host.is_empty()
    }

    /// Length as grapheme count.
    #[inline]
    pub fn len(&self) -> upos_type {
        self.host.len()
    }

    /// Cursor position.
    #[inline]
    pub fn cursor(&self) -> upos_type {
        self.host.cursor()
    }

    /// Selection.
    #[inline]
    pub fn selection(&self) -> Range<upos_type> {
        self.host.selection()
    }

    /// Set the cursor and clear the selection.
    pub fn set_cursor(&mut self, cursor: upos_type) -> Result<(), CurrencyError> {
        self.host.set_cursor(cursor)
    }

    /// Set the selection.
    pub fn set_selection(
        &mut self,
        anchor: upos_type,
        cursor: upos_type,
    ) -> Result<(), CurrencyError> {
        self.host.set_selection(anchor, cursor)
    }

    /// Editing is active.
    pub fn is_editing(&self) -> bool {
        self.editing
    }
}

impl<H: TextHost> CurrencyInput<H> {
    /// Replace the range with the string, as if typed.
    ///
    /// Returns true if the text changed.
    pub fn replace(&mut self, range: Range<upos_type>, s: &str) -> Result<bool, CurrencyError> {
        if range.start > range.end {
            return Err(CurrencyError::InvalidRange(range.start, range.end));
        }
        if range.end > self.host.len() {
            return Err(CurrencyError::RangeOutOfBounds(range, self.host.len()));
        }

        let old_text = self.host.text().to_string();
        if self
            .delegate
            .should_change_text(&mut self.host, range.clone(), s)
        {
            self.host.replace(range, s)?;
        }
        Ok(self.host.text() != old_text)
    }

    /// Insert at the cursor. Replaces the selection.
    pub fn insert_str(&mut self, s: &str) -> bool {
        let range = self.host.selection();
        match self.replace(range, s) {
            Ok(changed) => changed,
            Err(e) => {
                debug!("currency insert {:?}", e);
                false
            }
        }
    }

    /// Insert a char at the cursor. Replaces the selection.
    pub fn insert_char(&mut self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut buf))
    }

    /// Backspace. Deletes the selection if any.
    pub fn delete_prev_char(&mut self) -> bool {
        let range = self.host.selection();
        let range = if !range.is_empty() {
            range
        } else if range.start > 0 {
            range.start - 1..range.start
        } else {
            return false;
        };
        self.delete_range(range).unwrap_or_else(|e| {
            debug!("currency delete {:?}", e);
            false
        })
    }

    /// Delete. Deletes the selection if any.
    pub fn delete_next_char(&mut self) -> bool {
        let range = self.host.selection();
        let range = if !range.is_empty() {
            range
        } else if range.end < self.host.len() {
            range.end..range.end + 1
        } else {
            return false;
        };
        self.delete_range(range).unwrap_or_else(|e| {
            debug!("currency delete {:?}", e);
            false
        })
    }

    /// Delete the range, as if typed.
    pub fn delete_range(&mut self, range: Range<upos_type>) -> Result<bool, CurrencyError> {
        self.replace(range, "")
    }
}

impl<H: TextHost> CurrencyInput<H> {
    /// Start editing. Returns false if the delegate refuses.
    pub fn begin_editing(&mut self) -> bool {
        if !self.delegate.should_begin_editing(&self.host) {
            return false;
        }
        self.editing = true;
        self.delegate.did_begin_editing(&mut self.host);
        true
    }

    /// End editing. Reformats the text with all decimal places.
    /// Returns false if the delegate refuses.
    pub fn end_editing(&mut self) -> bool {
        if !self.delegate.should_end_editing(&self.host) {
            return false;
        }
        self.editing = false;
        self.delegate.did_end_editing(&mut self.host);
        true
    }

    /// Clear the text. Returns false if the delegate refuses.
    pub fn clear(&mut self) -> bool {
        if !self.delegate.should_clear(&self.host) {
            return false;
        }
        self.host.set_text("");
        true
    }

    /// Return/Enter. Returns the delegates decision.
    pub fn submit(&mut self) -> bool {
        self.delegate.should_return(&self.host)
    }
}

impl<H: TextHost> CurrencyInput<H> {
    /// The value as plain decimal.
    pub fn raw_value(&self) -> Result<RawValue, CurrencyError> {
        if self.host.is_empty() {
            return Err(CurrencyError::NoText);
        }
        self.delegate
            .engine()
            .parse_value(self.host.text())
            .ok_or_else(|| CurrencyError::InvalidNumber(self.host.text().into()))
    }

    /// The value.
    ///
    /// Currency symbols and grouping are removed before
    /// the conversion.
    pub fn value<T: FromStr>(&self) -> Result<T, CurrencyError> {
        self.raw_value()?.to_number()
    }

    /// The value or None if the text is empty.
    pub fn value_opt<T: FromStr>(&self) -> Result<Option<T>, CurrencyError> {
        if self.host.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.value()?))
        }
    }

    /// Set the value. Formats with all decimal places
    /// and places the cursor at the end.
    ///
    /// Fails for anything that is not a plain non-negative
    /// decimal, e.g. negative numbers or NaN.
    pub fn set_value<T: Display>(&mut self, value: T) -> Result<(), CurrencyError> {
        let raw = RawValue::parse(&value.to_string())?;
        let Some(text) = self.delegate.engine().format_value(&raw) else {
            return Err(CurrencyError::Format(raw.to_literal()));
        };
        self.host.set_text(&text);
        self.host.set_cursor(self.host.len())?;
        Ok(())
    }
}
