//!
//! Formatting configuration.
//!
//! Changing the configuration never touches the current text.
//! The next edit or the end of editing applies it.
//!

use crate::_private::NonExhaustive;
use crate::digits::is_digit_class;
use pure_rust_locales::{Locale, locale_match};
use unicode_segmentation::UnicodeSegmentation;

/// Currency formatting rules for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Maximum number of fraction digits. Typing more
    /// shifts the value to the left.
    pub decimal_places: u8,
    /// ISO currency code, e.g. "USD".
    pub currency_code: Option<String>,
    /// Display symbol, e.g. "$".
    pub currency_symbol: Option<String>,

    pub non_exhaustive: NonExhaustive,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            currency_code: None,
            currency_symbol: None,
            non_exhaustive: NonExhaustive,
        }
    }
}

impl FormatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currency code and symbol from the locale.
    pub fn from_locale(locale: Locale) -> Self {
        Self::default().with_locale(locale)
    }

    /// Fraction digits.
    pub fn with_decimal_places(mut self, places: u8) -> Self {
        self.decimal_places = places;
        self
    }

    /// Currency code.
    pub fn with_currency_code(mut self, code: impl Into<String>) -> Self {
        self.currency_code = Some(code.into());
        self
    }

    /// Currency symbol.
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = Some(symbol.into());
        self
    }

    /// Currency code and symbol from the locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.set_locale(locale);
        self
    }

    /// Currency code and symbol from the locale.
    ///
    /// The POSIX locale has neither, both are reset to None then.
    pub fn set_locale(&mut self, locale: Locale) {
        self.currency_code = non_empty(locale_match!(locale => LC_MONETARY::INT_CURR_SYMBOL));
        self.currency_symbol = non_empty(locale_match!(locale => LC_MONETARY::CURRENCY_SYMBOL));
    }

    /// The currency marker used for display.
    ///
    /// This is the symbol, or the code followed by a space
    /// if there is no symbol. Digits and `.` are removed, they
    /// would end up in the value otherwise.
    pub fn display_symbol(&self) -> String {
        let sym = if let Some(symbol) = &self.currency_symbol {
            symbol.clone()
        } else if let Some(code) = &self.currency_code {
            format!("{} ", code)
        } else {
            String::new()
        };
        sym.graphemes(true).filter(|g| !is_digit_class(g)).collect()
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() { None } else { Some(s.into()) }
}
