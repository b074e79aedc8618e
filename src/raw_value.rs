//!
//! Turns display text back into a plain decimal literal.
//!
//! [strip_non_digits] removes everything but `0-9` and `.`,
//! [find_fractional_part] locates the decimal point and
//! [RawValue] is the normalized literal the formatter works with.
//!

use crate::CurrencyError;
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

static NON_DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.]").expect("valid regex"));

static DECIMAL_POINT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.([0-9]+)").expect("valid regex"));

/// Remove every character that is not a digit or the decimal point.
pub fn strip_non_digits(text: &str) -> String {
    NON_DIGIT_RE.replace_all(text, "").into_owned()
}

/// Locate the first `.` that is followed by at least one digit.
///
/// Returns the length of the match (point included) and the
/// number of digits after the point.
pub fn find_fractional_part(text: &str) -> Option<(usize, usize)> {
    DECIMAL_POINT_RE.captures(text).map(|c| {
        let whole = c.get(0).map(|m| m.len()).unwrap_or_default();
        let digits = c.get(1).map(|m| m.len()).unwrap_or_default();
        (whole, digits)
    })
}

/// Normalized decimal literal.
///
/// Only non-negative plain decimals exist here, the
/// display text can't hold anything else.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawValue {
    /// Integer digits without leading zeros. Never empty.
    integer: String,
    /// Fraction digits as typed.
    fraction: String,
    /// The literal had a decimal point.
    point: bool,
    /// Leading zeros dropped by the normalization.
    leading_zeros: u32,
}

impl RawValue {
    /// Zero.
    pub fn new() -> Self {
        Self {
            integer: "0".into(),
            ..Default::default()
        }
    }

    /// Parse a plain decimal literal `[0-9]*(\.[0-9]*)?` with
    /// at least one digit.
    ///
    /// Anything else, e.g. two decimal points or a lone `.`,
    /// is an [CurrencyError::InvalidNumber].
    pub fn parse(literal: &str) -> Result<Self, CurrencyError> {
        let (integer, fraction, point) = match literal.split_once('.') {
            Some((i, f)) => (i, f, true),
            None => (literal, "", false),
        };

        if integer.is_empty() && fraction.is_empty() {
            return Err(CurrencyError::InvalidNumber(literal.into()));
        }
        if !integer.bytes().all(|c| c.is_ascii_digit())
            || !fraction.bytes().all(|c| c.is_ascii_digit())
        {
            return Err(CurrencyError::InvalidNumber(literal.into()));
        }

        let trimmed = integer.trim_start_matches('0');
        let (integer, leading_zeros) = if trimmed.is_empty() {
            // keep one zero.
            ("0", integer.len().saturating_sub(1) as u32)
        } else {
            (trimmed, (integer.len() - trimmed.len()) as u32)
        };

        Ok(Self {
            integer: integer.into(),
            fraction: fraction.into(),
            point,
            leading_zeros,
        })
    }

    /// Parse some display text. Strips everything but digits and
    /// the decimal point first.
    pub fn parse_display(text: &str) -> Result<Self, CurrencyError> {
        Self::parse(&strip_non_digits(text))
    }

    /// Integer digits.
    pub fn integer(&self) -> &str {
        &self.integer
    }

    /// Fraction digits.
    pub fn fraction(&self) -> &str {
        &self.fraction
    }

    /// Number of fraction digits.
    pub fn fraction_len(&self) -> usize {
        self.fraction.len()
    }

    /// The literal had a decimal point, maybe without
    /// any digits after it.
    pub fn has_point(&self) -> bool {
        self.point
    }

    /// Leading zeros that were removed while parsing.
    pub fn leading_zeros(&self) -> u32 {
        self.leading_zeros
    }

    /// Multiply by 10^n by moving n fraction digits into the
    /// integer part. Missing fraction digits are filled with zeros.
    ///
    /// Zeros that end up in front of the integer part are dropped
    /// and counted as leading zeros.
    pub fn shift_left(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let before = self.integer.len() + self.fraction.len() + n.saturating_sub(self.fraction.len());

        let mut integer = if self.integer == "0" {
            String::new()
        } else {
            std::mem::take(&mut self.integer)
        };
        let take = n.min(self.fraction.len());
        integer.push_str(&self.fraction[..take]);
        for _ in take..n {
            integer.push('0');
        }
        self.fraction.drain(..take);

        let trimmed = integer.trim_start_matches('0');
        self.integer = if trimmed.is_empty() {
            "0".into()
        } else {
            trimmed.into()
        };

        let after = self.integer.len() + self.fraction.len();
        self.leading_zeros += before.saturating_sub(after) as u32;
    }

    /// Round half-up to at most `places` fraction digits.
    pub fn round(&mut self, places: usize) {
        if self.fraction.len() <= places {
            return;
        }
        let round_up = self.fraction.as_bytes()[places] >= b'5';
        self.fraction.truncate(places);
        if !round_up {
            return;
        }

        let mut digits = Vec::with_capacity(self.integer.len() + self.fraction.len() + 1);
        digits.extend_from_slice(self.integer.as_bytes());
        digits.extend_from_slice(self.fraction.as_bytes());

        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }

        let split = digits.len() - self.fraction.len();
        // only ascii digits in here.
        self.integer = digits[..split].iter().map(|v| *v as char).collect();
        self.fraction = digits[split..].iter().map(|v| *v as char).collect();
    }

    /// Round to `max` fraction digits, then drop trailing zeros
    /// down to `min` digits or pad with zeros up to `min` digits.
    pub fn fit_fraction(&mut self, min: usize, max: usize) {
        self.round(max);
        while self.fraction.len() > min && self.fraction.ends_with('0') {
            self.fraction.pop();
        }
        while self.fraction.len() < min {
            self.fraction.push('0');
        }
    }

    /// Plain literal with `.` as decimal point.
    pub fn to_literal(&self) -> String {
        let mut s = self.integer.clone();
        if !self.fraction.is_empty() {
            s.push('.');
            s.push_str(&self.fraction);
        }
        s
    }

    /// Convert to some number type.
    pub fn to_number<T: FromStr>(&self) -> Result<T, CurrencyError> {
        self.to_literal()
            .parse::<T>()
            .map_err(|_| CurrencyError::InvalidNumber(self.to_literal()))
    }
}

impl Display for RawValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_literal())
    }
}

impl FromStr for RawValue {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RawValue::parse(s)
    }
}
