//!
//! Counting digit-class graphemes.
//!
//! A grapheme belongs to the digit-class if it is one of `0-9` or `.`.
//! All the cursor arithmetic works with counts of these instead of raw
//! offsets, because grouping separators and currency symbols come and
//! go with every reformat.
//!

use crate::upos_type;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Digit or decimal point.
#[inline]
pub fn is_digit_class(g: &str) -> bool {
    matches!(
        g,
        "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" | "."
    )
}

/// Ascii digit only, without the decimal point.
#[inline]
pub fn is_ascii_digit(g: &str) -> bool {
    g != "." && is_digit_class(g)
}

/// Number of digit-class graphemes in the text.
pub fn count_digit_class(text: &str) -> upos_type {
    text.graphemes(true).filter(|g| is_digit_class(g)).count() as upos_type
}

/// Number of digit-class graphemes in the grapheme range of the text.
///
/// The range must be valid for the text. Positions beyond the
/// end of the text are not counted.
pub fn count_digit_class_in(text: &str, range: Range<upos_type>) -> upos_type {
    text.graphemes(true)
        .skip(range.start as usize)
        .take(range.end.saturating_sub(range.start) as usize)
        .filter(|g| is_digit_class(g))
        .count() as upos_type
}

/// Number of ascii digits in the text. The decimal point is not counted.
pub fn count_ascii_digits(text: &str) -> upos_type {
    text.graphemes(true).filter(|g| is_ascii_digit(g)).count() as upos_type
}

/// Grapheme offset directly behind the n-th digit-class grapheme.
///
/// For n == 0 this is the offset of the first digit-class grapheme,
/// so the cursor lands in front of the number, not in front of the
/// currency symbol. Returns the text length if there are fewer than
/// n digit-class graphemes.
pub fn offset_after_digits(text: &str, n: upos_type) -> upos_type {
    let mut seen = 0;
    let mut pos = 0;
    for g in text.graphemes(true) {
        if is_digit_class(g) {
            if seen == n {
                return pos;
            }
            seen += 1;
            if seen == n {
                return pos + 1;
            }
        }
        pos += 1;
    }
    pos
}
