use crate::{CurrencyError, upos_type};
use std::iter::once;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Length as grapheme count.
#[inline]
pub(crate) fn str_len(s: &str) -> upos_type {
    s.graphemes(true).count() as upos_type
}

/// Grapheme range to byte range.
pub(crate) fn byte_range(value: &str, range: Range<upos_type>) -> Result<Range<usize>, CurrencyError> {
    if range.start > range.end {
        return Err(CurrencyError::InvalidRange(range.start, range.end));
    }

    let mut byte_start = None;
    let mut byte_end = None;
    for (cidx, (idx, _c)) in value
        .grapheme_indices(true)
        .chain(once((value.len(), "")))
        .enumerate()
    {
        if cidx == range.start as usize {
            byte_start = Some(idx);
        }
        if cidx == range.end as usize {
            byte_end = Some(idx);
            break;
        }
    }

    match (byte_start, byte_end) {
        (Some(start), Some(end)) => Ok(start..end),
        _ => Err(CurrencyError::RangeOutOfBounds(range, str_len(value))),
    }
}

/// Split off the given grapheme range.
pub(crate) fn split3(
    value: &str,
    range: Range<upos_type>,
) -> Result<(&str, &str, &str), CurrencyError> {
    let bytes = byte_range(value, range)?;
    Ok((
        &value[..bytes.start],
        &value[bytes.start..bytes.end],
        &value[bytes.end..],
    ))
}

/// Replace the grapheme range with the string.
pub(crate) fn replace_range(
    value: &str,
    range: Range<upos_type>,
    replacement: &str,
) -> Result<String, CurrencyError> {
    let (before, _, after) = split3(value, range)?;
    let mut s = String::with_capacity(before.len() + replacement.len() + after.len());
    s.push_str(before);
    s.push_str(replacement);
    s.push_str(after);
    Ok(s)
}
