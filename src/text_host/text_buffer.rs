use crate::grapheme::{replace_range, str_len};
use crate::text_host::TextHost;
use crate::{CurrencyError, upos_type};
use std::cmp::min;
use std::ops::Range;

/// Single line text with a selection.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    // text
    text: String,
    // len as grapheme count
    len: upos_type,
    // selection anchor
    anchor: upos_type,
    // cursor
    cursor: upos_type,
}

impl TextBuffer {
    /// New empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// New from string. The cursor is at the end.
    pub fn new_text(t: &str) -> Self {
        let len = str_len(t);
        Self {
            text: t.into(),
            len,
            anchor: len,
            cursor: len,
        }
    }

    /// str
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Anchor of the selection.
    pub fn anchor(&self) -> upos_type {
        self.anchor
    }

    /// Selection is not empty.
    pub fn has_selection(&self) -> bool {
        self.anchor != self.cursor
    }
}

impl TextHost for TextBuffer {
    fn text(&self) -> &str {
        self.text.as_str()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.len = str_len(&self.text);
        self.anchor = min(self.anchor, self.len);
        self.cursor = min(self.cursor, self.len);
    }

    #[inline]
    fn len(&self) -> upos_type {
        self.len
    }

    fn selection(&self) -> Range<upos_type> {
        if self.anchor <= self.cursor {
            self.anchor..self.cursor
        } else {
            self.cursor..self.anchor
        }
    }

    #[inline]
    fn cursor(&self) -> upos_type {
        self.cursor
    }

    fn set_selection(
        &mut self,
        anchor: upos_type,
        cursor: upos_type,
    ) -> Result<(), CurrencyError> {
        if anchor > self.len || cursor > self.len {
            let range = min(anchor, cursor)..anchor.max(cursor);
            return Err(CurrencyError::RangeOutOfBounds(range, self.len));
        }
        self.anchor = anchor;
        self.cursor = cursor;
        Ok(())
    }

    fn replace(&mut self, range: Range<upos_type>, text: &str) -> Result<(), CurrencyError> {
        let new_text = replace_range(&self.text, range.clone(), text)?;
        self.text = new_text;
        self.len = str_len(&self.text);
        self.cursor = range.start + str_len(text);
        self.anchor = self.cursor;
        Ok(())
    }
}
