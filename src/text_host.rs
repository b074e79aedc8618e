//!
//! The text widget the currency formatting runs on.
//!
//! [TextHost] is all the formatting needs from a widget:
//! the text, the selection and a way to apply a raw edit.
//! [TextBuffer] is a single line implementation.
//!

use crate::{CurrencyError, upos_type};
use std::fmt::Debug;
use std::ops::Range;

mod text_buffer;

pub use text_buffer::TextBuffer;

/// Text widget.
///
/// All positions are grapheme offsets.
pub trait TextHost: Debug {
    /// Current text.
    fn text(&self) -> &str;

    /// Replace the text. The selection is clamped to the new text.
    fn set_text(&mut self, text: &str);

    /// Length as grapheme count.
    fn len(&self) -> upos_type;

    /// No text.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Selection as ordered range.
    fn selection(&self) -> Range<upos_type>;

    /// Cursor position.
    fn cursor(&self) -> upos_type;

    /// Set the selection. The cursor is at the second position.
    fn set_selection(&mut self, anchor: upos_type, cursor: upos_type)
    -> Result<(), CurrencyError>;

    /// Set the cursor and clear the selection.
    fn set_cursor(&mut self, cursor: upos_type) -> Result<(), CurrencyError> {
        self.set_selection(cursor, cursor)
    }

    /// Apply a raw edit. Afterward the cursor is placed
    /// behind the inserted text.
    fn replace(&mut self, range: Range<upos_type>, text: &str) -> Result<(), CurrencyError>;
}
