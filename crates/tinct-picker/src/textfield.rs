//! Raw text buffers behind the hex/RGBA/HSV/HSL fields.
//!
//! The buffer is decoupled from the validated color: whatever the user typed stays here
//! even when it does not parse, so keystrokes are never reverted mid-edit.

use std::ops::Range;

use unicode_segmentation::GraphemeCursor;

/// Grapheme boundary before `byte`, or 0.
fn boundary_before(text: &str, byte: usize) -> usize {
    GraphemeCursor::new(byte, text.len(), true)
        .prev_boundary(text, 0)
        .ok()
        .flatten()
        .unwrap_or(0)
}

/// Grapheme boundary after `byte`, or the end of `text`.
fn boundary_after(text: &str, byte: usize) -> usize {
    GraphemeCursor::new(byte, text.len(), true)
        .next_boundary(text, 0)
        .ok()
        .flatten()
        .unwrap_or(text.len())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldBuffer {
    pub text: String,
    /// Byte range; empty range is a caret.
    pub selection: Range<usize>,
}

impl FieldBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.len();
        Self {
            text,
            selection: end..end,
        }
    }

    /// Replaces the whole content, caret at the end.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        let end = self.text.len();
        self.selection = end..end;
    }

    pub fn select_all(&mut self) {
        self.selection = 0..self.text.len();
    }

    pub fn insert_text(&mut self, text: &str) {
        let span = self.span();
        let caret = span.start + text.len();
        self.text.replace_range(span, text);
        self.selection = caret..caret;
    }

    /// Ordered byte range of the selection, clamped to the text.
    fn span(&self) -> Range<usize> {
        let Range { start, end } = self.selection;
        let len = self.text.len();
        start.min(end).min(len)..start.max(end).min(len)
    }

    /// Removes the selection, or the grapheme before the caret.
    pub fn delete_backward(&mut self) {
        let mut span = self.span();
        if span.is_empty() {
            span.start = boundary_before(&self.text, span.end);
        }
        self.remove(span);
    }

    /// Removes the selection, or the grapheme after the caret.
    pub fn delete_forward(&mut self) {
        let mut span = self.span();
        if span.is_empty() {
            span.end = boundary_after(&self.text, span.start);
        }
        self.remove(span);
    }

    fn remove(&mut self, span: Range<usize>) {
        let at = span.start;
        self.text.replace_range(span, "");
        self.selection = at..at;
    }

    /// Moves the caret by `delta` graphemes; `extend` keeps the anchor in place.
    pub fn move_cursor(&mut self, delta: isize, extend: bool) {
        let step = if delta < 0 { boundary_before } else { boundary_after };
        let pos = (0..delta.unsigned_abs())
            .fold(self.selection.end.min(self.text.len()), |pos, _| step(&self.text, pos));
        let anchor = if extend { self.selection.start } else { pos };
        self.selection = anchor..pos;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEdit {
    Replace(String),
    Insert(String),
    DeleteBackward,
    DeleteForward,
    MoveCursor { delta: isize, extend: bool },
    SelectAll,
}

impl FieldBuffer {
    /// Applies `edit`; returns whether the text changed.
    pub fn apply(&mut self, edit: &FieldEdit) -> bool {
        let before = self.text.len();
        match edit {
            FieldEdit::Replace(t) => {
                let changed = self.text != *t;
                self.set_text(t);
                return changed;
            }
            FieldEdit::Insert(t) => {
                let had_selection = self.selection.start != self.selection.end;
                self.insert_text(t);
                return !t.is_empty() || had_selection;
            }
            FieldEdit::DeleteBackward => self.delete_backward(),
            FieldEdit::DeleteForward => self.delete_forward(),
            FieldEdit::MoveCursor { delta, extend } => {
                self.move_cursor(*delta, *extend);
                return false;
            }
            FieldEdit::SelectAll => {
                self.select_all();
                return false;
            }
        }
        self.text.len() != before
    }
}
