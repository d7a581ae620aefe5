//! Tiled input: one logical text field split into single-letter cells
//!
//! The widget owns one [`Field`] per letter position and an explicit focus
//! cursor. `focus == None` means focus is outside every cell, in which case
//! keys are routed through the global capture rules (first empty cell, last
//! filled cell, and so on).
//!
//! Every operation returns an [`InputOutcome`]. Keys that make no sense in the
//! current position are `Ignored`; nothing here is an error.

use super::key::{Key, KeyPress};

/// Placeholder used for blank cells in assembled values
pub const BLANK: char = ' ';

/// A single named cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: Option<char>,
}

impl Field {
    fn new(index: usize) -> Self {
        Self {
            name: format!("tile-{}", index + 1),
            value: None,
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.value.is_none_or(|c| c == BLANK)
    }
}

/// What a key press did to the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// The assembled value changed; blanks are padded with [`BLANK`]
    Changed(String),
    /// Every cell was filled and Enter was pressed
    Submitted(String),
    /// Only the focus moved
    Moved,
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TiledInput {
    fields: Vec<Field>,
    focus: Option<usize>,
}

impl TiledInput {
    /// Create `length` empty cells with the first one focused
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            fields: (0..length).map(Field::new).collect(),
            focus: (length > 0).then_some(0),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Index of the focused cell, `None` when focus is outside the cells
    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focus
    }

    /// Assembled value, always exactly `len()` characters
    #[must_use]
    pub fn value(&self) -> String {
        self.fields
            .iter()
            .map(|f| f.value.unwrap_or(BLANK))
            .collect()
    }

    /// True when no blank cell remains
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.fields.is_empty() && self.fields.iter().all(|f| !f.is_blank())
    }

    /// Re-derive the cells from a parent-supplied value
    ///
    /// Extra characters are dropped and missing ones become blanks.
    pub fn set_value(&mut self, value: &str) {
        let mut chars = value.chars();
        for field in &mut self.fields {
            field.value = chars.next().filter(|&c| c != BLANK);
        }
    }

    /// Rebuild the cells for a new length, keeping what still fits
    pub fn set_length(&mut self, length: usize) {
        let value = self.value();
        self.fields = (0..length).map(Field::new).collect();
        self.set_value(&value);
        self.focus = match self.focus {
            _ if length == 0 => None,
            Some(i) => Some(i.min(length - 1)),
            None => None,
        };
    }

    /// Clear every cell and focus the first one
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value = None;
        }
        self.focus = (!self.fields.is_empty()).then_some(0);
    }

    /// Focus a specific cell (e.g. on mouse click); out of range is ignored
    pub fn focus(&mut self, index: usize) -> InputOutcome {
        if index < self.fields.len() && self.focus != Some(index) {
            self.focus = Some(index);
            InputOutcome::Moved
        } else {
            InputOutcome::Ignored
        }
    }

    /// Move focus outside all cells
    pub fn blur(&mut self) -> InputOutcome {
        if self.focus.take().is_some() {
            InputOutcome::Moved
        } else {
            InputOutcome::Ignored
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, press: impl Into<KeyPress>) -> InputOutcome {
        let press = press.into();
        if press.modified || self.fields.is_empty() {
            return InputOutcome::Ignored;
        }

        match self.focus {
            Some(index) => self.handle_cell_key(index, press.key),
            None => self.handle_global_key(press.key),
        }
    }

    /// Distribute pasted text across the cells starting at the focused one
    ///
    /// A pasted space blanks its cell. Control characters and anything
    /// outside printable ASCII are dropped. A paste with nothing usable leaves
    /// both the cells and the focus alone.
    pub fn paste(&mut self, text: &str) -> InputOutcome {
        let length = self.fields.len();
        if length == 0 {
            return InputOutcome::Ignored;
        }

        let start = self.focus.unwrap_or(0);
        let mut next = start;
        for c in text
            .chars()
            .filter(|&c| c == BLANK || is_printable(c))
            .take(length - start)
        {
            self.fields[next].value = Some(c).filter(|&c| c != BLANK);
            next += 1;
        }

        if next == start {
            return InputOutcome::Ignored;
        }

        self.focus = Some(next.min(length - 1));
        InputOutcome::Changed(self.value())
    }

    fn handle_cell_key(&mut self, index: usize, key: Key) -> InputOutcome {
        match key {
            Key::Char(c) if is_printable(c) => {
                // Same letter again: treat as "type it and move on"
                if self.fields[index].value == Some(c) {
                    return self.move_next(index);
                }
                self.fields[index].value = Some(c);
                self.move_next(index);
                InputOutcome::Changed(self.value())
            }
            Key::Backspace => {
                let had_value = self.fields[index].value.take().is_some();
                let moved = self.move_prev(index);
                if had_value {
                    InputOutcome::Changed(self.value())
                } else {
                    moved
                }
            }
            Key::Left => self.move_prev(index),
            Key::Right => self.move_next(index),
            Key::Enter => self.submit(),
            Key::Char(_) | Key::Other => InputOutcome::Ignored,
        }
    }

    fn handle_global_key(&mut self, key: Key) -> InputOutcome {
        match key {
            Key::Char(c) if is_printable(c) => {
                let Some(field) = self.fields.iter_mut().find(|f| f.is_blank()) else {
                    return InputOutcome::Ignored;
                };
                field.value = Some(c);
                InputOutcome::Changed(self.value())
            }
            Key::Enter => self.submit(),
            Key::Backspace => {
                let Some(last) = self.fields.iter().rposition(|f| !f.is_blank()) else {
                    return InputOutcome::Ignored;
                };
                self.fields[last].value = None;
                self.focus = Some(last);
                InputOutcome::Changed(self.value())
            }
            Key::Left => {
                self.focus = Some(self.fields.len() - 1);
                InputOutcome::Moved
            }
            Key::Right => {
                self.focus = Some(0);
                InputOutcome::Moved
            }
            Key::Char(_) | Key::Other => InputOutcome::Ignored,
        }
    }

    fn submit(&mut self) -> InputOutcome {
        if !self.is_complete() {
            return InputOutcome::Ignored;
        }
        if self.focus.is_some() {
            self.focus = Some(0);
        }
        InputOutcome::Submitted(self.value())
    }

    fn move_prev(&mut self, index: usize) -> InputOutcome {
        if index > 0 {
            self.focus = Some(index - 1);
            InputOutcome::Moved
        } else {
            InputOutcome::Ignored
        }
    }

    fn move_next(&mut self, index: usize) -> InputOutcome {
        if index + 1 < self.fields.len() {
            self.focus = Some(index + 1);
            InputOutcome::Moved
        } else {
            InputOutcome::Ignored
        }
    }
}

/// Printable ASCII, excluding the blank placeholder
fn is_printable(c: char) -> bool {
    c.is_ascii_graphic()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(text: &str) -> TiledInput {
        let mut input = TiledInput::new(text.chars().count());
        input.set_value(text);
        input
    }

    fn type_str(input: &mut TiledInput, text: &str) {
        for c in text.chars() {
            input.handle_key(Key::Char(c));
        }
    }

    #[test]
    fn mount_focuses_first_cell() {
        for length in 1..=10 {
            assert_eq!(TiledInput::new(length).focused(), Some(0));
        }
        assert_eq!(TiledInput::new(0).focused(), None);
    }

    #[test]
    fn field_names_follow_visual_order() {
        let input = TiledInput::new(3);
        let names: Vec<_> = input.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["tile-1", "tile-2", "tile-3"]);
    }

    #[test]
    fn typing_writes_and_advances() {
        let mut input = TiledInput::new(5);
        let outcome = input.handle_key(Key::Char('c'));

        assert_eq!(outcome, InputOutcome::Changed("c    ".to_string()));
        assert_eq!(input.focused(), Some(1));
    }

    #[test]
    fn typing_at_last_cell_stays_there() {
        let mut input = TiledInput::new(5);
        type_str(&mut input, "cranes");

        assert_eq!(input.focused(), Some(4));
        assert_eq!(input.value(), "crans");
    }

    #[test]
    fn typing_overwrites_instead_of_appending() {
        let mut input = filled("crane");
        input.focus(1);
        input.handle_key(Key::Char('l'));

        assert_eq!(input.value(), "clane");
        assert!(input.fields().iter().all(|f| f.value.is_some()));
    }

    #[test]
    fn same_letter_advances_without_change() {
        let mut input = filled("crane");
        input.focus(2);

        assert_eq!(input.handle_key(Key::Char('a')), InputOutcome::Moved);
        assert_eq!(input.focused(), Some(3));
        assert_eq!(input.value(), "crane");
    }

    #[test]
    fn backspace_clears_and_moves_back() {
        for i in 0..5 {
            let mut input = filled("crane");
            input.focus(i);
            input.handle_key(Key::Backspace);

            assert!(input.fields()[i].value.is_none());
            assert_eq!(input.focused(), Some(i.saturating_sub(1)));
        }
    }

    #[test]
    fn backspace_on_empty_first_cell_is_ignored() {
        let mut input = TiledInput::new(5);
        assert_eq!(input.handle_key(Key::Backspace), InputOutcome::Ignored);
        assert_eq!(input.focused(), Some(0));
    }

    #[test]
    fn arrows_move_without_touching_value() {
        let mut input = filled("crane");
        input.focus(2);

        assert_eq!(input.handle_key(Key::Left), InputOutcome::Moved);
        assert_eq!(input.focused(), Some(1));
        assert_eq!(input.handle_key(Key::Right), InputOutcome::Moved);
        assert_eq!(input.focused(), Some(2));
        assert_eq!(input.value(), "crane");
    }

    #[test]
    fn arrows_are_clamped() {
        let mut input = TiledInput::new(5);
        assert_eq!(input.handle_key(Key::Left), InputOutcome::Ignored);
        assert_eq!(input.focused(), Some(0));

        input.focus(4);
        assert_eq!(input.handle_key(Key::Right), InputOutcome::Ignored);
        assert_eq!(input.focused(), Some(4));
    }

    #[test]
    fn enter_submits_only_when_complete() {
        let mut input = filled("crane");
        input.focus(3);
        assert_eq!(
            input.handle_key(Key::Enter),
            InputOutcome::Submitted("crane".to_string())
        );
        assert_eq!(input.focused(), Some(0));

        let mut partial = TiledInput::new(5);
        partial.set_value("cran ");
        assert_eq!(partial.handle_key(Key::Enter), InputOutcome::Ignored);
    }

    #[test]
    fn paste_fills_from_focus() {
        let mut input = TiledInput::new(5);
        let outcome = input.paste("crane");

        assert_eq!(outcome, InputOutcome::Changed("crane".to_string()));
        assert_eq!(input.focused(), Some(4));
    }

    #[test]
    fn paste_mid_row_is_truncated() {
        let mut input = TiledInput::new(5);
        input.focus(3);
        input.paste("slate");

        assert_eq!(input.value(), "   sl");
        assert_eq!(input.focused(), Some(4));
    }

    #[test]
    fn short_paste_focuses_next_cell() {
        let mut input = TiledInput::new(5);
        input.focus(1);
        input.paste("ab\n");

        assert_eq!(input.value(), " ab  ");
        assert_eq!(input.focused(), Some(3));
    }

    #[test]
    fn pasted_space_blanks_its_cell() {
        let mut input = filled("crane");
        input.focus(1);
        let outcome = input.paste("l a");

        assert_eq!(outcome, InputOutcome::Changed("cl ae".to_string()));
        assert_eq!(input.focused(), Some(4));
    }

    #[test]
    fn empty_paste_keeps_focus() {
        let mut input = TiledInput::new(5);
        input.blur();
        assert_eq!(input.paste("\n"), InputOutcome::Ignored);
        assert_eq!(input.focused(), None);

        input.focus(2);
        assert_eq!(input.paste("é"), InputOutcome::Ignored);
        assert_eq!(input.focused(), Some(2));
        assert_eq!(input.value(), "     ");
    }

    #[test]
    fn modified_keys_are_ignored() {
        let mut input = TiledInput::new(5);
        assert_eq!(
            input.handle_key(KeyPress::modified(Key::Char('v'))),
            InputOutcome::Ignored
        );
        input.blur();
        assert_eq!(
            input.handle_key(KeyPress::modified(Key::Char('r'))),
            InputOutcome::Ignored
        );
        assert_eq!(input.value(), "     ");
    }

    #[test]
    fn global_typing_fills_first_empty_cell() {
        let mut input = TiledInput::new(5);
        input.set_value("c r  ");
        input.blur();

        input.handle_key(Key::Char('x'));
        assert_eq!(input.value(), "cxr  ");
        assert_eq!(input.focused(), None);
    }

    #[test]
    fn global_typing_when_full_is_ignored() {
        let mut input = filled("crane");
        input.blur();
        assert_eq!(input.handle_key(Key::Char('x')), InputOutcome::Ignored);
    }

    #[test]
    fn global_enter_submits_when_full() {
        let mut input = TiledInput::new(5);
        input.blur();
        type_str(&mut input, "cran");
        assert_eq!(input.handle_key(Key::Enter), InputOutcome::Ignored);

        input.handle_key(Key::Char('e'));
        assert_eq!(
            input.handle_key(Key::Enter),
            InputOutcome::Submitted("crane".to_string())
        );
    }

    #[test]
    fn global_backspace_clears_last_filled_and_focuses_it() {
        let mut input = TiledInput::new(5);
        input.set_value("cra  ");
        input.blur();

        input.handle_key(Key::Backspace);
        assert_eq!(input.value(), "cr   ");
        assert_eq!(input.focused(), Some(2));
    }

    #[test]
    fn global_arrows_enter_the_row() {
        let mut input = TiledInput::new(5);
        input.blur();
        input.handle_key(Key::Left);
        assert_eq!(input.focused(), Some(4));

        input.blur();
        input.handle_key(Key::Right);
        assert_eq!(input.focused(), Some(0));
    }

    #[test]
    fn set_length_keeps_values_and_clamps_focus() {
        let mut input = filled("crane");
        input.focus(4);
        input.set_length(3);

        assert_eq!(input.len(), 3);
        assert_eq!(input.value(), "cra");
        assert_eq!(input.focused(), Some(2));

        input.set_length(6);
        assert_eq!(input.value(), "cra   ");
    }

    #[test]
    fn reset_clears_and_refocuses() {
        let mut input = filled("crane");
        input.blur();
        input.reset();

        assert_eq!(input.value(), "     ");
        assert_eq!(input.focused(), Some(0));
    }

    #[test]
    fn non_printable_keys_are_ignored() {
        let mut input = TiledInput::new(5);
        assert_eq!(input.handle_key(Key::Char(' ')), InputOutcome::Ignored);
        assert_eq!(input.handle_key(Key::Char('é')), InputOutcome::Ignored);
        assert_eq!(input.handle_key(Key::Other), InputOutcome::Ignored);
        assert_eq!(input.focused(), Some(0));
    }
}
