use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    /// Key consumed, text unchanged (cursor movement or ignored key).
    Continue,
    /// Text was edited; live filtering should rerun.
    Changed,
    Submit,
    Cancel,
}

/// Single-line editor used for the search box.
pub struct LineInput {
    text: String,
    /// Cursor position as a char index (0 = before first char).
    cursor: usize,
    /// Text when editing started, restored on cancel.
    initial: String,
}

impl LineInput {
    pub fn new(text: &str) -> Self {
        let cursor = text.chars().count();
        Self {
            text: text.to_string(),
            cursor,
            initial: text.to_string(),
        }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Returns (before_cursor, cursor_char, after_cursor) for styled rendering.
    /// When cursor is at end of text, cursor_char is None.
    pub fn render_parts(&self) -> (&str, Option<char>, &str) {
        let byte_offset = self.char_to_byte(self.cursor);
        match self.text[byte_offset..].chars().next() {
            None => (&self.text, None, ""),
            Some(ch) => {
                let next_byte = byte_offset + ch.len_utf8();
                (&self.text[..byte_offset], Some(ch), &self.text[next_byte..])
            }
        }
    }

    pub fn handle(&mut self, key: KeyEvent) -> InputResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => InputResult::Cancel,
            KeyCode::Enter => InputResult::Submit,

            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                InputResult::Continue
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.len());
                InputResult::Continue
            }
            KeyCode::Home => {
                self.cursor = 0;
                InputResult::Continue
            }
            KeyCode::End => {
                self.cursor = self.len();
                InputResult::Continue
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return InputResult::Continue;
                }
                self.remove_char_at(self.cursor - 1);
                self.cursor -= 1;
                InputResult::Changed
            }
            KeyCode::Delete => {
                if self.cursor >= self.len() {
                    return InputResult::Continue;
                }
                self.remove_char_at(self.cursor);
                InputResult::Changed
            }
            KeyCode::Char('a') if ctrl => {
                self.cursor = 0;
                InputResult::Continue
            }
            KeyCode::Char('e') if ctrl => {
                self.cursor = self.len();
                InputResult::Continue
            }
            KeyCode::Char('u') if ctrl => {
                if self.text.is_empty() {
                    return InputResult::Continue;
                }
                self.text.clear();
                self.cursor = 0;
                InputResult::Changed
            }
            KeyCode::Char('w') if ctrl => {
                if self.delete_word_back() {
                    InputResult::Changed
                } else {
                    InputResult::Continue
                }
            }
            KeyCode::Char(ch) if !ctrl => {
                let byte_offset = self.char_to_byte(self.cursor);
                self.text.insert(byte_offset, ch);
                self.cursor += 1;
                InputResult::Changed
            }
            _ => InputResult::Continue,
        }
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Convert char index to byte offset.
    fn char_to_byte(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    fn remove_char_at(&mut self, char_idx: usize) {
        let start = self.char_to_byte(char_idx);
        let end = self.char_to_byte(char_idx + 1);
        self.text.replace_range(start..end, "");
    }

    /// Delete word before cursor (unix-word-rubout: skip whitespace, then non-whitespace).
    fn delete_word_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = self.cursor;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }

        let start_byte = self.char_to_byte(pos);
        let end_byte = self.char_to_byte(self.cursor);
        self.text.replace_range(start_byte..end_byte, "");
        self.cursor = pos;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn typing_reports_changes() {
        let mut input = LineInput::new("");
        assert_eq!(input.handle(key(KeyCode::Char('k'))), InputResult::Changed);
        assert_eq!(input.handle(key(KeyCode::Char('a'))), InputResult::Changed);
        assert_eq!(input.value(), "ka");
        assert_eq!(input.handle(key(KeyCode::Left)), InputResult::Continue);
        assert_eq!(input.handle(key(KeyCode::Enter)), InputResult::Submit);
    }

    #[test]
    fn insert_multibyte_in_middle() {
        let mut input = LineInput::new("かさ");
        input.handle(key(KeyCode::Left));
        input.handle(key(KeyCode::Char('ん')));
        assert_eq!(input.value(), "かんさ");
        assert_eq!(input.cursor, 2);
        let (before, at, after) = input.render_parts();
        assert_eq!((before, at, after), ("かん", Some('さ'), ""));
    }

    #[test]
    fn backspace_and_delete_at_boundaries() {
        let mut input = LineInput::new("ab");
        assert_eq!(input.handle(key(KeyCode::Delete)), InputResult::Continue);
        input.handle(key(KeyCode::Backspace));
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "");
        assert_eq!(input.handle(key(KeyCode::Backspace)), InputResult::Continue);
        assert_eq!(input.cursor, 0);

        let mut input = LineInput::new("ab");
        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Delete));
        assert_eq!(input.value(), "b");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn ctrl_w_word_delete() {
        let mut input = LineInput::new("foo bar  ");
        input.handle(ctrl('w'));
        assert_eq!(input.value(), "foo ");

        let mut empty = LineInput::new("");
        assert_eq!(empty.handle(ctrl('w')), InputResult::Continue);
    }

    #[test]
    fn ctrl_u_clears_and_ctrl_a_e_move() {
        let mut input = LineInput::new("hello");
        input.handle(ctrl('a'));
        assert_eq!(input.cursor, 0);
        input.handle(ctrl('e'));
        assert_eq!(input.cursor, 5);
        assert_eq!(input.handle(ctrl('u')), InputResult::Changed);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn cancel_keeps_initial_snapshot() {
        let mut input = LineInput::new("tori");
        input.handle(key(KeyCode::Char('x')));
        assert_eq!(input.handle(key(KeyCode::Esc)), InputResult::Cancel);
        assert_eq!(input.initial(), "tori");
    }
}
