/// Pushback-capable character cursor over a decoded document.
///
/// Supports "read one, put it back" as required by the lexer and the tree
/// builder. Pushback is last-in-first-out and restores the character that
/// was just read; the cursor never re-decodes or re-buffers.
#[derive(Debug)]
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    /// Reads the next character, or `None` at end of input.
    pub fn read(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        Some(c)
    }

    /// Puts the most recently read character back.
    pub fn unread(&mut self) {
        debug_assert!(self.pos > 0, "unread before any read");
        self.pos = self.pos.saturating_sub(1);
    }

    /// Looks at the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}
