//! Character cursor for traversing source text.
//!
//! The cursor owns the source string (the tokenizer is re-fed a new string
//! for every REPL line) and maintains byte position plus line/column
//! information for error reporting.

/// A cursor for traversing source text character by character.
///
/// Handles UTF-8 correctly and tracks 1-based line/column numbers. The
/// starting line is configurable so a REPL can keep numbering across
/// inputs.
///
/// # Example
///
/// ```
/// use logo2_lex::Cursor;
///
/// let mut cursor = Cursor::new("var x = 42;", 1);
/// assert_eq!(cursor.current_char(), 'v');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'a');
/// ```
#[derive(Debug)]
pub struct Cursor {
    /// The source text being traversed.
    text: String,

    /// Current byte position in the text.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl Cursor {
    /// Creates a new cursor over the given text, starting at `line`.
    pub fn new(text: impl Into<String>, line: u32) -> Self {
        Self {
            text: text.into(),
            position: 0,
            line,
            column: 1,
        }
    }

    /// Returns the current character, or `'\0'` at the end of the text.
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character at the given byte offset from the current
    /// position, or `'\0'` past the end.
    #[inline]
    pub fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.text.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.text.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }
        self.text[pos..].chars().next().unwrap_or('\0')
    }

    /// Returns true if the remaining text starts with `prefix`.
    ///
    /// Used to spot the line-comment marker mid-token.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.text[self.position..].starts_with(prefix)
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.text.len() {
            return;
        }

        // Fast path for ASCII (most common)
        let b = self.text.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            return;
        }

        if let Some(c) = self.text[self.position..].chars().next() {
            self.position += c.len_utf8();
            self.column += 1;
        }
    }

    /// Advances the cursor by the given number of characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the text.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.text.len()
    }

    /// Matches and consumes the expected character if present.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the text from the given start position to the current
    /// position.
    pub fn slice_from(&self, start: usize) -> &str {
        &self.text[start..self.position]
    }

    /// Returns the text from the current position to the end.
    pub fn remaining(&self) -> &str {
        &self.text[self.position..]
    }

    /// Creates a snapshot of the current cursor state.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new("", 1)
    }
}

/// A snapshot of cursor state that can be restored later.
///
/// Backs the tokenizer's non-consuming `peek`.
#[derive(Clone, Copy, Debug)]
pub struct CursorSnapshot {
    position: usize,
    line: u32,
    column: u32,
}
