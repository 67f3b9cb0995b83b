//! Whitespace and line-comment skipping.

use super::Tokenizer;

impl Tokenizer {
    /// Skips whitespace, then any line comment, repeating until neither is
    /// found.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            while !self.cursor.is_at_end() && self.cursor.current_char().is_whitespace() {
                self.cursor.advance();
            }
            if !self.skip_line_comment() {
                return;
            }
        }
    }

    /// If the comment prefix is next, skips to the end of the line and
    /// returns true.
    pub(crate) fn skip_line_comment(&mut self) -> bool {
        if !self.cursor.starts_with(self.comment_prefix()) {
            return false;
        }
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
        true
    }
}
