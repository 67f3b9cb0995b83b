//! Operator and punctuation lexing.
//!
//! Operators are open-ended: the tokenizer greedily consumes a run of
//! punctuation, then shortens it from the right until the vocabulary
//! matches, rewinding the cursor over the unused tail. This gives longest
//! match without hard-coding the operator set.

use logo2_util::Span;

use super::Tokenizer;
use crate::token::{Token, TokenKind};

impl Tokenizer {
    /// Lexes an operator or punctuation token.
    ///
    /// `(` and `)` are never merged with neighboring punctuation, so `)(`
    /// or `-(` always split. If no prefix of the consumed run is in the
    /// vocabulary, an `Invalid` token carrying the run is returned.
    pub(crate) fn lex_operator(&mut self, span: Span) -> Token {
        let snapshot = self.cursor.snapshot();
        let start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() {
                break;
            }
            let ch = self.cursor.current_char();
            if !ch.is_ascii_punctuation() {
                break;
            }
            // parens stay single-character tokens
            if self.cursor.position() > start && (ch == '(' || ch == ')') {
                break;
            }
            self.cursor.advance();
            if ch == '(' || ch == ')' {
                break;
            }
        }

        let full = self.cursor.slice_from(start).to_string();
        if full.is_empty() {
            // not punctuation at all (e.g. a stray symbol character)
            self.cursor.advance();
            return Token::invalid(span);
        }

        let mut lexeme = full.clone();
        while !lexeme.is_empty() {
            if let Some(kind) = self.lookup(&lexeme) {
                self.cursor.restore(snapshot);
                self.cursor.advance_n(lexeme.len());
                return Token::new(kind, lexeme, span);
            }
            lexeme.pop();
        }

        Token::new(TokenKind::Invalid, full, span)
    }
}
