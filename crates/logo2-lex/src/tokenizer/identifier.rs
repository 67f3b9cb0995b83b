//! Identifier and keyword lexing.

use logo2_util::Span;

use super::Tokenizer;
use crate::token::{Literal, Token, TokenKind};

impl Tokenizer {
    /// Lexes an identifier or, if the lexeme is in the vocabulary, a
    /// keyword.
    ///
    /// Continuation characters are anything that is neither whitespace nor
    /// punctuation; a comment marker terminates the identifier and the rest
    /// of the line.
    pub(crate) fn lex_identifier(&mut self, span: Span) -> Token {
        let start = self.cursor.position();
        while !self.cursor.is_at_end() {
            if self.skip_line_comment() {
                break;
            }
            let ch = self.cursor.current_char();
            if ch.is_whitespace() || ch.is_ascii_punctuation() {
                break;
            }
            self.cursor.advance();
        }
        let lexeme = self.cursor.slice_from(start).to_string();
        debug_assert!(!lexeme.is_empty());

        match self.lookup(&lexeme) {
            Some(TokenKind::KeywordTrue) => {
                Token::with_value(TokenKind::KeywordTrue, lexeme, span, Literal::Bool(true))
            }
            Some(TokenKind::KeywordFalse) => {
                Token::with_value(TokenKind::KeywordFalse, lexeme, span, Literal::Bool(false))
            }
            Some(kind) => Token::new(kind, lexeme, span),
            None => Token::new(TokenKind::Identifier, lexeme, span),
        }
    }
}
