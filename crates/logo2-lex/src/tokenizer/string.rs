//! String literal lexing.

use logo2_util::Span;

use super::Tokenizer;
use crate::token::{Token, TokenKind};

impl Tokenizer {
    /// Lexes a `"`-delimited string literal.
    ///
    /// The token's lexeme is the contents without the quotes. A line break
    /// (or the end of input) before the closing quote yields an `Error`
    /// token.
    pub(crate) fn lex_string(&mut self, span: Span) -> Token {
        self.cursor.advance(); // opening quote
        let start = self.cursor.position();
        loop {
            if self.cursor.is_at_end() || self.cursor.current_char() == '\n' {
                return Token::new(TokenKind::Error, "Missing closing quote", span);
            }
            if self.cursor.current_char() == '"' {
                break;
            }
            self.cursor.advance();
        }
        let lexeme = self.cursor.slice_from(start).to_string();
        self.cursor.advance(); // closing quote
        Token::new(TokenKind::String, lexeme, span)
    }
}
