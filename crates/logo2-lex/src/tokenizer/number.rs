//! Numeric literal lexing.
//!
//! Two candidates are scanned from the same starting point, an integer
//! (decimal or `0x` hexadecimal) and a real (fraction and/or exponent),
//! and whichever consumed more characters wins. On a tie the literal is an
//! integer.

use logo2_util::Span;

use super::Tokenizer;
use crate::token::{Literal, Token, TokenKind};

/// Length in bytes of the longest integer literal at the start of `text`.
fn scan_integer(text: &str) -> usize {
    let bytes = text.as_bytes();
    if bytes.len() > 2
        && bytes[0] == b'0'
        && (bytes[1] == b'x' || bytes[1] == b'X')
        && bytes[2].is_ascii_hexdigit()
    {
        let digits = bytes[2..]
            .iter()
            .take_while(|b| b.is_ascii_hexdigit())
            .count();
        return 2 + digits;
    }
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Length in bytes of the longest real literal at the start of `text`.
fn scan_real(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return 0;
    }
    if bytes.get(len) == Some(&b'.') {
        len += 1;
        len += bytes[len..].iter().take_while(|b| b.is_ascii_digit()).count();
    }
    if let Some(&e) = bytes.get(len) {
        if e == b'e' || e == b'E' {
            let mut exp = len + 1;
            if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
                exp += 1;
            }
            let digits = bytes[exp..].iter().take_while(|b| b.is_ascii_digit()).count();
            if digits > 0 {
                len = exp + digits;
            }
        }
    }
    len
}

impl Tokenizer {
    /// Lexes an integer or real literal.
    pub(crate) fn lex_number(&mut self, span: Span) -> Token {
        let rest = self.cursor.remaining();
        let int_len = scan_integer(rest);
        let real_len = scan_real(rest);

        if real_len > int_len {
            let lexeme = rest[..real_len].to_string();
            self.cursor.advance_n(real_len);
            match lexeme.parse::<f64>() {
                Ok(value) => Token::with_value(TokenKind::Real, lexeme, span, Literal::Real(value)),
                Err(_) => Token::new(TokenKind::Error, "Invalid number", span),
            }
        } else {
            let lexeme = rest[..int_len].to_string();
            self.cursor.advance_n(int_len);
            let parsed = if let Some(hex) = lexeme.get(2..).filter(|_| {
                lexeme.starts_with("0x") || lexeme.starts_with("0X")
            }) {
                i64::from_str_radix(hex, 16)
            } else {
                lexeme.parse::<i64>()
            };
            match parsed {
                Ok(value) => {
                    Token::with_value(TokenKind::Integer, lexeme, span, Literal::Int(value))
                }
                Err(_) => Token::new(TokenKind::Error, "Invalid number", span),
            }
        }
    }
}
