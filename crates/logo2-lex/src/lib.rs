//! logo2-lex - Lexical Analyzer (Tokenizer)
//!
//! The tokenizer turns a source string into a stream of [`Token`]s on
//! demand. Unlike a fixed-alphabet lexer, the operator and keyword
//! vocabulary is *open*: the parser installs the lexeme -> kind mapping at
//! startup via [`Tokenizer::add_tokens`], and the tokenizer only recognizes
//! identifiers, numbers, and strings structurally.
//!
//! # Classification
//!
//! After skipping whitespace and line comments (prefix configurable,
//! default `//`):
//!
//! - **Identifier**: a leading letter, `_`, or `$`, continued by anything
//!   that is neither whitespace nor punctuation. Looked up in the
//!   vocabulary so keywords come back with their keyword kind.
//! - **Number**: both an integer candidate (decimal or `0x` hex) and a
//!   real candidate (fraction/exponent) are scanned; whichever consumed
//!   more characters wins. The token carries its parsed [`Literal`].
//! - **String**: `"`-delimited; a line break before the closing quote
//!   yields an `Error` token.
//! - **Operator**: the longest run of punctuation is consumed, then
//!   shortened from the right until the vocabulary matches (rewinding the
//!   cursor). `(` and `)` never merge with neighboring punctuation.
//!
//! # Example
//!
//! ```
//! use logo2_lex::{Tokenizer, TokenKind};
//!
//! let mut t = Tokenizer::new();
//! t.add_token("+", TokenKind::Add);
//! t.add_token("var", TokenKind::KeywordVar);
//! t.tokenize("var x", 1);
//!
//! assert_eq!(t.next().kind, TokenKind::KeywordVar);
//! assert_eq!(t.peek().kind, TokenKind::Identifier);
//! assert_eq!(t.next().lexeme, "x");
//! ```

pub mod cursor;
pub mod token;
mod tokenizer;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use token::{Literal, Token, TokenKind};
pub use tokenizer::Tokenizer;
