//! Core tokenizer implementation.
//!
//! The [`Tokenizer`] owns the cursor and the vocabulary and dispatches to
//! the per-class lexing methods in the sibling modules.

use logo2_util::FxHashMap;

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

mod comment;
mod identifier;
mod number;
mod operator;
mod string;

/// Vocabulary-driven tokenizer for the Logo2 language.
///
/// The tokenizer is created empty; the parser installs keywords, operators,
/// and punctuation with [`Tokenizer::add_tokens`]. Source text is supplied
/// per run with [`Tokenizer::tokenize`], and tokens are pulled on demand
/// with [`Tokenizer::next`] / [`Tokenizer::peek`].
pub struct Tokenizer {
    /// Character cursor over the current source text.
    pub(crate) cursor: Cursor,

    /// Lexeme -> kind mapping for keywords, operators, and punctuation.
    vocabulary: FxHashMap<String, TokenKind>,

    /// Line-comment marker; the rest of the line is skipped when it is
    /// seen outside a string.
    comment_prefix: String,
}

impl Tokenizer {
    /// Creates a tokenizer with an empty vocabulary and no source text.
    pub fn new() -> Self {
        Self {
            cursor: Cursor::default(),
            vocabulary: FxHashMap::default(),
            comment_prefix: "//".to_string(),
        }
    }

    /// Supplies a new source string, starting at the given line number.
    ///
    /// The vocabulary is kept; only the cursor is reset. A REPL calls this
    /// once per input line with an increasing `line`.
    pub fn tokenize(&mut self, text: impl Into<String>, line: u32) {
        self.cursor = Cursor::new(text, line.max(1));
    }

    /// Replaces the line-comment marker (default `//`).
    pub fn set_comment_prefix(&mut self, prefix: impl Into<String>) {
        self.comment_prefix = prefix.into();
    }

    /// Installs a single lexeme -> kind mapping.
    ///
    /// Returns false if the lexeme was already present (the existing
    /// mapping wins).
    pub fn add_token(&mut self, lexeme: impl Into<String>, kind: TokenKind) -> bool {
        use std::collections::hash_map::Entry;
        match self.vocabulary.entry(lexeme.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(kind);
                true
            }
        }
    }

    /// Installs a batch of mappings; returns how many were newly added.
    pub fn add_tokens(&mut self, tokens: &[(&str, TokenKind)]) -> usize {
        tokens
            .iter()
            .filter(|(lexeme, kind)| self.add_token(*lexeme, *kind))
            .count()
    }

    /// Looks up a lexeme in the vocabulary.
    pub(crate) fn lookup(&self, lexeme: &str) -> Option<TokenKind> {
        self.vocabulary.get(lexeme).copied()
    }

    /// Returns the next token.
    ///
    /// At the end of the text an `Invalid` token is returned, which the
    /// parser treats as the end of the stream.
    pub fn next(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        let span = logo2_util::Span::new(self.cursor.line(), self.cursor.column());
        if self.cursor.is_at_end() {
            return Token::invalid(span);
        }

        let ch = self.cursor.current_char();
        if ch.is_alphabetic() || ch == '_' || ch == '$' {
            return self.lex_identifier(span);
        }
        if ch.is_ascii_digit() {
            return self.lex_number(span);
        }
        if ch == '"' {
            return self.lex_string(span);
        }
        self.lex_operator(span)
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Token {
        let snapshot = self.cursor.snapshot();
        let token = self.next();
        self.cursor.restore(snapshot);
        token
    }

    /// Returns the configured comment prefix.
    pub(crate) fn comment_prefix(&self) -> &str {
        &self.comment_prefix
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
