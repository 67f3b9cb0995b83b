//! Parse error types.
//!
//! Fatal errors abort the expression (and parse) they occur in by
//! propagating as `Err`; recoverable errors are appended to the parser's
//! error list and parsing continues. Both shapes are the same
//! [`ParseError`], carrying the offending token and optional explanatory
//! text.

use std::error::Error;
use std::fmt;

use logo2_lex::Token;

/// Named parse error kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    Syntax,
    UnknownOperator,
    IdentifierExpected,
    MissingInitExpression,
    SemicolonExpected,
    AssignExpected,
    CommaExpected,
    CommaOrCloseParenExpected,
    DuplicateDefinition,
    UndefinedSymbol,
    CannotModifyConst,
    OpenParenExpected,
    CloseParenExpected,
    OpenBraceExpected,
    CloseBraceExpected,
    InvalidStatement,
    ConditionExpressionExpected,
    BreakContinueNoLoop,
    ExpressionOrVarExpected,
    IllegalExpression,
}

/// A parse error at a source location.
#[derive(Clone, Debug)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// The token the parser was looking at.
    pub token: Token,
    /// Optional explanatory text; the token's lexeme is shown otherwise.
    pub text: Option<String>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, token: Token) -> Self {
        Self {
            kind,
            token,
            text: None,
        }
    }

    pub fn with_text(kind: ParseErrorKind, token: Token, text: impl Into<String>) -> Self {
        Self {
            kind,
            token,
            text: Some(text.into()),
        }
    }
}

impl fmt::Display for ParseError {
    /// Renders as `Error <code> (<line>,<column>): <text>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error {:?} ({},{}): {}",
            self.kind,
            self.token.span.line,
            self.token.span.column,
            self.text.as_deref().unwrap_or(&self.token.lexeme)
        )
    }
}

impl Error for ParseError {}
