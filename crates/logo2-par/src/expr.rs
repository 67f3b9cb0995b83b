//! Expression parsing (Pratt / top-down operator precedence).
//!
//! The core loop parses one prefix-parsed left-hand side, then while the
//! peeked token's infix precedence strictly exceeds the minimum, consumes
//! the operator and dispatches to its infix parslet. Parslets are plain
//! function pointers paired with a precedence; both registries are open
//! via [`Parser::add_prefix_parslet`] / [`Parser::add_infix_parslet`].
//!
//! # Precedence (higher binds tighter)
//!
//! | Class | Precedence | Assoc |
//! |-------|-----------:|-------|
//! | Assignment (`=`, `+=`, ...) | 2 | right |
//! | Comparison (`== != < <= > >=`) | 90 | left |
//! | Additive (`+ -`) | 100 | left |
//! | Multiplicative (`* / %`) | 200 | left |
//! | Prefix (`- ! ~`) | 300 | - |
//! | Exponent (`**`) | 350 | right |
//! | Or / Xor (`\| ^`) | 390 | left |
//! | And (`&`) | 400 | left |
//! | Grouping (`( )`) | 1000 | - |
//! | Postfix (`++ --`) | 1100 | postfix |
//! | Invocation (`name(...)`) | 1200 | postfix |

use std::rc::Rc;

use logo2_lex::{Token, TokenKind};

use crate::ast::{
    AnonymousFnExpr, AssignExpr, BinaryExpr, Expr, IfExpr, InvokeExpr, PostfixExpr, UnaryExpr,
};
use crate::error::{ParseError, ParseErrorKind};
use crate::Parser;

/// Precedence levels.
pub mod prec {
    /// Start of an expression.
    pub const MIN: i32 = 0;
    /// `=`, `+=`, `-=`, ...
    pub const ASSIGNMENT: i32 = 2;
    /// `==`, `!=`, `<`, `<=`, `>`, `>=`
    pub const COMPARISON: i32 = 90;
    /// `+`, `-`
    pub const ADDITIVE: i32 = 100;
    /// `*`, `/`, `%`
    pub const MULTIPLICATIVE: i32 = 200;
    /// Unary prefix `-`, `!`, `~`
    pub const PREFIX: i32 = 300;
    /// `**`
    pub const POWER: i32 = 350;
    /// `|`, `^`
    pub const OR: i32 = 390;
    /// `&`
    pub const AND: i32 = 400;
    /// `( ... )`
    pub const GROUP: i32 = 1000;
    /// `++`, `--`
    pub const POSTFIX: i32 = 1100;
    /// `name(...)`
    pub const INVOKE: i32 = 1200;
    /// `fn(...) ...` as an expression
    pub const ANONYMOUS_FN: i32 = 2000;
}

/// A unit of prefix parsing logic for one token kind.
#[derive(Clone, Copy)]
pub struct PrefixParslet {
    pub precedence: i32,
    pub parse: fn(&mut Parser, Token) -> Result<Expr, ParseError>,
}

/// A unit of infix parsing logic for one token kind.
#[derive(Clone, Copy)]
pub struct InfixParslet {
    pub precedence: i32,
    pub right_assoc: bool,
    pub parse: fn(&mut Parser, Expr, Token) -> Result<Expr, ParseError>,
}

impl Parser {
    /// Parses a complete expression.
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_expression_prec(prec::MIN)
    }

    /// Parses an expression, consuming only operators whose precedence
    /// strictly exceeds `min_prec`.
    pub fn parse_expression_prec(&mut self, min_prec: i32) -> Result<Expr, ParseError> {
        let token = self.next();
        let Some(parslet) = self.prefix_parslet(token.kind) else {
            return Err(ParseError::new(ParseErrorKind::UnknownOperator, token));
        };
        let left = (parslet.parse)(self, token)?;
        self.continue_infix(left, min_prec)
    }

    /// The infix half of the Pratt loop, entered with an already-parsed
    /// left-hand side.
    pub(crate) fn continue_infix(&mut self, mut left: Expr, min_prec: i32) -> Result<Expr, ParseError> {
        while min_prec < self.peek_precedence() {
            let token = self.next();
            if token.is_invalid() {
                break;
            }
            if let Some(parslet) = self.infix_parslet(token.kind) {
                left = (parslet.parse)(self, left, token)?;
            }
        }
        Ok(left)
    }

    /// Infix precedence of the peeked token; 0 when it has no infix
    /// parslet.
    pub(crate) fn peek_precedence(&mut self) -> i32 {
        let token = self.peek();
        self.infix_parslet(token.kind)
            .map(|p| p.precedence)
            .unwrap_or(prec::MIN)
    }
}

// =============================================================================
// Prefix parslets
// =============================================================================

/// Literal tokens: integers, reals, strings, `true`, `false`, `null`.
pub(crate) fn parse_literal(_parser: &mut Parser, token: Token) -> Result<Expr, ParseError> {
    Ok(Expr::Literal(token))
}

/// A name, possibly qualified with `::`.
pub(crate) fn parse_name(parser: &mut Parser, token: Token) -> Result<Expr, ParseError> {
    let mut name = token.lexeme;
    while parser.peek().kind == TokenKind::ScopeRes {
        parser.next();
        let follow = parser.peek();
        if follow.kind != TokenKind::Identifier {
            parser.add_error(ParseError::with_text(
                ParseErrorKind::IdentifierExpected,
                follow,
                "Identifier expected after ::",
            ));
            break;
        }
        name.push_str("::");
        name.push_str(&parser.next().lexeme);
    }
    Ok(Expr::Name(name))
}

/// Unary prefix operators (`-`, `!`, `~`, `not`).
pub(crate) fn parse_prefix_operator(parser: &mut Parser, token: Token) -> Result<Expr, ParseError> {
    let precedence = parser
        .prefix_parslet(token.kind)
        .map(|p| p.precedence)
        .unwrap_or(prec::PREFIX);
    let operand = parser.parse_expression_prec(precedence)?;
    Ok(Expr::Unary(UnaryExpr {
        op: token,
        operand: Box::new(operand),
    }))
}

/// `( expression )`
pub(crate) fn parse_group(parser: &mut Parser, _token: Token) -> Result<Expr, ParseError> {
    let expr = parser.parse_expression()?;
    if !parser.match_kind(TokenKind::CloseParen) {
        let token = parser.peek();
        parser.add_error(ParseError::new(ParseErrorKind::CloseParenExpected, token));
    }
    Ok(expr)
}

/// `if COND { ... } (else { ... } | else if ...)?` as an expression.
pub(crate) fn parse_if(parser: &mut Parser, _token: Token) -> Result<Expr, ParseError> {
    let cond = parser.parse_expression()?;
    let then = Expr::Block(parser.parse_block(&[])?);
    let else_branch = if parser.match_kind(TokenKind::KeywordElse) {
        if parser.peek().kind == TokenKind::KeywordIf {
            let if_token = parser.next();
            Some(Box::new(parse_if(parser, if_token)?))
        } else {
            Some(Box::new(Expr::Block(parser.parse_block(&[])?)))
        }
    } else {
        None
    };
    Ok(Expr::If(IfExpr {
        cond: Box::new(cond),
        then: Box::new(then),
        else_branch,
    }))
}

/// `fn(a, b) { ... }` / `fn(a, b) => expr` as a first-class value.
pub(crate) fn parse_anonymous_fn(parser: &mut Parser, _token: Token) -> Result<Expr, ParseError> {
    if !parser.match_kind(TokenKind::OpenParen) {
        return Err(ParseError::new(
            ParseErrorKind::OpenParenExpected,
            parser.peek(),
        ));
    }
    let params = parser.parse_parameter_list()?;

    parser.push_function_scope(&params);
    let body = if parser.match_kind(TokenKind::GoesTo) {
        parser.parse_expression()
    } else {
        parser.parse_block(&[]).map(Expr::Block)
    };
    parser.pop_function_scope();

    Ok(Expr::AnonymousFn(AnonymousFnExpr {
        params,
        body: Rc::new(body?),
    }))
}

// =============================================================================
// Infix parslets
// =============================================================================

/// Binary operators; associativity comes from the registered parslet.
pub(crate) fn parse_binary_operator(
    parser: &mut Parser,
    left: Expr,
    token: Token,
) -> Result<Expr, ParseError> {
    let (precedence, right_assoc) = parser
        .infix_parslet(token.kind)
        .map(|p| (p.precedence, p.right_assoc))
        .unwrap_or((prec::MIN, false));
    let min = precedence - if right_assoc { 1 } else { 0 };
    let right = parser.parse_expression_prec(min)?;
    Ok(Expr::Binary(BinaryExpr {
        left: Box::new(left),
        op: token,
        right: Box::new(right),
    }))
}

/// `name = value` and the compound forms, which desugar to
/// `name = name op value`.
pub(crate) fn parse_assign(
    parser: &mut Parser,
    left: Expr,
    token: Token,
) -> Result<Expr, ParseError> {
    let value = parser.parse_expression_prec(prec::ASSIGNMENT - 1)?;

    let Expr::Name(name) = left else {
        return Err(ParseError::new(ParseErrorKind::IdentifierExpected, token));
    };
    match parser.find_symbol(&name, false) {
        None => {
            return Err(ParseError::with_text(
                ParseErrorKind::UndefinedSymbol,
                token,
                name,
            ))
        }
        Some(sym) if sym.is_const => {
            return Err(ParseError::with_text(
                ParseErrorKind::CannotModifyConst,
                token,
                name,
            ))
        }
        Some(_) => {}
    }

    let value = match compound_op(&token) {
        Some((kind, lexeme)) => {
            let op = Token::new(kind, lexeme, token.span);
            Expr::Binary(BinaryExpr {
                left: Box::new(Expr::Name(name.clone())),
                op,
                right: Box::new(value),
            })
        }
        None => value,
    };
    Ok(Expr::Assign(AssignExpr {
        name,
        value: Box::new(value),
    }))
}

/// Maps a compound-assignment token to the binary operator it applies.
fn compound_op(token: &Token) -> Option<(TokenKind, &'static str)> {
    match token.kind {
        TokenKind::AssignAdd => Some((TokenKind::Add, "+")),
        TokenKind::AssignSub => Some((TokenKind::Sub, "-")),
        TokenKind::AssignMul => Some((TokenKind::Mul, "*")),
        TokenKind::AssignDiv => Some((TokenKind::Div, "/")),
        TokenKind::AssignMod => Some((TokenKind::Mod, "%")),
        TokenKind::AssignPower => Some((TokenKind::Power, "**")),
        TokenKind::AssignAnd => Some((TokenKind::And, "&")),
        TokenKind::AssignOr => Some((TokenKind::Or, "|")),
        TokenKind::AssignXor => Some((TokenKind::Xor, "^")),
        _ => None,
    }
}

/// `name(arg, ...)`
pub(crate) fn parse_invoke(
    parser: &mut Parser,
    left: Expr,
    token: Token,
) -> Result<Expr, ParseError> {
    let Expr::Name(name) = left else {
        return Err(ParseError::new(ParseErrorKind::Syntax, token));
    };

    let mut args = Vec::new();
    while parser.peek().kind != TokenKind::CloseParen {
        args.push(parser.parse_expression()?);
        if !parser.match_kind(TokenKind::Comma) && parser.peek().kind != TokenKind::CloseParen {
            return Err(ParseError::new(ParseErrorKind::CommaExpected, parser.peek()));
        }
    }
    parser.next(); // eat close paren
    Ok(Expr::Invoke(InvokeExpr { name, args }))
}

/// Postfix `++` / `--` on a named variable.
pub(crate) fn parse_postfix_operator(
    parser: &mut Parser,
    left: Expr,
    token: Token,
) -> Result<Expr, ParseError> {
    let Expr::Name(ref name) = left else {
        return Err(ParseError::new(ParseErrorKind::IdentifierExpected, token));
    };
    match parser.find_symbol(name, false) {
        None => {
            return Err(ParseError::with_text(
                ParseErrorKind::UndefinedSymbol,
                token,
                name.clone(),
            ))
        }
        Some(sym) if sym.is_const => {
            return Err(ParseError::with_text(
                ParseErrorKind::CannotModifyConst,
                token,
                name.clone(),
            ))
        }
        Some(_) => {}
    }
    Ok(Expr::Postfix(PostfixExpr {
        op: token,
        operand: Box::new(left),
    }))
}
