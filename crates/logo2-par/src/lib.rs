//! logo2-par - Parser (Syntactic Analyzer)
//!
//! A Pratt (top-down operator-precedence) parser producing the AST in
//! [`ast`]. The grammar is data, not code: the parser installs the token
//! vocabulary into the tokenizer and fills two parslet registries (prefix
//! and infix) keyed by token kind, so adding an operator is a registration,
//! not a new grammar production.
//!
//! Alongside parsing, a stack of symbol tables mirrors the block structure
//! and checks declarations: duplicate definitions, assignment to undefined
//! or `const` names, and `break`/`continue` outside a loop are parse
//! errors. Fatal errors abort the parse as `Err`; recoverable ones collect
//! in [`Parser::errors`] and parsing continues.
//!
//! # Example
//!
//! ```
//! use logo2_par::Parser;
//!
//! let mut parser = Parser::new();
//! let program = parser.parse("var a = 2 * 3; a + 4").unwrap();
//! assert!(!parser.has_errors());
//! assert_eq!(program.stmts.len(), 2);
//! ```

pub mod ast;
mod error;
mod expr;
mod stmt;
mod symbol;

#[cfg(test)]
mod edge_cases;

pub use error::{ParseError, ParseErrorKind};
pub use expr::{prec, InfixParslet, PrefixParslet};
pub use symbol::{ScopeStack, Symbol, SymbolKind, SymbolTable};

use std::io;
use std::path::Path;

use logo2_lex::{Token, TokenKind, Tokenizer};
use logo2_util::FxHashMap;

use ast::Statements;

/// The Logo2 parser.
///
/// Owns the tokenizer (and installs its vocabulary), the parslet
/// registries, the compile-time scope stack, and the recoverable-error
/// list. The scope stack persists across [`Parser::parse`] calls so a REPL
/// session accumulates declarations; the error list resets per call.
pub struct Parser {
    tokenizer: Tokenizer,
    prefix: FxHashMap<TokenKind, PrefixParslet>,
    infix: FxHashMap<TokenKind, InfixParslet>,
    errors: Vec<ParseError>,
    scopes: ScopeStack,
    loop_depth: u32,
}

impl Parser {
    /// Creates a parser with the full Logo2 vocabulary and parslet set
    /// installed.
    pub fn new() -> Self {
        let mut parser = Self {
            tokenizer: Tokenizer::new(),
            prefix: FxHashMap::default(),
            infix: FxHashMap::default(),
            errors: Vec::new(),
            scopes: ScopeStack::new(),
            loop_depth: 0,
        };
        parser.install_vocabulary();
        parser.install_parslets();
        parser
    }

    /// Parses a source string into a program, starting at line 1.
    pub fn parse(&mut self, text: &str) -> Result<Statements, ParseError> {
        self.parse_with_line(text, 1)
    }

    /// Parses a source string whose first line has the given number (a
    /// REPL passes its running line count).
    pub fn parse_with_line(&mut self, text: &str, line: u32) -> Result<Statements, ParseError> {
        self.tokenizer.tokenize(text, line);
        self.errors.clear();
        self.loop_depth = 0;
        self.scopes.truncate(1);

        let mut stmts = Vec::new();
        loop {
            match self.parse_statement() {
                Ok(Some(stmt)) => stmts.push(stmt),
                Ok(None) => break,
                Err(err) => return Err(err),
            }
        }
        Ok(Statements { stmts })
    }

    /// Tokenizes a source string to completion without parsing, using the
    /// installed vocabulary. Backs the driver's token dump.
    pub fn tokenize_all(&mut self, text: &str) -> Vec<Token> {
        self.tokenizer.tokenize(text, 1);
        let mut tokens = Vec::new();
        loop {
            let token = self.tokenizer.next();
            if token.is_invalid() && token.lexeme.is_empty() {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    /// Reads and parses a file. I/O failures surface as the outer error.
    pub fn parse_file(
        &mut self,
        path: impl AsRef<Path>,
    ) -> io::Result<Result<Statements, ParseError>> {
        let text = std::fs::read_to_string(path)?;
        Ok(self.parse(&text))
    }

    // =========================================================================
    // Errors
    // =========================================================================

    /// Records a recoverable error and keeps parsing.
    pub fn add_error(&mut self, err: ParseError) {
        self.errors.push(err);
    }

    /// Records a recoverable error at the peeked token.
    pub(crate) fn error_at_peek(&mut self, kind: ParseErrorKind) {
        let token = self.peek();
        self.add_error(ParseError::new(kind, token));
    }

    /// True if the last parse recorded recoverable errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The recoverable errors of the last parse.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    // =========================================================================
    // Parslet registration
    // =========================================================================

    /// Registers a prefix parslet; returns false if the kind already has
    /// one.
    pub fn add_prefix_parslet(&mut self, kind: TokenKind, parslet: PrefixParslet) -> bool {
        use std::collections::hash_map::Entry;
        match self.prefix.entry(kind) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(parslet);
                true
            }
        }
    }

    /// Registers an infix parslet; returns false if the kind already has
    /// one.
    pub fn add_infix_parslet(&mut self, kind: TokenKind, parslet: InfixParslet) -> bool {
        use std::collections::hash_map::Entry;
        match self.infix.entry(kind) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(parslet);
                true
            }
        }
    }

    pub(crate) fn prefix_parslet(&self, kind: TokenKind) -> Option<PrefixParslet> {
        self.prefix.get(&kind).copied()
    }

    pub(crate) fn infix_parslet(&self, kind: TokenKind) -> Option<InfixParslet> {
        self.infix.get(&kind).copied()
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    pub(crate) fn next(&mut self) -> Token {
        self.tokenizer.next()
    }

    pub(crate) fn peek(&mut self) -> Token {
        self.tokenizer.peek()
    }

    /// Consumes the next token if it has the given kind.
    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.next();
            true
        } else {
            false
        }
    }

    /// Skips tokens up to and including the given kind; false if the
    /// stream ended first.
    pub(crate) fn skip_to(&mut self, kind: TokenKind) -> bool {
        loop {
            let token = self.next();
            if token.kind == kind {
                return true;
            }
            if token.is_invalid() {
                return false;
            }
        }
    }

    // =========================================================================
    // Scopes and loop depth
    // =========================================================================

    pub(crate) fn push_scope(&mut self) {
        self.scopes.push();
    }

    pub(crate) fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    /// Installs function arguments as symbols in the current scope.
    pub(crate) fn install_arguments(&mut self, args: &[String]) {
        for arg in args {
            self.scopes
                .add_symbol(Symbol::new(arg.clone(), SymbolKind::Argument));
        }
    }

    /// Scope entry for an anonymous-function body, which also admits
    /// `break`/`continue` like a loop body does.
    pub(crate) fn push_function_scope(&mut self, params: &[String]) {
        self.push_scope();
        self.install_arguments(params);
        self.loop_depth += 1;
    }

    pub(crate) fn pop_function_scope(&mut self) {
        self.loop_depth -= 1;
        self.pop_scope();
    }

    pub(crate) fn enter_loop(&mut self) {
        self.loop_depth += 1;
    }

    pub(crate) fn exit_loop(&mut self) {
        self.loop_depth -= 1;
    }

    pub(crate) fn loop_depth(&self) -> u32 {
        self.loop_depth
    }

    /// Installs a symbol in the current scope; false on duplicate.
    pub fn add_symbol(&mut self, sym: Symbol) -> bool {
        self.scopes.add_symbol(sym)
    }

    /// Looks a name up through the scope chain (or only the innermost
    /// scope when `local_only`).
    pub fn find_symbol(&self, name: &str, local_only: bool) -> Option<&Symbol> {
        self.scopes.find(name, local_only)
    }

    // =========================================================================
    // Installation
    // =========================================================================

    /// Installs the Logo2 token vocabulary into the tokenizer.
    fn install_vocabulary(&mut self) {
        use TokenKind::*;
        self.tokenizer.add_tokens(&[
            ("+", Add),
            ("-", Sub),
            ("*", Mul),
            ("/", Div),
            ("%", Mod),
            ("**", Power),
            ("&", And),
            ("|", Or),
            ("^", Xor),
            ("!", Not),
            ("~", Complement),
            ("++", Increment),
            ("--", Decrement),
            ("+=", AssignAdd),
            ("-=", AssignSub),
            ("*=", AssignMul),
            ("/=", AssignDiv),
            ("%=", AssignMod),
            ("**=", AssignPower),
            ("&=", AssignAnd),
            ("|=", AssignOr),
            ("^=", AssignXor),
            ("==", Equal),
            ("!=", NotEqual),
            ("<", LessThan),
            (">", GreaterThan),
            ("<=", LessThanOrEqual),
            (">=", GreaterThanOrEqual),
            ("(", OpenParen),
            (")", CloseParen),
            ("=", Assign),
            ("{", OpenBrace),
            ("}", CloseBrace),
            ("[", OpenBracket),
            ("]", CloseBracket),
            (";", SemiColon),
            (",", Comma),
            (".", Dot),
            ("::", ScopeRes),
            ("=>", GoesTo),
            ("null", KeywordNull),
            ("true", KeywordTrue),
            ("false", KeywordFalse),
            ("var", KeywordVar),
            ("const", KeywordConst),
            ("if", KeywordIf),
            ("else", KeywordElse),
            ("repeat", KeywordRepeat),
            ("while", KeywordWhile),
            ("break", KeywordBreak),
            ("breakout", KeywordBreakOut),
            ("continue", KeywordContinue),
            ("for", KeywordFor),
            ("foreach", KeywordForEach),
            ("do", KeywordDo),
            ("fn", KeywordFn),
            ("return", KeywordReturn),
            ("enum", KeywordEnum),
            ("and", KeywordAnd),
            ("or", KeywordOr),
            ("not", KeywordNot),
        ]);
    }

    /// Registers the default parslet set.
    fn install_parslets(&mut self) {
        use TokenKind::*;

        let literal = |p: &mut Self, kind| {
            p.add_prefix_parslet(
                kind,
                PrefixParslet {
                    precedence: prec::MIN,
                    parse: expr::parse_literal,
                },
            );
        };
        literal(self, Integer);
        literal(self, Real);
        literal(self, String);
        literal(self, KeywordTrue);
        literal(self, KeywordFalse);
        literal(self, KeywordNull);

        self.add_prefix_parslet(
            Identifier,
            PrefixParslet {
                precedence: prec::MIN,
                parse: expr::parse_name,
            },
        );
        self.add_prefix_parslet(
            OpenParen,
            PrefixParslet {
                precedence: prec::GROUP,
                parse: expr::parse_group,
            },
        );
        self.add_prefix_parslet(
            KeywordIf,
            PrefixParslet {
                precedence: prec::MIN,
                parse: expr::parse_if,
            },
        );
        self.add_prefix_parslet(
            KeywordFn,
            PrefixParslet {
                precedence: prec::ANONYMOUS_FN,
                parse: expr::parse_anonymous_fn,
            },
        );

        let prefix_op = |p: &mut Self, kind| {
            p.add_prefix_parslet(
                kind,
                PrefixParslet {
                    precedence: prec::PREFIX,
                    parse: expr::parse_prefix_operator,
                },
            );
        };
        prefix_op(self, Sub);
        prefix_op(self, Not);
        prefix_op(self, Complement);
        prefix_op(self, KeywordNot);

        let binary = |p: &mut Self, kind, precedence, right_assoc| {
            p.add_infix_parslet(
                kind,
                InfixParslet {
                    precedence,
                    right_assoc,
                    parse: expr::parse_binary_operator,
                },
            );
        };
        binary(self, Add, prec::ADDITIVE, false);
        binary(self, Sub, prec::ADDITIVE, false);
        binary(self, Mul, prec::MULTIPLICATIVE, false);
        binary(self, Div, prec::MULTIPLICATIVE, false);
        binary(self, Mod, prec::MULTIPLICATIVE, false);
        binary(self, Power, prec::POWER, true);
        binary(self, And, prec::AND, false);
        binary(self, KeywordAnd, prec::AND, false);
        binary(self, Or, prec::OR, false);
        binary(self, KeywordOr, prec::OR, false);
        binary(self, Xor, prec::OR, false);
        binary(self, Equal, prec::COMPARISON, false);
        binary(self, NotEqual, prec::COMPARISON, false);
        binary(self, LessThan, prec::COMPARISON, false);
        binary(self, LessThanOrEqual, prec::COMPARISON, false);
        binary(self, GreaterThan, prec::COMPARISON, false);
        binary(self, GreaterThanOrEqual, prec::COMPARISON, false);

        let assign = |p: &mut Self, kind| {
            p.add_infix_parslet(
                kind,
                InfixParslet {
                    precedence: prec::ASSIGNMENT,
                    right_assoc: true,
                    parse: expr::parse_assign,
                },
            );
        };
        assign(self, Assign);
        assign(self, AssignAdd);
        assign(self, AssignSub);
        assign(self, AssignMul);
        assign(self, AssignDiv);
        assign(self, AssignMod);
        assign(self, AssignPower);
        assign(self, AssignAnd);
        assign(self, AssignOr);
        assign(self, AssignXor);

        self.add_infix_parslet(
            OpenParen,
            InfixParslet {
                precedence: prec::INVOKE,
                right_assoc: false,
                parse: expr::parse_invoke,
            },
        );

        let postfix = |p: &mut Self, kind| {
            p.add_infix_parslet(
                kind,
                InfixParslet {
                    precedence: prec::POSTFIX,
                    right_assoc: false,
                    parse: expr::parse_postfix_operator,
                },
            );
        };
        postfix(self, Increment);
        postfix(self, Decrement);
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
