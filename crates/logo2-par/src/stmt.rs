//! Statement parsing.
//!
//! Statements dispatch on one token of lookahead. Declarations install
//! symbols as they parse so duplicate definitions, assignments to
//! undefined names, and const violations surface at parse time.

use std::rc::Rc;

use indexmap::IndexMap;
use logo2_lex::{Literal, Token, TokenKind};
use logo2_util::Span;

use crate::ast::{
    BlockExpr, EnumDecl, Expr, ForStmt, FunctionDecl, RepeatStmt, Stmt, VarStmt, WhileStmt,
};
use crate::error::{ParseError, ParseErrorKind};
use crate::symbol::{Symbol, SymbolKind};
use crate::Parser;

impl Parser {
    /// Parses one statement; `None` marks the end of the token stream.
    pub fn parse_statement(&mut self) -> Result<Option<Stmt>, ParseError> {
        let peek = self.peek();
        if peek.is_invalid() {
            // an empty lexeme is the end of input; anything else is an
            // operator the vocabulary does not know
            if peek.lexeme.is_empty() {
                return Ok(None);
            }
            let token = self.next();
            return Err(ParseError::new(ParseErrorKind::UnknownOperator, token));
        }

        match peek.kind {
            TokenKind::KeywordVar => self.parse_var_const(false).map(Some),
            TokenKind::KeywordConst => self.parse_var_const(true).map(Some),
            TokenKind::KeywordRepeat => self.parse_repeat().map(Some),
            TokenKind::KeywordWhile => self.parse_while().map(Some),
            TokenKind::KeywordFor => self.parse_for().map(Some),
            TokenKind::KeywordFn => {
                // `fn name(...)` declares; `fn(...)` is an anonymous
                // function in expression position
                let fn_token = self.next();
                if self.peek().kind == TokenKind::Identifier {
                    self.parse_function_declaration().map(Some)
                } else {
                    let anon = crate::expr::parse_anonymous_fn(self, fn_token)?;
                    let expr = self.continue_infix(anon, crate::prec::MIN)?;
                    Ok(Some(self.expression_statement(expr)))
                }
            }
            TokenKind::KeywordReturn => self.parse_return().map(Some),
            TokenKind::KeywordBreak => self.parse_break_continue(false).map(Some),
            TokenKind::KeywordContinue => self.parse_break_continue(true).map(Some),
            TokenKind::KeywordEnum => self.parse_enum_declaration(),
            TokenKind::OpenBrace => {
                let block = self.parse_block(&[])?;
                Ok(Some(Stmt::Expr(Expr::Block(block))))
            }
            TokenKind::SemiColon => {
                self.next(); // empty statement
                self.parse_statement()
            }
            TokenKind::Error => {
                let token = self.next();
                Err(ParseError::with_text(
                    ParseErrorKind::Syntax,
                    token.clone(),
                    token.lexeme,
                ))
            }
            _ => {
                let expr = self.parse_expression()?;
                Ok(Some(self.expression_statement(expr)))
            }
        }
    }

    /// An expression followed by `;` is an expression statement; without
    /// one, the bare expression is the statement (its value observable).
    fn expression_statement(&mut self, expr: Expr) -> Stmt {
        if self.match_kind(TokenKind::SemiColon) {
            Stmt::ExprStmt(expr)
        } else {
            Stmt::Expr(expr)
        }
    }

    /// `var NAME (= EXPR)? ;` / `const NAME = EXPR ;`
    fn parse_var_const(&mut self, is_const: bool) -> Result<Stmt, ParseError> {
        self.next(); // eat var or const
        let name = self.next();
        if name.kind != TokenKind::Identifier {
            return Err(ParseError::new(ParseErrorKind::IdentifierExpected, name));
        }

        if self.find_symbol(&name.lexeme, true).is_some() {
            return Err(ParseError::with_text(
                ParseErrorKind::DuplicateDefinition,
                name.clone(),
                format!("Symbol {} already defined in scope", name.lexeme),
            ));
        }

        let init = if self.match_kind(TokenKind::Assign) {
            Some(self.parse_expression()?)
        } else if is_const {
            return Err(ParseError::new(
                ParseErrorKind::MissingInitExpression,
                self.peek(),
            ));
        } else {
            None
        };

        if !self.match_kind(TokenKind::SemiColon) {
            return Err(ParseError::new(
                ParseErrorKind::SemicolonExpected,
                self.peek(),
            ));
        }

        let symbol = if is_const {
            Symbol::constant(name.lexeme.clone(), SymbolKind::Variable)
        } else {
            Symbol::new(name.lexeme.clone(), SymbolKind::Variable)
        };
        if !self.add_symbol(symbol) {
            return Err(ParseError::new(ParseErrorKind::DuplicateDefinition, name));
        }

        Ok(Stmt::Var(VarStmt {
            name: name.lexeme,
            is_const,
            init,
        }))
    }

    /// `fn NAME(a, b) { ... }` / `fn NAME(a, b) => EXPR` - the `fn`
    /// keyword is already consumed.
    fn parse_function_declaration(&mut self) -> Result<Stmt, ParseError> {
        let ident = self.next();
        if ident.kind != TokenKind::Identifier {
            return Err(ParseError::new(ParseErrorKind::IdentifierExpected, ident));
        }

        let duplicate = self.find_symbol(&ident.lexeme, false).is_some();
        if duplicate {
            self.add_error(ParseError::new(
                ParseErrorKind::DuplicateDefinition,
                ident.clone(),
            ));
        }

        if !self.match_kind(TokenKind::OpenParen) {
            return Err(ParseError::new(ParseErrorKind::OpenParenExpected, ident));
        }
        let params = self.parse_parameter_list()?;

        self.push_scope();
        self.install_arguments(&params);
        let body = if self.match_kind(TokenKind::GoesTo) {
            self.parse_expression()
        } else {
            self.parse_block(&[]).map(Expr::Block)
        };
        self.pop_scope();

        if !duplicate {
            self.add_symbol(Symbol::new(ident.lexeme.clone(), SymbolKind::Function));
        }
        Ok(Stmt::Function(FunctionDecl {
            name: ident.lexeme,
            params,
            body: Rc::new(body?),
        }))
    }

    /// `repeat COUNT { ... }`
    fn parse_repeat(&mut self) -> Result<Stmt, ParseError> {
        self.next(); // eat "repeat"
        let count = self.parse_expression()?;
        let body = self.parse_loop_block()?;
        Ok(Stmt::Repeat(RepeatStmt { count, body }))
    }

    /// `while COND { ... }`
    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        self.next(); // eat "while"
        let cond = self.parse_condition()?;
        let body = self.parse_loop_block()?;
        Ok(Stmt::While(WhileStmt { cond, body }))
    }

    /// `for INIT COND; INC { ... }` - the init statement terminates itself.
    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        self.next(); // eat "for"
        self.push_scope();
        let result = self.parse_for_parts();
        self.pop_scope();
        result
    }

    fn parse_for_parts(&mut self) -> Result<Stmt, ParseError> {
        let init = match self.parse_statement()? {
            Some(stmt @ (Stmt::Var(_) | Stmt::ExprStmt(_) | Stmt::Expr(_))) => stmt,
            Some(_) | None => {
                return Err(ParseError::new(
                    ParseErrorKind::ExpressionOrVarExpected,
                    self.peek(),
                ))
            }
        };

        let cond = self.parse_condition()?;
        if !self.match_kind(TokenKind::SemiColon) {
            self.error_at_peek(ParseErrorKind::SemicolonExpected);
        }
        let increment = self.parse_expression()?;
        let body = self.parse_loop_block()?;

        Ok(Stmt::For(Box::new(ForStmt {
            init,
            cond,
            increment,
            body,
        })))
    }

    /// `return;` / `return EXPR;`
    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        self.next(); // eat return keyword
        let value = if self.peek().kind == TokenKind::SemiColon {
            None
        } else {
            Some(self.parse_expression()?)
        };
        if !self.match_kind(TokenKind::SemiColon) {
            self.error_at_peek(ParseErrorKind::SemicolonExpected);
        }
        Ok(Stmt::Return(value))
    }

    /// `break;` / `continue;`
    fn parse_break_continue(&mut self, is_continue: bool) -> Result<Stmt, ParseError> {
        self.next(); // eat keyword
        if !self.match_kind(TokenKind::SemiColon) {
            self.error_at_peek(ParseErrorKind::SemicolonExpected);
        }
        if self.loop_depth() == 0 {
            self.error_at_peek(ParseErrorKind::BreakContinueNoLoop);
        }
        Ok(Stmt::BreakOrContinue { is_continue })
    }

    /// `enum NAME { ident (= CONST)?, ... }`
    ///
    /// Uses skip-to-close-brace recovery so a malformed enum does not take
    /// the rest of the input with it.
    fn parse_enum_declaration(&mut self) -> Result<Option<Stmt>, ParseError> {
        self.next(); // eat enum
        let name = self.next();
        if name.kind != TokenKind::Identifier {
            self.add_error(ParseError::with_text(
                ParseErrorKind::IdentifierExpected,
                name,
                "Expected identifier after 'enum'",
            ));
            self.skip_to(TokenKind::CloseBrace);
            return self.parse_statement();
        }

        if self.find_symbol(&name.lexeme, false).is_some() {
            self.add_error(ParseError::with_text(
                ParseErrorKind::DuplicateDefinition,
                name.clone(),
                "Identifier already defined in current scope",
            ));
        }

        if !self.match_kind(TokenKind::OpenBrace) {
            self.error_at_peek(ParseErrorKind::OpenBraceExpected);
        }

        let mut members: IndexMap<String, i64> = IndexMap::new();
        let mut current = 0i64;
        loop {
            let peeked = self.peek();
            if peeked.kind == TokenKind::CloseBrace || peeked.is_invalid() {
                break;
            }
            let member = self.next();
            let mut bad = false;
            if member.kind != TokenKind::Identifier {
                self.add_error(ParseError::with_text(
                    ParseErrorKind::IdentifierExpected,
                    member.clone(),
                    "Expected: identifier",
                ));
                bad = true;
            }
            if members.contains_key(&member.lexeme) {
                self.add_error(ParseError::with_text(
                    ParseErrorKind::DuplicateDefinition,
                    member.clone(),
                    format!("Duplicate enum value '{}'", member.lexeme),
                ));
                bad = true;
            }
            if self.match_kind(TokenKind::Assign) {
                let value = self.parse_expression()?;
                match enum_member_value(&value) {
                    Some(v) => current = v,
                    None => {
                        let token = self.peek();
                        self.add_error(ParseError::with_text(
                            ParseErrorKind::IllegalExpression,
                            token,
                            "Expression must be constant",
                        ));
                    }
                }
            }
            if !bad {
                members.insert(member.lexeme, current);
            }
            current += 1;

            if !self.match_kind(TokenKind::Comma) && self.peek().kind != TokenKind::CloseBrace {
                self.error_at_peek(ParseErrorKind::CommaExpected);
            }
        }
        self.next(); // consume close brace

        self.add_symbol(Symbol::new(name.lexeme.clone(), SymbolKind::Enum));
        Ok(Some(Stmt::Enum(EnumDecl {
            name: name.lexeme,
            members,
        })))
    }

    /// `{ STATEMENT* }`, with `args` installed as argument symbols in the
    /// block's scope.
    pub fn parse_block(&mut self, args: &[String]) -> Result<BlockExpr, ParseError> {
        if !self.match_kind(TokenKind::OpenBrace) {
            self.error_at_peek(ParseErrorKind::OpenBraceExpected);
        }

        self.push_scope();
        self.install_arguments(args);

        let mut stmts = Vec::new();
        let result = loop {
            if self.peek().kind == TokenKind::CloseBrace {
                break Ok(());
            }
            match self.parse_statement() {
                Ok(Some(stmt)) => stmts.push(stmt),
                Ok(None) => break Ok(()),
                Err(err) => break Err(err),
            }
        };
        self.next(); // eat close brace
        self.pop_scope();

        result.map(|_| BlockExpr { stmts })
    }

    /// A loop body: a block parsed with the loop depth raised so
    /// `break`/`continue` inside it are legal.
    fn parse_loop_block(&mut self) -> Result<BlockExpr, ParseError> {
        self.enter_loop();
        let body = self.parse_block(&[]);
        self.exit_loop();
        body
    }

    /// A loop condition; a missing one (body brace up next) is recorded
    /// and replaced with `true`.
    fn parse_condition(&mut self) -> Result<Expr, ParseError> {
        if self.peek().kind == TokenKind::OpenBrace {
            self.error_at_peek(ParseErrorKind::ConditionExpressionExpected);
            let token = Token::with_value(
                TokenKind::KeywordTrue,
                "true",
                Span::DUMMY,
                Literal::Bool(true),
            );
            return Ok(Expr::Literal(token));
        }
        self.parse_expression()
    }

    /// Parses `ident (, ident)* )` after an already-consumed open paren and
    /// eats the close paren.
    pub(crate) fn parse_parameter_list(&mut self) -> Result<Vec<String>, ParseError> {
        let mut params = Vec::new();
        while self.peek().kind != TokenKind::CloseParen {
            let param = self.next();
            if param.kind != TokenKind::Identifier {
                return Err(ParseError::new(ParseErrorKind::IdentifierExpected, param));
            }
            params.push(param.lexeme);
            if self.match_kind(TokenKind::Comma) || self.peek().kind == TokenKind::CloseParen {
                continue;
            }
            return Err(ParseError::new(
                ParseErrorKind::CommaOrCloseParenExpected,
                self.peek(),
            ));
        }
        self.next(); // eat close paren
        Ok(params)
    }
}

/// Extracts the integer value of a literal constant enum initializer.
fn enum_member_value(expr: &Expr) -> Option<i64> {
    match expr {
        Expr::Literal(token) => match token.value {
            Some(Literal::Int(v)) => Some(v),
            _ => None,
        },
        _ => None,
    }
}
