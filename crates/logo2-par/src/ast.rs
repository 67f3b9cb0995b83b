//! AST node definitions.
//!
//! Two exhaustive enums: [`Expr`] for expressions and [`Stmt`] for
//! statements. Expressions are valid statements ([`Stmt::Expr`] /
//! [`Stmt::ExprStmt`], depending on the trailing semicolon). Each node
//! exclusively owns its children; function bodies are `Rc<Expr>` so runtime
//! function values can share them without cloning the subtree.
//!
//! `Display` renders a node back to parseable source text (compound
//! expressions fully parenthesized), which is what makes re-parsing a
//! printed program structurally stable.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use logo2_lex::{Token, TokenKind};

/// Root node: the ordered statements of a program or REPL input.
#[derive(Debug, Clone)]
pub struct Statements {
    pub stmts: Vec<Stmt>,
}

/// Statement
#[derive(Debug, Clone)]
pub enum Stmt {
    /// `var x = 1;` / `const x = 1;`
    Var(VarStmt),

    /// `repeat COUNT { ... }`
    Repeat(RepeatStmt),

    /// `while COND { ... }`
    While(WhileStmt),

    /// `for INIT COND; INC { ... }`
    For(Box<ForStmt>),

    /// `fn name(a, b) { ... }` / `fn name(a, b) => expr`
    Function(FunctionDecl),

    /// `return;` / `return expr;`
    Return(Option<Expr>),

    /// `break;` / `continue;`
    BreakOrContinue { is_continue: bool },

    /// `enum Name { a, b = 4, c }`
    Enum(EnumDecl),

    /// An expression consumed for its side effect (trailing `;`).
    ExprStmt(Expr),

    /// A bare expression; its value is observable (e.g. printed by a REPL).
    Expr(Expr),
}

/// Variable declaration
#[derive(Debug, Clone)]
pub struct VarStmt {
    pub name: String,
    pub is_const: bool,
    pub init: Option<Expr>,
}

/// Counted loop
#[derive(Debug, Clone)]
pub struct RepeatStmt {
    pub count: Expr,
    pub body: BlockExpr,
}

/// Conditional loop
#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub cond: Expr,
    pub body: BlockExpr,
}

/// C-style loop: init statement, condition, increment, body
#[derive(Debug, Clone)]
pub struct ForStmt {
    pub init: Stmt,
    pub cond: Expr,
    pub increment: Expr,
    pub body: BlockExpr,
}

/// Named function declaration
#[derive(Debug, Clone)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<String>,
    /// Block for `{ ... }` bodies, any expression for `=> expr` bodies.
    pub body: Rc<Expr>,
}

/// Enumeration declaration; members keep declaration order.
#[derive(Debug, Clone)]
pub struct EnumDecl {
    pub name: String,
    pub members: IndexMap<String, i64>,
}

/// Expression
#[derive(Debug, Clone)]
pub enum Expr {
    /// A literal; the token carries the parsed value.
    Literal(Token),

    /// A (possibly `::`-qualified) name reference.
    Name(String),

    /// Prefix operator application.
    Unary(UnaryExpr),

    /// Binary operator application.
    Binary(BinaryExpr),

    /// Postfix operator application (`x++`, `x--`).
    Postfix(PostfixExpr),

    /// Assignment to an existing binding.
    Assign(AssignExpr),

    /// Function invocation by name.
    Invoke(InvokeExpr),

    /// `if COND { ... } else ...` expression.
    If(IfExpr),

    /// `{ ... }`; its value is the last child's value.
    Block(BlockExpr),

    /// `fn(a, b) { ... }` / `fn(a, b) => expr` as a first-class value.
    AnonymousFn(AnonymousFnExpr),
}

/// Prefix operator expression
#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub op: Token,
    pub operand: Box<Expr>,
}

/// Binary operator expression
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub op: Token,
    pub right: Box<Expr>,
}

/// Postfix operator expression
#[derive(Debug, Clone)]
pub struct PostfixExpr {
    pub op: Token,
    pub operand: Box<Expr>,
}

/// Assignment expression
#[derive(Debug, Clone)]
pub struct AssignExpr {
    pub name: String,
    pub value: Box<Expr>,
}

/// Invocation expression; arguments evaluate left to right.
#[derive(Debug, Clone)]
pub struct InvokeExpr {
    pub name: String,
    pub args: Vec<Expr>,
}

/// If/then/else expression; an absent else yields null.
#[derive(Debug, Clone)]
pub struct IfExpr {
    pub cond: Box<Expr>,
    pub then: Box<Expr>,
    pub else_branch: Option<Box<Expr>>,
}

/// Block expression
#[derive(Debug, Clone)]
pub struct BlockExpr {
    pub stmts: Vec<Stmt>,
}

/// Anonymous function expression
#[derive(Debug, Clone)]
pub struct AnonymousFnExpr {
    pub params: Vec<String>,
    pub body: Rc<Expr>,
}

impl fmt::Display for Statements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for stmt in &self.stmts {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Var(v) => {
                let kw = if v.is_const { "const" } else { "var" };
                match &v.init {
                    Some(init) => write!(f, "{kw} {} = {init};", v.name),
                    None => write!(f, "{kw} {};", v.name),
                }
            }
            Stmt::Repeat(r) => write!(f, "repeat {} {}", r.count, r.body),
            Stmt::While(w) => write!(f, "while {} {}", w.cond, w.body),
            Stmt::For(l) => write!(f, "for {} {}; {} {}", l.init, l.cond, l.increment, l.body),
            Stmt::Function(d) => write_fn(f, Some(d.name.as_str()), &d.params, &d.body),
            Stmt::Return(Some(e)) => write!(f, "return {e};"),
            Stmt::Return(None) => write!(f, "return;"),
            Stmt::BreakOrContinue { is_continue: true } => write!(f, "continue;"),
            Stmt::BreakOrContinue { is_continue: false } => write!(f, "break;"),
            Stmt::Enum(e) => {
                write!(f, "enum {} {{ ", e.name)?;
                let mut first = true;
                for (member, value) in &e.members {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{member} = {value}")?;
                }
                write!(f, " }}")
            }
            Stmt::ExprStmt(e) => write!(f, "{e};"),
            Stmt::Expr(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(tok) => {
                if tok.kind == TokenKind::String {
                    write!(f, "\"{}\"", tok.lexeme)
                } else {
                    write!(f, "{}", tok.lexeme)
                }
            }
            Expr::Name(name) => write!(f, "{name}"),
            Expr::Unary(u) => write!(f, "{}({})", u.op.lexeme, u.operand),
            Expr::Binary(b) => write!(f, "({} {} {})", b.left, b.op.lexeme, b.right),
            Expr::Postfix(p) => write!(f, "{}{}", p.operand, p.op.lexeme),
            Expr::Assign(a) => write!(f, "{} = {}", a.name, a.value),
            Expr::Invoke(i) => {
                write!(f, "{}(", i.name)?;
                let mut first = true;
                for arg in &i.args {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
            Expr::If(i) => {
                write!(f, "if {} {}", i.cond, i.then)?;
                if let Some(else_branch) = &i.else_branch {
                    write!(f, " else {else_branch}")?;
                }
                Ok(())
            }
            Expr::Block(b) => {
                write!(f, "{{ ")?;
                for stmt in &b.stmts {
                    write!(f, "{stmt} ")?;
                }
                write!(f, "}}")
            }
            Expr::AnonymousFn(a) => write_fn(f, None, &a.params, &a.body),
        }
    }
}

impl fmt::Display for BlockExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for stmt in &self.stmts {
            write!(f, "{stmt} ")?;
        }
        write!(f, "}}")
    }
}

fn write_fn(
    f: &mut fmt::Formatter<'_>,
    name: Option<&str>,
    params: &[String],
    body: &Expr,
) -> fmt::Result {
    write!(f, "fn")?;
    if let Some(name) = name {
        write!(f, " {name}")?;
    }
    write!(f, "(")?;
    let mut first = true;
    for param in params {
        if !first {
            write!(f, ", ")?;
        }
        first = false;
        write!(f, "{param}")?;
    }
    write!(f, ")")?;
    match body {
        Expr::Block(_) => write!(f, " {body}"),
        _ => write!(f, " => {body}"),
    }
}
