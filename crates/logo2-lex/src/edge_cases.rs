//! Edge case tests for logo2-lex

use crate::{Token, TokenKind, Tokenizer};

/// Installs the full default vocabulary a parser would and lexes `source`
/// to completion.
fn lex_all(source: &str) -> Vec<Token> {
    let mut t = full_tokenizer();
    t.tokenize(source, 1);
    drain(&mut t)
}

fn drain(t: &mut Tokenizer) -> Vec<Token> {
    let mut tokens = Vec::new();
    loop {
        let token = t.next();
        if token.is_invalid() && token.lexeme.is_empty() {
            break;
        }
        tokens.push(token);
    }
    tokens
}

fn full_tokenizer() -> Tokenizer {
    use TokenKind::*;
    let mut t = Tokenizer::new();
    t.add_tokens(&[
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
        ("::", ScopeRes),
        ("=>", GoesTo),
        ("var", KeywordVar),
        ("const", KeywordConst),
        ("if", KeywordIf),
        ("else", KeywordElse),
        ("repeat", KeywordRepeat),
        ("while", KeywordWhile),
        ("for", KeywordFor),
        ("fn", KeywordFn),
        ("return", KeywordReturn),
        ("break", KeywordBreak),
        ("continue", KeywordContinue),
        ("enum", KeywordEnum),
        ("null", KeywordNull),
        ("true", KeywordTrue),
        ("false", KeywordFalse),
    ]);
    t
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert!(lex_all("").is_empty());
}

#[test]
fn test_edge_whitespace_only() {
    assert!(lex_all("  \t\n  ").is_empty());
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let tokens = lex_all(&format!("var {} = 1;", name));
    assert!(tokens.iter().any(|t| t.lexeme == name));
}

#[test]
fn test_edge_minus_minus_is_decrement() {
    let tokens = lex_all("x--");
    assert_eq!(tokens[1].kind, TokenKind::Decrement);
}

#[test]
fn test_edge_minus_number_splits() {
    // unary minus is a token of its own; the number is separate
    let tokens = lex_all("-5");
    assert_eq!(tokens[0].kind, TokenKind::Sub);
    assert_eq!(tokens[1].kind, TokenKind::Integer);
}

#[test]
fn test_edge_fn_arrow_body() {
    let kinds: Vec<_> = lex_all("fn sq(n) => n*n;").iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::KeywordFn,
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::GoesTo,
            TokenKind::Identifier,
            TokenKind::Mul,
            TokenKind::Identifier,
            TokenKind::SemiColon,
        ]
    );
}

#[test]
fn test_edge_qualified_name() {
    let kinds: Vec<_> = lex_all("Color::red").iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::ScopeRes,
            TokenKind::Identifier
        ]
    );
}

#[test]
fn test_edge_error_token_does_not_stop_stream() {
    let tokens = lex_all("\"oops\n 42");
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[1].kind, TokenKind::Integer);
}

#[test]
fn test_edge_comment_between_tokens() {
    let tokens = lex_all("1 + // comment\n2");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2].span.line, 2);
}

#[test]
fn test_edge_real_vs_integer_spans() {
    let tokens = lex_all("1.5 15");
    assert_eq!(tokens[0].kind, TokenKind::Real);
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].span.column, 5);
}

// ==================== ROUND-TRIP PROPERTY ====================

mod roundtrip {
    use super::*;
    use proptest::prelude::*;

    /// Joining lexemes with spaces and re-lexing must reproduce the same
    /// kind sequence (strings are excluded: their lexemes drop the quotes).
    fn kind_sequence(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(|t| t.kind).collect()
    }

    proptest! {
        #[test]
        fn lexeme_join_relexes_identically(
            tokens in proptest::collection::vec(
                prop_oneof![
                    "[a-z][a-z0-9]{0,8}".prop_map(String::from),
                    "(0|[1-9][0-9]{0,6})".prop_map(String::from),
                    "[0-9]{1,4}\\.[0-9]{1,4}".prop_map(String::from),
                    Just("+".to_string()),
                    Just("-".to_string()),
                    Just("**".to_string()),
                    Just("<=".to_string()),
                    Just("(".to_string()),
                    Just(")".to_string()),
                    Just(";".to_string()),
                    Just("var".to_string()),
                    Just("repeat".to_string()),
                ],
                0..24,
            )
        ) {
            let source = tokens.join(" ");
            let first = lex_all(&source);
            prop_assert!(first.iter().all(|t| t.kind != TokenKind::Error));

            let rejoined = first
                .iter()
                .map(|t| t.lexeme.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            prop_assert_eq!(kind_sequence(&source), kind_sequence(&rejoined));
        }
    }
}
