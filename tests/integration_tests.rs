//! Integration tests for end-to-end scanning.
//!
//! These tests drive the public API the way a parser or diagnostic printer
//! would: pull tokens until the end-of-input marker and inspect kinds, lines,
//! lexemes and payloads.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use scanner::{
    errors::errors::ErrorImpl, render_error, tokenize, BinOp, RelOp, Scanned, Scanner, TokenKind,
};

fn describe(source: &str) -> Vec<String> {
    tokenize(source.to_string(), Some("test.fanc".to_string()))
        .iter()
        .map(|token| token.to_string())
        .collect()
}

fn reconstruct(source: &str) -> String {
    let mut scanner = Scanner::new(source.to_string(), None);
    let mut rebuilt = String::new();

    while let Some(scanned) = scanner.scan_lexeme() {
        match scanned {
            Scanned::Token(token) => rebuilt.push_str(&token.lexeme),
            Scanned::Trivia(trivia) => rebuilt.push_str(&trivia.text),
        }
    }

    rebuilt
}

#[test]
fn test_scan_function() {
    let source = r#"
int add(int a, byte b) {
    // sum of both
    return a + b;
}

void main() {
    int x = add(3, 200b);
    if (x >= 10 and not false) {
        print("big\n");
    }
}
"#;

    assert_eq!(
        describe(source),
        vec![
            "2 INT int",
            "2 ID add",
            "2 LPAREN (",
            "2 INT int",
            "2 ID a",
            "2 COMMA ,",
            "2 BYTE byte",
            "2 ID b",
            "2 RPAREN )",
            "2 LBRACE {",
            "4 RETURN return",
            "4 ID a",
            "4 BINOP +",
            "4 ID b",
            "4 SC ;",
            "5 RBRACE }",
            "7 VOID void",
            "7 ID main",
            "7 LPAREN (",
            "7 RPAREN )",
            "7 LBRACE {",
            "8 INT int",
            "8 ID x",
            "8 ASSIGN =",
            "8 ID add",
            "8 LPAREN (",
            "8 NUM 3",
            "8 COMMA ,",
            "8 NUM_B 200",
            "8 RPAREN )",
            "8 SC ;",
            "9 IF if",
            "9 LPAREN (",
            "9 ID x",
            "9 RELOP >=",
            "9 NUM 10",
            "9 AND and",
            "9 NOT not",
            "9 FALSE false",
            "9 RPAREN )",
            "9 LBRACE {",
            "10 ID print",
            "10 LPAREN (",
            "10 STRING big\n",
            "10 RPAREN )",
            "10 SC ;",
            "11 RBRACE }",
            "12 RBRACE }",
        ]
    );
}

#[test]
fn test_pull_until_end_marker() {
    let mut scanner = Scanner::new("while (true) break;".to_string(), None);
    let mut kinds = Vec::new();

    while let Some(token) = scanner.next_token() {
        kinds.push(token.kind);
    }

    assert_eq!(
        kinds,
        vec![
            TokenKind::While,
            TokenKind::OpenParen,
            TokenKind::True,
            TokenKind::CloseParen,
            TokenKind::Break,
            TokenKind::Semicolon,
        ]
    );
    assert!(scanner.next_token().is_none());
}

#[test]
fn test_errors_do_not_halt_the_stream() {
    let source = "int a = 017;\nbyte b = 999b;\nx = \"tab\\q\" @ y;\n\"open\ncontinue # 1 - 2";
    let tokens = tokenize(source.to_string(), None);

    let names: Vec<&str> = tokens.iter().map(|t| t.kind.name()).collect();
    assert_eq!(
        names,
        vec![
            "INT",
            "ID",
            "ASSIGN",
            "NUM_ERROR",
            "SC",
            "BYTE",
            "ID",
            "ASSIGN",
            "NUM_B_ERROR",
            "SC",
            "ID",
            "ASSIGN",
            "ESCAPE_ERROR",
            "UNCLOSED_STRING",
            "CONTINUE",
            "UNKNOWN_CHAR",
            "NUM",
            "BINOP",
            "NUM",
        ]
    );

    let lines: Vec<u32> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(
        lines,
        vec![1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 4, 5, 5, 5, 5, 5]
    );
    assert_eq!(tokens[12].lexeme, "\"tab\\q\" @ y;");
    assert_eq!(tokens[17].kind, TokenKind::Binop(BinOp::Dash));
}

#[test]
fn test_relop_spacing() {
    let tokens = tokenize("a<b>=c!=d".to_string(), None);
    let kinds: Vec<TokenKind> = tokens.into_iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Relop(RelOp::Less),
            TokenKind::Identifier,
            TokenKind::Relop(RelOp::GreaterEquals),
            TokenKind::Identifier,
            TokenKind::Relop(RelOp::NotEquals),
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_hex_escape_payload() {
    let tokens = tokenize(r#""\x48\x69\x21" "\x4g""#.to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::String("Hi!".to_string()));
    assert!(matches!(
        tokens[1].error().map(|e| e.get_impl()),
        Some(ErrorImpl::InvalidHexEscape { .. })
    ));
}

#[test]
fn test_render_scanned_error() {
    let source = "int x;\nx = 300b;\n";
    let tokens = tokenize(source.to_string(), Some("main.fanc".to_string()));
    let error = tokens[5].error().unwrap();

    assert_eq!(
        render_error(error, source),
        "Error: MalformedByteLiteral (Byte literals must lie between 0b and 255b)\n\
         -> main.fanc\n  |\n2 | x = 300b;\n  | ----^\n"
    );
}

#[test]
fn test_round_trip_fixed() {
    let source = "int x = 5; // c\n\t\"s\\n\" \"bad\\z\n\"open 0x 017 999b é\r\n";
    assert_eq!(reconstruct(source), source);
}

proptest! {
    #[test]
    fn round_trip_arbitrary_input(source in "\\PC*") {
        prop_assert_eq!(reconstruct(&source), source);
    }

    #[test]
    fn round_trip_language_alphabet(source in "[a-z0-9 \n\t\"\\\\/<>=!+*;(){}xb@_-]{0,64}") {
        prop_assert_eq!(reconstruct(&source), source);
    }

    #[test]
    fn lines_match_newline_count(source in "[a-z0-9 \n\"\\\\/<=;@]{0,64}") {
        let mut last = 1;
        for token in tokenize(source.clone(), None) {
            let start = token.span.start.0;
            let expected = source[..start].matches('\n').count() as u32 + 1;
            prop_assert_eq!(token.line, expected);
            prop_assert!(token.line >= last);
            last = token.line;
        }
    }

    #[test]
    fn whitespace_yields_no_tokens(source in "[ \t\r\n]{0,32}") {
        prop_assert!(tokenize(source, None).is_empty());
    }
}
