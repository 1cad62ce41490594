use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{errors::errors::Error, Span};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("void", TokenKind::Void);
        map.insert("int", TokenKind::Int);
        map.insert("byte", TokenKind::Byte);
        map.insert("bool", TokenKind::Bool);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("not", TokenKind::Not);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("return", TokenKind::Return);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map
    };

    /// Every operator and punctuation lexeme. Two-character entries are
    /// tried before one-character ones, so the longest valid lexeme wins.
    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert(";", TokenKind::Semicolon);
        map.insert(",", TokenKind::Comma);
        map.insert("(", TokenKind::OpenParen);
        map.insert(")", TokenKind::CloseParen);
        map.insert("{", TokenKind::OpenCurly);
        map.insert("}", TokenKind::CloseCurly);
        map.insert("[", TokenKind::OpenBracket);
        map.insert("]", TokenKind::CloseBracket);
        map.insert("=", TokenKind::Assign);
        map.insert("==", TokenKind::Relop(RelOp::Equals));
        map.insert("!=", TokenKind::Relop(RelOp::NotEquals));
        map.insert("<", TokenKind::Relop(RelOp::Less));
        map.insert("<=", TokenKind::Relop(RelOp::LessEquals));
        map.insert(">", TokenKind::Relop(RelOp::Greater));
        map.insert(">=", TokenKind::Relop(RelOp::GreaterEquals));
        map.insert("+", TokenKind::Binop(BinOp::Plus));
        map.insert("-", TokenKind::Binop(BinOp::Dash));
        map.insert("*", TokenKind::Binop(BinOp::Star));
        map.insert("/", TokenKind::Binop(BinOp::Slash));
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum RelOp {
    Equals,
    NotEquals,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BinOp {
    Plus,
    Dash,
    Star,
    Slash,
}

/// The kind of a token, together with any payload that kind carries.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenKind {
    Identifier,
    Number(i32),
    ByteNumber(u8),
    String(String),

    Semicolon,
    Comma,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,

    Assign,
    Relop(RelOp),
    Binop(BinOp),

    // Reserved
    Void,
    Int,
    Byte,
    Bool,
    And,
    Or,
    Not,
    True,
    False,
    Return,
    If,
    Else,
    While,
    Break,
    Continue,

    Error(Error),
}

impl TokenKind {
    /// Catalog name printed by the driver.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "ID",
            TokenKind::Number(_) => "NUM",
            TokenKind::ByteNumber(_) => "NUM_B",
            TokenKind::String(_) => "STRING",
            TokenKind::Semicolon => "SC",
            TokenKind::Comma => "COMMA",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenCurly => "LBRACE",
            TokenKind::CloseCurly => "RBRACE",
            TokenKind::OpenBracket => "LBRACK",
            TokenKind::CloseBracket => "RBRACK",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Relop(_) => "RELOP",
            TokenKind::Binop(_) => "BINOP",
            TokenKind::Void => "VOID",
            TokenKind::Int => "INT",
            TokenKind::Byte => "BYTE",
            TokenKind::Bool => "BOOL",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Return => "RETURN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Error(error) => error.token_name(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TokenKind::Error(_))
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Void
                | TokenKind::Int
                | TokenKind::Byte
                | TokenKind::Bool
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Not
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Return
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Break
                | TokenKind::Continue
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.line, self.kind, self.value())
    }
}

impl Token {
    /// The token's value as the driver prints it: decoded text for strings,
    /// the validated number for numeric literals, the raw lexeme otherwise.
    pub fn value(&self) -> String {
        match &self.kind {
            TokenKind::Number(value) => value.to_string(),
            TokenKind::ByteNumber(value) => value.to_string(),
            TokenKind::String(content) => content.clone(),
            _ => self.lexeme.clone(),
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match &self.kind {
            TokenKind::Error(error) => Some(error),
            _ => None,
        }
    }
}
