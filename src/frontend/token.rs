//! Token definitions for Jimmy Script

use crate::utils::Interval;
use std::fmt;

/// Keywords, matched after lower-casing
pub const KEYWORDS: &[&str] = &["let"];

/// Symbolic assignment spellings; the lexer scans these greedily
pub const ASSIGNMENT_SYMBOLS: &[&str] = &["=", "<-"];

/// Assignment spellings written as a word
pub const ASSIGNMENT_WORDS: &[&str] = &["be"];

/// A token produced by the lexer
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
    pub interval: Interval,
}

impl Token {
    pub fn new(kind: TokenKind, interval: Interval) -> Self {
        Self {
            kind,
            value: None,
            interval,
        }
    }

    pub fn with_value(kind: TokenKind, value: TokenValue, interval: Interval) -> Self {
        Self {
            kind,
            value: Some(value),
            interval,
        }
    }

    pub fn eof(interval: Interval) -> Self {
        Self::new(TokenKind::EndOfInput, interval)
    }

    /// Whether this is the keyword `word`
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword
            && matches!(&self.value, Some(TokenValue::Text(text)) if text == word)
    }

    /// The textual payload of identifiers, keywords and assignments
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Position never takes part in token equality
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{:?}: {}", self.kind, value),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

/// Token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ============ Literals ============
    Integer,
    Float,

    // ============ Operators ============
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Multiply,
    /// /
    Divide,
    /// ^
    Power,

    // ============ Delimiters ============
    /// (
    LeftParen,
    /// )
    RightParen,

    // ============ Names ============
    Identifier,
    Keyword,
    /// `=`, `<-` or `be`
    Assignment,

    // ============ Special ============
    EndOfInput,
}

impl TokenKind {
    /// Map a single-character operator or bracket to its kind
    pub fn from_char(c: char) -> Option<TokenKind> {
        match c {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Multiply),
            '/' => Some(TokenKind::Divide),
            '^' => Some(TokenKind::Power),
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            _ => None,
        }
    }
}

/// Literal payload carried by a token
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Int(v) => write!(f, "{}", v),
            TokenValue::Float(v) => write!(f, "{:?}", v),
            TokenValue::Text(s) => write!(f, "{}", s),
        }
    }
}
