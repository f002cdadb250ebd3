//! Lexer for Jimmy Script
//!
//! Converts source text into a stream of tokens.

use std::sync::Arc;

use log::debug;

use crate::frontend::token::{
    Token, TokenKind, TokenValue, ASSIGNMENT_SYMBOLS, ASSIGNMENT_WORDS, KEYWORDS,
};
use crate::utils::{Error, Interval, Position, Result, SourceUnit};

/// Tokenize a whole source unit.
///
/// Either every token (terminated by `EndOfInput`) or the first lexical error.
pub fn tokenize(source: Arc<SourceUnit>) -> Result<Vec<Token>> {
    Lexer::new(source).tokenize()
}

/// The lexer state
pub struct Lexer {
    /// Source code as characters
    source: Vec<char>,
    /// Scanning cursor
    pos: Position,
    /// Owning source unit, shared with every emitted interval
    unit: Arc<SourceUnit>,
}

impl Lexer {
    /// Create a new lexer for the given source unit
    pub fn new(unit: Arc<SourceUnit>) -> Self {
        Self {
            source: unit.content.chars().collect(),
            pos: Position::default(),
            unit,
        }
    }

    /// Get the current character without advancing
    fn peek(&self) -> Option<char> {
        self.source.get(self.pos.offset).copied()
    }

    /// Advance to the next character
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos.advance(c);
        Some(c)
    }

    /// Interval from `start` to the cursor
    fn interval_from(&self, start: Position) -> Interval {
        Interval::new(start, self.pos, Arc::clone(&self.unit))
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        while let Some(c) = self.peek() {
            if matches!(c, ' ' | '\t' | '\r' | '\n') {
                self.advance();
                continue;
            }

            if let Some(token) = self.read_assignment() {
                tokens.push(token);
                continue;
            }

            if c.is_ascii_digit() {
                tokens.push(self.read_number()?);
            } else if c.is_alphabetic() || c == '_' {
                tokens.push(self.read_word());
            } else if let Some(kind) = TokenKind::from_char(c) {
                let start = self.pos;
                self.advance();
                tokens.push(Token::new(kind, self.interval_from(start)));
            } else {
                let start = self.pos;
                self.advance();
                return Err(Error::lexical(
                    format!("unexpected character '{}'", c),
                    self.interval_from(start),
                ));
            }
        }

        tokens.push(Token::eof(Interval::point(self.pos, Arc::clone(&self.unit))));
        debug!("{}: {} tokens", self.unit.label, tokens.len());
        Ok(tokens)
    }

    /// Try to read a symbolic assignment operator.
    ///
    /// Consumes characters while they still form a prefix of some spelling.
    /// On a miss the cursor goes back to where it was and nothing is emitted.
    fn read_assignment(&mut self) -> Option<Token> {
        let saved = self.pos;
        let mut text = String::new();

        while let Some(c) = self.peek() {
            text.push(c);
            if !ASSIGNMENT_SYMBOLS.iter().any(|s| s.starts_with(text.as_str())) {
                text.pop();
                break;
            }
            self.advance();
        }

        if ASSIGNMENT_SYMBOLS.contains(&text.as_str()) {
            let interval = self.interval_from(saved);
            Some(Token::with_value(
                TokenKind::Assignment,
                TokenValue::Text(text),
                interval,
            ))
        } else {
            self.pos = saved;
            None
        }
    }

    /// Read a number literal (integer or float)
    fn read_number(&mut self) -> Result<Token> {
        let start = self.pos;
        let mut text = String::new();
        let mut dots = 0;

        while let Some(c) = self.peek() {
            if c == '.' {
                // a second dot ends the literal
                if dots > 0 {
                    break;
                }
                dots += 1;
            } else if !c.is_ascii_digit() {
                break;
            }
            text.push(c);
            self.advance();
        }

        let interval = self.interval_from(start);
        if dots == 0 {
            match text.parse::<i64>() {
                Ok(value) => Ok(Token::with_value(
                    TokenKind::Integer,
                    TokenValue::Int(value),
                    interval,
                )),
                Err(_) => Err(Error::lexical(
                    format!("integer literal '{}' is too large", text),
                    interval,
                )),
            }
        } else {
            match text.parse::<f64>() {
                Ok(value) => Ok(Token::with_value(
                    TokenKind::Float,
                    TokenValue::Float(value),
                    interval,
                )),
                Err(_) => Err(Error::lexical(
                    format!("malformed number '{}'", text),
                    interval,
                )),
            }
        }
    }

    /// Read an identifier, keyword or word assignment
    fn read_word(&mut self) -> Token {
        let start = self.pos;
        let mut text = String::new();

        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                text.push(c);
                self.advance();
            } else {
                break;
            }
        }

        let text = text.to_lowercase();
        let kind = if KEYWORDS.contains(&text.as_str()) {
            TokenKind::Keyword
        } else if ASSIGNMENT_WORDS.contains(&text.as_str()) {
            TokenKind::Assignment
        } else {
            TokenKind::Identifier
        };

        Token::with_value(kind, TokenValue::Text(text), self.interval_from(start))
    }
}
