//! Parser for Jimmy Script
//!
//! Recursive descent, one routine per precedence level:
//!
//! ```text
//! expr   := "let" IDENT ASSIGN expr | term (("+" | "-") term)*
//! term   := factor (("*" | "/") factor)*
//! factor := ("+" | "-") factor | power
//! power  := atom ("^" factor)*
//! atom   := INT | FLOAT | IDENT | "(" expr ")"
//! ```

use log::debug;

use crate::frontend::ast::Node;
use crate::frontend::token::{Token, TokenKind};
use crate::utils::{Error, Interval, Position, Result, SourceUnit};

/// Deepest recursive descent (brackets, signs, exponents, `let` values)
pub const MAX_NESTING: usize = 100;

/// Tallest tree handed to the evaluator, counting left-folded operator chains
pub const MAX_HEIGHT: usize = 1000;

const TOO_DEEP: &str = "expression nested too deeply";

/// Parse a complete token stream into a single expression
pub fn parse(tokens: Vec<Token>) -> Result<Node> {
    Parser::new(tokens).parse()
}

/// The parser
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    nesting: usize,
    height: usize,
}

impl Parser {
    /// Create a parser from tokens ending with `EndOfInput`.
    ///
    /// A stream without that terminator gets one, placed after its last token.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::EndOfInput) {
            let end = match tokens.last() {
                Some(last) => Interval::point(last.interval.end, last.interval.source.clone()),
                None => Interval::point(Position::default(), SourceUnit::new("<empty>", "")),
            };
            tokens.push(Token::eof(end));
        }
        Self {
            tokens,
            pos: 0,
            nesting: 0,
            height: 0,
        }
    }

    // ==================== Helper Methods ====================

    fn current(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.pos.min(last)]
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    fn is_at_end(&self) -> bool {
        self.check(TokenKind::EndOfInput)
    }

    fn error(&self, message: &str) -> Error {
        Error::syntax(message, self.current().interval.clone())
    }

    /// Run `parse` one recursion level deeper
    fn descend<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.nesting >= MAX_NESTING {
            return Err(self.error(TOO_DEEP));
        }
        self.grow()?;
        self.nesting += 1;
        let result = parse(self);
        self.nesting -= 1;
        self.height -= 1;
        result
    }

    /// Account for one more tree level above whatever is parsed next
    fn grow(&mut self) -> Result<()> {
        if self.height >= MAX_HEIGHT {
            return Err(self.error(TOO_DEEP));
        }
        self.height += 1;
        Ok(())
    }

    // ==================== Parsing Methods ====================

    /// Parse one expression that must span the whole input
    pub fn parse(&mut self) -> Result<Node> {
        let node = self.parse_expr()?;
        if !self.is_at_end() {
            return Err(self.error("expecting at least one operator"));
        }
        debug!("parsed {}", node);
        Ok(node)
    }

    fn parse_expr(&mut self) -> Result<Node> {
        if self.current().is_keyword("let") {
            return self.parse_assignment();
        }
        self.parse_binary(Self::parse_term, &[TokenKind::Plus, TokenKind::Minus])
    }

    /// `let` IDENT ASSIGN expr
    fn parse_assignment(&mut self) -> Result<Node> {
        let keyword = self.advance();

        if !self.check(TokenKind::Identifier) {
            return Err(self.error("identifier expected after let keyword"));
        }
        let name = self.advance();

        if !self.check(TokenKind::Assignment) {
            return Err(self.error("assignment operator expected after identifier"));
        }
        self.advance();

        let value = self.descend(Self::parse_expr)?;
        Ok(Node::assign(&keyword, name, value))
    }

    fn parse_term(&mut self) -> Result<Node> {
        self.parse_binary(Self::parse_factor, &[TokenKind::Multiply, TokenKind::Divide])
    }

    fn parse_factor(&mut self) -> Result<Node> {
        self.descend(|parser| {
            if parser.check(TokenKind::Plus) || parser.check(TokenKind::Minus) {
                let op = parser.advance();
                let operand = parser.parse_factor()?;
                return Ok(Node::unary(op, operand));
            }
            parser.parse_power()
        })
    }

    /// The exponent goes back through `factor`, which makes `^` bind to the right
    fn parse_power(&mut self) -> Result<Node> {
        let height = self.height;
        let mut left = self.parse_atom()?;
        while self.check(TokenKind::Power) {
            self.grow()?;
            let op = self.advance();
            let right = self.parse_factor()?;
            left = Node::binary(op, left, right);
        }
        self.height = height;
        Ok(left)
    }

    fn parse_atom(&mut self) -> Result<Node> {
        match self.current().kind {
            TokenKind::Integer | TokenKind::Float => Ok(Node::NumberLiteral {
                token: self.advance(),
            }),
            TokenKind::Identifier => Ok(Node::VarAccess {
                name: self.advance(),
            }),
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expr()?;
                if !self.check(TokenKind::RightParen) {
                    return Err(self.error("missing ')'"));
                }
                self.advance();
                Ok(inner)
            }
            _ => Err(self.error("expecting a number, sign, or bracket")),
        }
    }

    /// Left-associative fold of `operand (op operand)*`
    fn parse_binary(
        &mut self,
        operand: fn(&mut Self) -> Result<Node>,
        ops: &[TokenKind],
    ) -> Result<Node> {
        let height = self.height;
        let mut left = operand(self)?;
        while ops.contains(&self.current().kind) {
            self.grow()?;
            let op = self.advance();
            let right = operand(self)?;
            left = Node::binary(op, left, right);
        }
        self.height = height;
        Ok(left)
    }
}
