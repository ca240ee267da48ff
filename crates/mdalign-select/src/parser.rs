//! Recursive-descent parser for the selection language
//!
//! Grammar (lowest to highest precedence):
//!
//! ```text
//! or_expr   := and_expr (("or" | "|") and_expr)*
//! and_expr  := unary (("and" | "&") unary)*
//! unary     := ("not" | "!") unary | primary
//! primary   := "(" or_expr ")" | "all" | field
//! field     := ("name" | "resname") value+ | "chainid" integer+
//! ```

use crate::ast::SelectionExpr;
use crate::error::{ParseError, ParseResult};
use crate::lexer::{tokenize, Token};

/// Parse a selection string into an AST
pub fn parse_selection(input: &str) -> ParseResult<SelectionExpr> {
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_or()?;
    parser.expect_eof()?;
    Ok(expr)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        self.pos += 1;
        tok
    }

    fn expect_eof(&self) -> ParseResult<()> {
        match self.peek() {
            Token::Eof => Ok(()),
            Token::RParen => Err(ParseError::UnmatchedParen),
            other => Err(ParseError::UnexpectedToken(format!("{other:?}"))),
        }
    }

    fn parse_or(&mut self) -> ParseResult<SelectionExpr> {
        let mut left = self.parse_and()?;
        loop {
            let is_or = match self.peek() {
                Token::Pipe => true,
                Token::Ident(s) if s.eq_ignore_ascii_case("or") => true,
                _ => false,
            };
            if !is_or {
                break;
            }
            self.advance();
            let right = self.parse_and()?;
            left = SelectionExpr::Or(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> ParseResult<SelectionExpr> {
        let mut left = self.parse_unary()?;
        loop {
            let is_and = match self.peek() {
                Token::Ampersand => true,
                Token::Ident(s) if s.eq_ignore_ascii_case("and") => true,
                _ => false,
            };
            if !is_and {
                break;
            }
            self.advance();
            let right = self.parse_unary()?;
            left = SelectionExpr::And(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> ParseResult<SelectionExpr> {
        let is_not = match self.peek() {
            Token::Exclamation => true,
            Token::Ident(s) if s.eq_ignore_ascii_case("not") => true,
            _ => false,
        };
        if is_not {
            self.advance();
            let inner = self.parse_unary()?;
            return Ok(SelectionExpr::Not(Box::new(inner)));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> ParseResult<SelectionExpr> {
        match self.advance() {
            Token::LParen => {
                let inner = self.parse_or()?;
                match self.advance() {
                    Token::RParen => Ok(inner),
                    Token::Eof => Err(ParseError::UnmatchedParen),
                    other => Err(ParseError::UnexpectedToken(format!("{other:?}"))),
                }
            }
            Token::Ident(word) => self.parse_keyword(&word),
            Token::Eof => Err(ParseError::UnexpectedEof),
            other => Err(ParseError::UnexpectedToken(format!("{other:?}"))),
        }
    }

    fn parse_keyword(&mut self, word: &str) -> ParseResult<SelectionExpr> {
        match word.to_ascii_lowercase().as_str() {
            "all" => Ok(SelectionExpr::All),
            "name" => {
                let values = self.parse_string_values(word)?;
                Ok(SelectionExpr::Name(values))
            }
            "resname" => {
                let values = self.parse_string_values(word)?;
                Ok(SelectionExpr::ResName(values))
            }
            "chainid" => {
                let values = self.parse_chain_values(word)?;
                Ok(SelectionExpr::ChainId(values))
            }
            // An unknown field keyword is a parse error, never a silent
            // zero-atom match
            _ => Err(ParseError::UnknownKeyword(word.to_string())),
        }
    }

    /// True when the next token would start a new clause rather than extend
    /// the current value list
    fn at_value_end(&self) -> bool {
        match self.peek() {
            Token::Eof | Token::RParen | Token::Ampersand | Token::Pipe | Token::Exclamation => {
                true
            }
            Token::LParen => true,
            Token::Ident(s) => {
                s.eq_ignore_ascii_case("and")
                    || s.eq_ignore_ascii_case("or")
                    || s.eq_ignore_ascii_case("not")
            }
            Token::Integer(_) => false,
        }
    }

    fn parse_string_values(&mut self, field: &str) -> ParseResult<Vec<String>> {
        let mut values = Vec::new();
        while !self.at_value_end() {
            match self.advance() {
                Token::Ident(s) => values.push(s),
                Token::Integer(n) => values.push(n.to_string()),
                other => return Err(ParseError::UnexpectedToken(format!("{other:?}"))),
            }
        }
        if values.is_empty() {
            return Err(ParseError::MissingArgument(field.to_string()));
        }
        Ok(values)
    }

    fn parse_chain_values(&mut self, field: &str) -> ParseResult<Vec<u32>> {
        let mut values = Vec::new();
        while !self.at_value_end() {
            match self.advance() {
                Token::Integer(n) => values.push(n),
                Token::Ident(s) => return Err(ParseError::InvalidChainIndex(s)),
                other => return Err(ParseError::UnexpectedToken(format!("{other:?}"))),
            }
        }
        if values.is_empty() {
            return Err(ParseError::MissingArgument(field.to_string()));
        }
        Ok(values)
    }
}
