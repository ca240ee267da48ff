//! Error types for selection parsing

use thiserror::Error;

/// Errors that can occur while parsing a selection string
///
/// Evaluation itself cannot fail: a query that matches nothing is a valid
/// empty selection, never an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// Unexpected end of input
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Unexpected token encountered
    #[error("unexpected token: {0}")]
    UnexpectedToken(String),

    /// Unknown field keyword (e.g. a typo like "resnme")
    #[error("unknown keyword: {0}")]
    UnknownKeyword(String),

    /// A field keyword with no values after it
    #[error("missing argument for {0}")]
    MissingArgument(String),

    /// A chainid value that is not a non-negative integer
    #[error("invalid chain index: {0}")]
    InvalidChainIndex(String),

    /// An integer literal too large to represent
    #[error("integer out of range: {0}")]
    InvalidInteger(String),

    /// Unmatched parenthesis
    #[error("unmatched parenthesis")]
    UnmatchedParen,

    /// Lexer rejected part of the input
    #[error("invalid character at position {0}")]
    InvalidCharacter(usize),
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
