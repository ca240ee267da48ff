//! Lexer for the selection language
//!
//! Converts selection strings into a token stream using nom combinators.

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, digit1, multispace0},
    combinator::{recognize, value},
    sequence::{pair, preceded},
    IResult,
};

use crate::error::ParseError;

/// Token types for the selection language
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Opening parenthesis
    LParen,
    /// Closing parenthesis
    RParen,
    /// Ampersand (AND)
    Ampersand,
    /// Pipe (OR)
    Pipe,
    /// Exclamation (NOT)
    Exclamation,
    /// Integer literal
    Integer(u32),
    /// Identifier (keyword, atom name or residue name)
    Ident(String),
    /// End of input
    Eof,
}

type LexResult<'a, T> = IResult<&'a str, T>;

fn lparen(input: &str) -> LexResult<'_, Token> {
    value(Token::LParen, char('('))(input)
}

fn rparen(input: &str) -> LexResult<'_, Token> {
    value(Token::RParen, char(')'))(input)
}

fn ampersand(input: &str) -> LexResult<'_, Token> {
    value(Token::Ampersand, char('&'))(input)
}

fn pipe(input: &str) -> LexResult<'_, Token> {
    value(Token::Pipe, char('|'))(input)
}

fn exclamation(input: &str) -> LexResult<'_, Token> {
    value(Token::Exclamation, char('!'))(input)
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

/// An identifier, or an atom name that starts with a digit (like "1H")
fn ident(input: &str) -> LexResult<'_, Token> {
    let (input, s) = recognize(pair(take_while1(is_ident_start), take_while(is_ident_char)))(input)?;
    Ok((input, Token::Ident(s.to_string())))
}

fn digit_ident(input: &str) -> LexResult<'_, Token> {
    let (input, s) = recognize(pair(
        digit1,
        take_while1(|c: char| c.is_alphabetic() || c == '\''),
    ))(input)?;
    Ok((input, Token::Ident(s.to_string())))
}

fn number(input: &str) -> LexResult<'_, Token> {
    let (rest, digits) = digit1(input)?;
    // An out-of-range integer must surface as an error, never wrap to a
    // valid chain index
    match digits.parse::<u32>() {
        Ok(n) => Ok((rest, Token::Integer(n))),
        Err(_) => Err(nom::Err::Failure(nom::error::Error::new(
            input,
            nom::error::ErrorKind::TooLarge,
        ))),
    }
}

fn token(input: &str) -> LexResult<'_, Token> {
    preceded(
        multispace0,
        alt((
            lparen,
            rparen,
            ampersand,
            pipe,
            exclamation,
            digit_ident,
            number,
            ident,
        )),
    )(input)
}

/// Tokenize a selection string
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut rest = input;

    loop {
        let trimmed = rest.trim_start();
        if trimmed.is_empty() {
            break;
        }
        match token(rest) {
            Ok((remaining, tok)) => {
                tokens.push(tok);
                rest = remaining;
            }
            Err(nom::Err::Failure(e)) => {
                let digits: String = e
                    .input
                    .chars()
                    .take_while(|c| c.is_ascii_digit())
                    .collect();
                return Err(ParseError::InvalidInteger(digits));
            }
            Err(_) => {
                return Err(ParseError::InvalidCharacter(input.len() - rest.trim_start().len()));
            }
        }
    }

    tokens.push(Token::Eof);
    Ok(tokens)
}
