#![deny(warnings)]

use crate::char_scanner::{is_decimal, is_word};
use crate::delim_tokenizer::DelimTokenizer;
use crate::scanner::Scanner;
use log::trace;
use std::fmt;

/// Characters that split an expression into lexemes. Whitespace splits
/// too but never shows up as a token.
pub const DELIMITERS: &str = "+-*/(),";

#[derive(Clone, PartialEq, Debug)]
pub enum ExprToken {
    Number(f64),
    Identifier(String),
    Operator(char),
    LParen,
    RParen,
    Comma,
    Unknown(String),
}

impl fmt::Display for ExprToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExprToken::Number(n) => write!(f, "{}", n),
            ExprToken::Identifier(id) => write!(f, "{}", id),
            ExprToken::Operator(op) => write!(f, "{}", op),
            ExprToken::LParen => write!(f, "("),
            ExprToken::RParen => write!(f, ")"),
            ExprToken::Comma => write!(f, ","),
            ExprToken::Unknown(lexeme) => write!(f, "{}", lexeme),
        }
    }
}

impl ExprToken {
    pub fn classify(lexeme: String) -> ExprToken {
        let mut chars = lexeme.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            match c {
                '(' => return ExprToken::LParen,
                ')' => return ExprToken::RParen,
                ',' => return ExprToken::Comma,
                '+' | '-' | '*' | '/' => return ExprToken::Operator(c),
                _ => (),
            }
        }
        if is_decimal(&lexeme) {
            if let Ok(n) = lexeme.parse::<f64>() {
                return ExprToken::Number(n);
            }
        } else if is_word(&lexeme) {
            return ExprToken::Identifier(lexeme);
        }
        ExprToken::Unknown(lexeme)
    }
}

/// Streams `ExprToken`s out of a char source, one lexeme at a time.
pub struct ExprTokenizer<I: Iterator<Item = char>> {
    src: DelimTokenizer<I>,
}

impl<I: Iterator<Item = char>> ExprTokenizer<I> {
    pub fn new(source: I) -> Self {
        ExprTokenizer {
            src: DelimTokenizer::new(source, DELIMITERS),
        }
    }

    // wrap in a scanner to get lookahead over tokens
    pub fn scanner(source: I) -> Scanner<Self> {
        Scanner::new(Self::new(source))
    }
}

impl<I: Iterator<Item = char>> Iterator for ExprTokenizer<I> {
    type Item = ExprToken;

    fn next(&mut self) -> Option<ExprToken> {
        let lexeme = self.src.next()?;
        let token = ExprToken::classify(lexeme);
        trace!("token {:?}", token);
        Some(token)
    }
}
