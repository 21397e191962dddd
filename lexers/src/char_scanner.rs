#![deny(warnings)]

use crate::scanner::Scanner;

pub(crate) static WHITE: &[char] = &[' ', '\n', '\r', '\t', '\x0B', '\x0C'];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static LETTERS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z'];

pub fn is_letter(c: char) -> bool {
    LETTERS.contains(&c)
}

pub fn is_space(c: char) -> bool {
    WHITE.contains(&c)
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    pub fn skip_ws(&mut self) -> bool {
        self.skip_all(WHITE)
    }

    // discard leading whitespace so the next lexeme starts fresh
    pub fn ignore_ws(&mut self) {
        self.skip_ws();
        self.ignore();
    }

    // scan unsigned decimals like [0-9]+(\.[0-9]+)?
    pub fn scan_decimal(&mut self) -> Option<String> {
        let backtrack = self.pos();
        if !self.skip_all(DIGITS) {
            self.set_pos(backtrack);
            return None;
        }
        let backtrack = self.pos();
        if self.accept(&'.').is_some() && !self.skip_all(DIGITS) {
            self.set_pos(backtrack); // trailing dot isn't part of it
        }
        Some(self.extract_string())
    }

    // scan [a-zA-Z]+
    pub fn scan_letters(&mut self) -> Option<String> {
        if !self.skip_all(LETTERS) {
            return None;
        }
        Some(self.extract_string())
    }
}

/// True when the whole lexeme is a decimal literal, `-?[0-9]+(\.[0-9]+)?`.
pub fn is_decimal(lexeme: &str) -> bool {
    let mut s = Scanner::new(lexeme.chars());
    s.accept(&'-');
    s.ignore();
    s.scan_decimal().is_some() && s.peek().is_none()
}

/// True when the whole lexeme is made of ASCII letters.
pub fn is_word(lexeme: &str) -> bool {
    !lexeme.is_empty() && lexeme.chars().all(is_letter)
}

///////////////////////////////////////////////////////////////////////////////
