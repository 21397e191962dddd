use crate::char_scanner::WHITE;
use crate::scanner::Scanner;

// A tokenizer that splits input on each delimiter.
// Delimiters are emitted as tokens of their own, whitespace separates
// tokens but is never emitted.
pub struct DelimTokenizer<I: Iterator<Item = char>> {
    src: Scanner<I>,
    delims: Vec<char>,
    stops: Vec<char>,
}

impl<I: Iterator<Item = char>> DelimTokenizer<I> {
    pub fn new(source: I, delims: &str) -> Self {
        let delims: Vec<char> = delims.chars().collect();
        let mut stops = delims.clone();
        stops.extend_from_slice(WHITE);
        DelimTokenizer {
            src: Scanner::new(source),
            delims,
            stops,
        }
    }

    pub fn scanner(source: I, delims: &str) -> Scanner<Self> {
        Scanner::new(Self::new(source, delims))
    }
}

impl<I: Iterator<Item = char>> Iterator for DelimTokenizer<I> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.src.ignore_ws();
        if self.src.until_any(&self.stops) {
            return Some(self.src.extract_string());
        } else if let Some(c) = self.src.accept_any(&self.delims) {
            self.src.ignore();
            return Some(c.to_string());
        }
        None
    }
}

///////////////////////////////////////////////////////////////////////////////
