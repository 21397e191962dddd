use crate::operators::is_function;
use lexers::{is_letter, is_space, Scanner};
use std::collections::HashSet;

static SYMBOLS: &[char] = &['+', '-', '*', '/', '(', ')', '.', ','];

/// Cheap syntactic check run before evaluating anything: parentheses
/// never close more than they opened and end balanced, and only digits,
/// letters, whitespace and `+ - * / ( ) . ,` appear. Empty input fails.
pub fn is_valid_expression(expr: &str) -> bool {
    let mut depth = 0usize;
    for c in expr.chars() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return false,
            ')' => depth -= 1,
            _ => (),
        }
        if !(c.is_ascii_digit() || is_letter(c) || is_space(c) || SYMBOLS.contains(&c)) {
            return false;
        }
    }
    depth == 0 && !expr.is_empty()
}

/// Names of the variables `expr` refers to: every maximal run of letters
/// that isn't a function name.
pub fn extract_variables(expr: &str) -> HashSet<String> {
    let mut names = HashSet::new();
    let mut s = Scanner::new(expr.chars());
    loop {
        if let Some(word) = s.scan_letters() {
            if !is_function(&word) {
                names.insert(word);
            }
        } else if s.next().is_some() {
            s.ignore();
        } else {
            break;
        }
    }
    names
}
