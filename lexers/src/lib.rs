mod scanner;
mod char_scanner;
mod delim_tokenizer;
mod expr_tokenizer;

pub use scanner::Scanner;
pub use delim_tokenizer::DelimTokenizer;
pub use expr_tokenizer::{ExprToken, ExprTokenizer, DELIMITERS};

pub use char_scanner::is_decimal;
pub use char_scanner::is_letter;
pub use char_scanner::is_space;
pub use char_scanner::is_word;

#[cfg(test)]
mod scanner_test;
#[cfg(test)]
mod expr_tokenizer_test;
