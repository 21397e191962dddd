pub use eval::{evaluate, EvalErr, MathContext};
pub use operators::{is_function, BinOp, Function, FUNCTIONS};
pub use validate::{extract_variables, is_valid_expression};

mod eval;
mod operators;
mod validate;
