use crate::eval::EvalErr;
use std::fmt;
use std::str::FromStr;

/// Names of the built-in functions. They are never looked up as variables.
pub const FUNCTIONS: [&str; 7] = ["sin", "cos", "tan", "sqrt", "log", "abs", "pow"];

pub fn is_function(name: &str) -> bool {
    FUNCTIONS.contains(&name)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    // all binary operators are left associative
    pub fn precedence(self) -> usize {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div => 2,
        }
    }

    /// Plain IEEE-754 arithmetic, division by zero gives inf or NaN.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinOp::Add => a + b,
            BinOp::Sub => a - b,
            BinOp::Mul => a * b,
            BinOp::Div => a / b,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }
}

impl TryFrom<char> for BinOp {
    type Error = EvalErr;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(BinOp::Add),
            '-' => Ok(BinOp::Sub),
            '*' => Ok(BinOp::Mul),
            '/' => Ok(BinOp::Div),
            _ => Err(EvalErr::UnsupportedOperation(c.to_string())),
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Log,
    Abs,
    Pow,
}

// a shorthand for checking number of arguments before applying a function
macro_rules! nargs {
    ($func:expr, $args:expr, $ifok:expr) => {
        if $args.len() == $func.arity() {
            Ok($ifok)
        } else {
            Err(EvalErr::WrongNumberOfArgs {
                func: $func.name().to_string(),
                expected: $func.arity(),
                found: $args.len(),
            })
        }
    };
}

impl Function {
    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Sqrt => "sqrt",
            Function::Log => "log",
            Function::Abs => "abs",
            Function::Pow => "pow",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Function::Pow => 2,
            _ => 1,
        }
    }

    /// Arguments are in call order, so `pow` gets `[base, exponent]`.
    /// `log` is the natural logarithm. Out-of-domain inputs give NaN.
    pub fn apply(self, args: &[f64]) -> Result<f64, EvalErr> {
        match self {
            Function::Sin => nargs!(self, args, args[0].sin()),
            Function::Cos => nargs!(self, args, args[0].cos()),
            Function::Tan => nargs!(self, args, args[0].tan()),
            Function::Sqrt => nargs!(self, args, args[0].sqrt()),
            Function::Log => nargs!(self, args, args[0].ln()),
            Function::Abs => nargs!(self, args, args[0].abs()),
            Function::Pow => nargs!(self, args, args[0].powf(args[1])),
        }
    }
}

impl FromStr for Function {
    type Err = EvalErr;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "sin" => Ok(Function::Sin),
            "cos" => Ok(Function::Cos),
            "tan" => Ok(Function::Tan),
            "sqrt" => Ok(Function::Sqrt),
            "log" => Ok(Function::Log),
            "abs" => Ok(Function::Abs),
            "pow" => Ok(Function::Pow),
            _ => Err(EvalErr::UnsupportedFunction(name.to_string())),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An entry of the evaluator's operator stack.
#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) enum Pending {
    Op(BinOp),
    // function waiting for its arguments, with the operand stack depth
    // at the point it was seen
    Call(Function, usize),
    LParen,
}

///////////////////////////////////////////////////////////////////////////////
