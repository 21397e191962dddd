use crate::operators::{is_function, BinOp, Function, Pending};
use crate::validate::is_valid_expression;
use lexers::{ExprToken, ExprTokenizer, Scanner};
use log::{debug, trace};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalErr {
    #[error("invalid expression: {0}")]
    InvalidExpression(String),
    #[error("unbalanced parentheses in: {0}")]
    UnbalancedParens(String),
    #[error("misplaced operator: {0}")]
    MisplacedOperator(String),
    #[error("unknown token: {0}")]
    UnknownToken(String),
    #[error("undefined variable: {0}")]
    UndefinedVariable(String),
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
    #[error("unsupported function: {0}")]
    UnsupportedFunction(String),
    #[error("{func} takes {expected} argument(s) but got {found}")]
    WrongNumberOfArgs {
        func: String,
        expected: usize,
        found: usize,
    },
}

/// Variable bindings an expression is evaluated against.
///
/// Evaluation only borrows the context, so one context can serve many
/// evaluations (and threads) as long as nobody rebinds while they run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MathContext(HashMap<String, f64>);

impl MathContext {
    pub fn new() -> MathContext {
        MathContext(HashMap::new())
    }

    /// Replace every binding with `vars`.
    pub fn set_variables<I, S>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        self.0 = vars.into_iter().map(|(k, v)| (k.into(), v)).collect();
    }

    pub fn setvar(&mut self, var: &str, val: f64) {
        self.0.insert(var.to_string(), val);
    }

    pub fn get(&self, var: &str) -> Option<f64> {
        self.0.get(var).copied()
    }

    pub fn contains(&self, var: &str) -> bool {
        self.0.contains_key(var)
    }

    pub fn eval(&self, expr: &str) -> Result<f64, EvalErr> {
        if !is_valid_expression(expr) {
            return Err(EvalErr::InvalidExpression(expr.to_string()));
        }
        debug!("evaluating {:?}", expr);
        let mut tokens = ExprTokenizer::scanner(expr.chars());
        let mut machine = Machine::new(self, expr);
        while let Some(token) = tokens.next() {
            machine.step(token, &mut tokens)?;
        }
        machine.finish()
    }
}

/// Evaluate `expr` with the bindings in `cx`.
pub fn evaluate(expr: &str, cx: &MathContext) -> Result<f64, EvalErr> {
    cx.eval(expr)
}

// State of a single evaluation. It lives only for one call to eval.
struct Machine<'a> {
    cx: &'a MathContext,
    expr: &'a str,
    operands: Vec<f64>,
    stack: Vec<Pending>,
    expect_operand: bool,
}

impl<'a> Machine<'a> {
    fn new(cx: &'a MathContext, expr: &'a str) -> Self {
        Machine {
            cx,
            expr,
            operands: Vec::new(),
            stack: Vec::new(),
            expect_operand: true,
        }
    }

    fn step<I>(&mut self, token: ExprToken, tokens: &mut Scanner<I>) -> Result<(), EvalErr>
    where
        I: Iterator<Item = ExprToken>,
    {
        trace!("step {:?} operands={:?} stack={:?}", token, self.operands, self.stack);
        match token {
            ExprToken::Number(n) => self.push_operand(n),
            ExprToken::Identifier(id) => match id.parse::<Function>() {
                Ok(func) => {
                    self.stack.push(Pending::Call(func, self.operands.len()));
                    self.expect_operand = true;
                }
                Err(_) => {
                    let value = self.lookup(&id)?;
                    self.push_operand(value);
                }
            },
            ExprToken::Operator('-') if self.expect_operand => {
                let value = self.negated_operand(tokens.peek())?;
                tokens.next();
                self.push_operand(-value);
            }
            ExprToken::Operator(c) => {
                if self.expect_operand {
                    return Err(EvalErr::MisplacedOperator(c.to_string()));
                }
                let op = BinOp::try_from(c)?;
                while let Some(&Pending::Op(top)) = self.stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    self.stack.pop();
                    self.apply_op(top)?;
                }
                self.stack.push(Pending::Op(op));
                self.expect_operand = true;
            }
            ExprToken::LParen => {
                self.stack.push(Pending::LParen);
                self.expect_operand = true;
            }
            ExprToken::RParen => self.close_group()?,
            // ',' only separates arguments, like whitespace
            ExprToken::Comma => (),
            ExprToken::Unknown(lexeme) => return Err(EvalErr::UnknownToken(lexeme)),
        }
        Ok(())
    }

    fn push_operand(&mut self, value: f64) {
        self.operands.push(value);
        self.expect_operand = false;
    }

    fn lookup(&self, var: &str) -> Result<f64, EvalErr> {
        self.cx
            .get(var)
            .ok_or_else(|| EvalErr::UndefinedVariable(var.to_string()))
    }

    // a unary minus only binds to a literal or a bound variable
    fn negated_operand(&self, next: Option<ExprToken>) -> Result<f64, EvalErr> {
        match next {
            Some(ExprToken::Number(n)) => Ok(n),
            Some(ExprToken::Identifier(ref id)) if !is_function(id) && self.cx.contains(id) => {
                self.lookup(id)
            }
            Some(other) => Err(EvalErr::InvalidExpression(format!(
                "expected a number or variable after unary '-', found '{}'",
                other
            ))),
            None => Err(EvalErr::InvalidExpression(format!(
                "unary '-' without an operand in: {}",
                self.expr
            ))),
        }
    }

    fn pop_operand(&mut self) -> Result<f64, EvalErr> {
        self.operands.pop().ok_or_else(|| {
            EvalErr::InvalidExpression(format!("missing operand in: {}", self.expr))
        })
    }

    fn apply_op(&mut self, op: BinOp) -> Result<(), EvalErr> {
        let b = self.pop_operand()?;
        let a = self.pop_operand()?;
        let result = op.apply(a, b);
        trace!("{} {} {} = {}", a, op, b, result);
        self.operands.push(result);
        Ok(())
    }

    // reduce one entry that was left on the stack when no group closes it
    fn reduce(&mut self, pending: Pending) -> Result<(), EvalErr> {
        match pending {
            Pending::Op(op) => self.apply_op(op),
            Pending::Call(func, _) => Err(EvalErr::UnsupportedOperation(func.name().to_string())),
            Pending::LParen => Err(EvalErr::UnbalancedParens(self.expr.to_string())),
        }
    }

    fn call(&mut self, func: Function, depth: usize) -> Result<(), EvalErr> {
        let args = self.operands.split_off(depth.min(self.operands.len()));
        let result = func.apply(&args)?;
        trace!("{}{:?} = {}", func, args, result);
        self.operands.push(result);
        Ok(())
    }

    fn close_group(&mut self) -> Result<(), EvalErr> {
        loop {
            match self.stack.pop() {
                Some(Pending::LParen) => break,
                Some(pending) => self.reduce(pending)?,
                None => return Err(EvalErr::UnbalancedParens(self.expr.to_string())),
            }
        }
        if let Some(&Pending::Call(func, depth)) = self.stack.last() {
            self.stack.pop();
            self.call(func, depth)?;
        }
        self.expect_operand = false;
        Ok(())
    }

    fn finish(mut self) -> Result<f64, EvalErr> {
        while let Some(pending) = self.stack.pop() {
            self.reduce(pending)?;
        }
        match (self.operands.pop(), self.operands.is_empty()) {
            (Some(result), true) => Ok(result),
            _ => Err(EvalErr::InvalidExpression(format!(
                "expected a single result from: {}",
                self.expr
            ))),
        }
    }
}
