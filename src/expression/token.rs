use std::fmt;
use std::str::FromStr;

use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

use crate::expression::errors::ExpressionError;

/// Exact rational value used for operands, intermediates and targets
pub type Number = Rational64;

/// The four binary operators, in enumeration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    /// Infix binding rank; a lower rank binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Mul | Operator::Div => 1,
            Operator::Add | Operator::Sub => 2,
        }
    }

    /// Whether `a op (b op' c)` may drop its brackets when `op'` shares the rank of `op`
    pub fn is_associative(self) -> bool {
        matches!(self, Operator::Add | Operator::Mul)
    }

    /// Computes `x op y`.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] when dividing by zero and
    /// [`ExpressionError::Overflow`] when the exact result does not fit.
    pub fn apply(self, x: Number, y: Number) -> Result<Number, ExpressionError> {
        match self {
            Operator::Add => x.checked_add(&y).ok_or(ExpressionError::Overflow),
            Operator::Sub => x.checked_sub(&y).ok_or(ExpressionError::Overflow),
            Operator::Mul => x.checked_mul(&y).ok_or(ExpressionError::Overflow),
            Operator::Div => {
                if y.is_zero() {
                    return Err(ExpressionError::DivisionByZero);
                }
                x.checked_div(&y).ok_or(ExpressionError::Overflow)
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An input number together with the slot that identifies it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operand {
    pub value: Number,
    pub slot: usize,
}

impl Operand {
    pub fn new(value: Number, slot: usize) -> Self {
        Self { value, slot }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Operand(Operand),
    Operator(Operator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Operand(operand) => write!(f, "{}", operand.value),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// A candidate expression in postfix order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Program(Vec<Token>);

impl Program {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn operators(&self) -> impl Iterator<Item = Operator> + '_ {
        self.0.iter().filter_map(|token| match token {
            Token::Operator(op) => Some(*op),
            Token::Operand(_) => None,
        })
    }
}

impl From<Vec<Token>> for Program {
    fn from(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

impl FromStr for Program {
    type Err = ExpressionError;

    /// Parses whitespace separated postfix tokens; operands get slots in order of appearance.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut slot = 0;
        let mut tokens = Vec::new();
        for word in s.split_whitespace() {
            if let Some(op) = Operator::from_symbol(word) {
                tokens.push(Token::Operator(op));
            } else if let Ok(value) = word.parse::<i64>() {
                tokens.push(Token::Operand(Operand::new(Number::from_integer(value), slot)));
                slot += 1;
            } else {
                return Err(ExpressionError::UnknownToken(word.to_string()));
            }
        }
        Ok(Self(tokens))
    }
}
