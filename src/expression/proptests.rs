//! Property-based tests for evaluation and infix rendering.

use proptest::prelude::*;

use crate::expression::display::{Notation, format_program};
use crate::expression::errors::ExpressionError;
use crate::expression::eval::evaluate;
use crate::expression::token::{Number, Operand, Operator, Program, Token};

fn operator() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Sub),
        Just(Operator::Mul),
        Just(Operator::Div),
    ]
}

// Numbers, operators and push/apply choices for one well-formed program
fn program_parts() -> impl Strategy<Value = (Vec<i64>, Vec<Operator>, Vec<bool>)> {
    (1usize..=6).prop_flat_map(|n| {
        (
            prop::collection::vec(-9i64..=9, n),
            prop::collection::vec(operator(), n - 1),
            prop::collection::vec(any::<bool>(), 2 * n),
        )
    })
}

fn build_program(numbers: &[i64], operators: &[Operator], choices: &[bool]) -> Program {
    let mut tokens = Vec::with_capacity(numbers.len() + operators.len());
    let (mut ni, mut oi, mut ci, mut depth) = (0, 0, 0, 0usize);

    while ni < numbers.len() || oi < operators.len() {
        let can_push = ni < numbers.len();
        let can_apply = depth >= 2 && oi < operators.len();
        let push = if can_push && can_apply {
            ci += 1;
            choices.get(ci - 1).copied().unwrap_or(true)
        } else {
            can_push
        };

        if push {
            tokens.push(Token::Operand(Operand::new(
                Number::from_integer(numbers[ni]),
                ni,
            )));
            ni += 1;
            depth += 1;
        } else {
            tokens.push(Token::Operator(operators[oi]));
            oi += 1;
            depth -= 1;
        }
    }

    Program::new(tokens)
}

/// Minimal standard-precedence infix evaluator used to check rendered output
struct InfixParser<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> InfixParser<'a> {
    fn evaluate(text: &'a str) -> Result<Number, ExpressionError> {
        let mut parser = InfixParser {
            chars: text.chars().peekable(),
        };
        let value = parser.sum()?;
        parser.skip_whitespace();
        match parser.chars.next() {
            None => Ok(value),
            Some(c) => Err(ExpressionError::UnknownToken(c.to_string())),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.chars.next();
        }
    }

    fn sum(&mut self) -> Result<Number, ExpressionError> {
        let mut value = self.product()?;
        loop {
            self.skip_whitespace();
            let op = match self.chars.peek() {
                Some('+') => Operator::Add,
                Some('-') => Operator::Sub,
                _ => return Ok(value),
            };
            self.chars.next();
            value = op.apply(value, self.product()?)?;
        }
    }

    fn product(&mut self) -> Result<Number, ExpressionError> {
        let mut value = self.atom()?;
        loop {
            self.skip_whitespace();
            let op = match self.chars.peek() {
                Some('*') => Operator::Mul,
                Some('/') => Operator::Div,
                _ => return Ok(value),
            };
            self.chars.next();
            value = op.apply(value, self.atom()?)?;
        }
    }

    fn atom(&mut self) -> Result<Number, ExpressionError> {
        self.skip_whitespace();
        if self.chars.peek() == Some(&'(') {
            self.chars.next();
            let value = self.sum()?;
            self.skip_whitespace();
            return match self.chars.next() {
                Some(')') => Ok(value),
                other => Err(ExpressionError::UnknownToken(format!("{:?}", other))),
            };
        }

        let mut literal = String::new();
        if self.chars.peek() == Some(&'-') {
            literal.push('-');
            self.chars.next();
        }
        while let Some(c) = self.chars.peek().copied().filter(|c| c.is_ascii_digit()) {
            literal.push(c);
            self.chars.next();
        }
        literal
            .parse::<i64>()
            .map(Number::from_integer)
            .map_err(|_| ExpressionError::UnknownToken(literal))
    }
}

#[test]
fn infix_parser_follows_standard_precedence() {
    assert_eq!(InfixParser::evaluate("2 + 3 * 4"), Ok(Number::from_integer(14)));
    assert_eq!(InfixParser::evaluate("(2 + 3) * 4"), Ok(Number::from_integer(20)));
    assert_eq!(InfixParser::evaluate("2 - 3 - 4"), Ok(Number::from_integer(-5)));
    assert_eq!(InfixParser::evaluate("2 - -3"), Ok(Number::from_integer(5)));
}

proptest! {
    #[test]
    fn evaluation_is_deterministic((numbers, operators, choices) in program_parts()) {
        let program = build_program(&numbers, &operators, &choices);
        prop_assert_eq!(evaluate(&program), evaluate(&program));
    }

    #[test]
    fn well_formed_programs_never_leave_the_stack_unreduced(
        (numbers, operators, choices) in program_parts()
    ) {
        let program = build_program(&numbers, &operators, &choices);
        match evaluate(&program) {
            Ok(_) | Err(ExpressionError::DivisionByZero) | Err(ExpressionError::Overflow) => {}
            Err(e) => prop_assert!(false, "unexpected error {} for '{}'", e, program),
        }
    }

    #[test]
    fn infix_rendering_preserves_value((numbers, operators, choices) in program_parts()) {
        let program = build_program(&numbers, &operators, &choices);
        if let Ok(expected) = evaluate(&program) {
            let rendered = format_program(&program, Notation::Infix);
            prop_assert!(rendered.is_ok());
            if let Ok(text) = rendered {
                prop_assert_eq!(InfixParser::evaluate(&text), Ok(expected), "rendered '{}'", text);
            }
        }
    }

    #[test]
    fn postfix_rendering_parses_back((numbers, operators, choices) in program_parts()) {
        let program = build_program(&numbers, &operators, &choices);
        let text = program.to_string();
        prop_assert_eq!(text.parse::<Program>(), Ok(program));
    }
}
