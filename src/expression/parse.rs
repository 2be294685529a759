use std::str::FromStr;

use log::debug;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

/// Recursive descent over standard infix precedence: `*` and `/` bind
/// tighter than `+` and `-`, both left-associative, parentheses override.
struct Parser<'a> {
    chars: Vec<char>,
    pos: usize,
    source: &'a str,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            source,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.get(self.pos).is_some_and(|c| c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.chars.get(self.pos).copied()
    }

    fn parse_expr(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.parse_term()?;
        while let Some(op) = self
            .peek()
            .and_then(Operator::from_symbol)
            .filter(|op| matches!(op, Operator::Add | Operator::Sub))
        {
            self.pos += 1;
            let right = self.parse_term()?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.parse_atom()?;
        while let Some(op) = self
            .peek()
            .and_then(Operator::from_symbol)
            .filter(|op| matches!(op, Operator::Mul | Operator::Div))
        {
            self.pos += 1;
            let right = self.parse_atom()?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_atom(&mut self) -> Result<Expression, ExpressionError> {
        match self.peek() {
            None => Err(ExpressionError::UnexpectedEnd),
            Some('(') => {
                self.pos += 1;
                let inner = self.parse_expr()?;
                match self.peek() {
                    Some(')') => {
                        self.pos += 1;
                        Ok(inner)
                    }
                    Some(ch) => Err(ExpressionError::UnexpectedChar {
                        ch,
                        position: self.pos,
                    }),
                    None => Err(ExpressionError::UnexpectedEnd),
                }
            }
            Some(ch) if ch == '-' || ch == '.' || ch.is_ascii_digit() => self.parse_number(),
            Some(ch) => Err(ExpressionError::UnexpectedChar {
                ch,
                position: self.pos,
            }),
        }
    }

    fn parse_number(&mut self) -> Result<Expression, ExpressionError> {
        let start = self.pos;
        if self.chars.get(self.pos) == Some(&'-') {
            self.pos += 1;
        }
        while self
            .chars
            .get(self.pos)
            .is_some_and(|c| c.is_ascii_digit() || *c == '.')
        {
            self.pos += 1;
        }
        let literal: String = self
            .chars
            .get(start..self.pos)
            .unwrap_or_default()
            .iter()
            .collect();
        literal
            .parse::<f64>()
            .map(Expression::Number)
            .map_err(|_| ExpressionError::InvalidNumber(literal))
    }

    fn finish(mut self) -> Result<Expression, ExpressionError> {
        let expr = self.parse_expr()?;
        match self.peek() {
            None => {
                debug!("Parsed '{}' as {}", self.source, expr);
                Ok(expr)
            }
            Some(ch) => Err(ExpressionError::UnexpectedChar {
                ch,
                position: self.pos,
            }),
        }
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    /// Parses an infix expression such as `(8 - 4) * (7 - 1)`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new(s).finish()
    }
}
