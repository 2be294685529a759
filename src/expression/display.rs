use std::fmt;

use crate::expression::ast::Expression;

/// Renders every compound subexpression in parentheses. The root is left
/// bare, so a left-deep tree reads `((a + b) + c) + d`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_operand(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", n),
                _ => write!(f, "({})", expr),
            }
        }

        match self {
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => {
                write_operand(f, l)?;
                if let Some(op) = self.operator() {
                    write!(f, " {} ", op.symbol())?;
                }
                write_operand(f, r)
            }
        }
    }
}
