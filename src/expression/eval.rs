use log::trace;

use crate::expression::ast::Expression;

impl Expression {
    /// Evaluates the tree with plain `f64` arithmetic.
    ///
    /// Division by zero is not an error: it yields an infinity or NaN, which
    /// never compares equal to a finite target.
    pub fn evaluate(&self) -> f64 {
        let value = match self {
            Expression::Number(n) => *n,
            Expression::Add(l, r) => l.evaluate() + r.evaluate(),
            Expression::Sub(l, r) => l.evaluate() - r.evaluate(),
            Expression::Mul(l, r) => l.evaluate() * r.evaluate(),
            Expression::Div(l, r) => l.evaluate() / r.evaluate(),
        };
        if !value.is_finite() {
            trace!("Expression {} evaluated to non-finite {}", self, value);
        }
        value
    }
}
