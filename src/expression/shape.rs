use crate::expression::ast::{Expression, Operator};

/// A binary-tree topology over four ordered leaves `a, b, c, d`.
///
/// Only the five shapes with two parenthesis pairs are enumerated. Shapes
/// with zero or one pair mostly restate solutions these already produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `((a ∘ b) ∘ c) ∘ d`
    LeftDeep,
    /// `(a ∘ (b ∘ c)) ∘ d`
    InnerLeft,
    /// `a ∘ ((b ∘ c) ∘ d)`
    InnerRight,
    /// `a ∘ (b ∘ (c ∘ d))`
    RightDeep,
    /// `(a ∘ b) ∘ (c ∘ d)`
    Balanced,
}

impl Shape {
    /// All shapes in enumeration order
    pub const ALL: [Shape; 5] = [
        Shape::LeftDeep,
        Shape::InnerLeft,
        Shape::InnerRight,
        Shape::RightDeep,
        Shape::Balanced,
    ];

    pub fn index(self) -> usize {
        match self {
            Shape::LeftDeep => 0,
            Shape::InnerLeft => 1,
            Shape::InnerRight => 2,
            Shape::RightDeep => 3,
            Shape::Balanced => 4,
        }
    }

    /// Builds the tree for this shape. `ops` are given in textual order, so
    /// `ops[0]` always sits between `a` and `b`.
    pub fn build(self, leaves: [f64; 4], ops: [Operator; 3]) -> Expression {
        let [a, b, c, d] = leaves.map(Expression::Number);
        let [o1, o2, o3] = ops;
        match self {
            Shape::LeftDeep => Expression::binary(
                o3,
                Expression::binary(o2, Expression::binary(o1, a, b), c),
                d,
            ),
            Shape::InnerLeft => Expression::binary(
                o3,
                Expression::binary(o1, a, Expression::binary(o2, b, c)),
                d,
            ),
            Shape::InnerRight => Expression::binary(
                o1,
                a,
                Expression::binary(o3, Expression::binary(o2, b, c), d),
            ),
            Shape::RightDeep => Expression::binary(
                o1,
                a,
                Expression::binary(o2, b, Expression::binary(o3, c, d)),
            ),
            Shape::Balanced => Expression::binary(
                o2,
                Expression::binary(o1, a, b),
                Expression::binary(o3, c, d),
            ),
        }
    }

    /// Evaluates the shape directly without building a tree
    #[inline]
    pub fn evaluate(self, leaves: [f64; 4], ops: [Operator; 3]) -> f64 {
        let [a, b, c, d] = leaves;
        let [o1, o2, o3] = ops;
        match self {
            Shape::LeftDeep => o3.apply(o2.apply(o1.apply(a, b), c), d),
            Shape::InnerLeft => o3.apply(o1.apply(a, o2.apply(b, c)), d),
            Shape::InnerRight => o1.apply(a, o3.apply(o2.apply(b, c), d)),
            Shape::RightDeep => o1.apply(a, o2.apply(b, o3.apply(c, d))),
            Shape::Balanced => o2.apply(o1.apply(a, b), o3.apply(c, d)),
        }
    }
}
