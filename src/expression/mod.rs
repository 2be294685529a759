//! Expression trees over four operands: construction by shape, evaluation,
//! rendering and parsing of rendered solutions.

mod ast;
mod display;
mod errors;
mod eval;
mod parse;
mod shape;

pub use ast::{Expression, Operator};
pub use errors::ExpressionError;
pub use shape::Shape;
