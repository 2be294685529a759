use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Expected exactly 4 operands, got {0}")]
    OperandCount(usize),
}
