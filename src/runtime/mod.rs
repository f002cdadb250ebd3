//! Runtime module - Values, Environments, Evaluation

mod number;
mod environment;
mod context;
mod evaluator;

pub use number::{ArithmeticError, Number, NumericValue};
pub use environment::Environment;
pub use context::{ExecutionContext, PROGRAM_CONTEXT};
pub use evaluator::evaluate;
