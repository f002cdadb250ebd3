//! Jimmy Script
//!
//! A tiny arithmetic expression language. Source text is tokenized, parsed
//! into an expression tree and evaluated against a caller-owned
//! [`Environment`]; every failure carries the source interval it came from.
//!
//! ```
//! use jimmy_script::{run, Environment};
//!
//! let mut env = Environment::new();
//! run("let x = 2 ^ 3", "<doc>", &mut env).unwrap();
//! assert_eq!(run("x + 1", "<doc>", &mut env).unwrap().to_string(), "9");
//! ```

pub mod feedback;
pub mod frontend;
pub mod runtime;
pub mod utils;

use log::debug;

pub use frontend::ast::Node;
pub use runtime::{Environment, ExecutionContext, Number, NumericValue, PROGRAM_CONTEXT};
pub use utils::{Error, Result, SourceUnit};

/// Tokenize, parse and evaluate `source_text` against `environment`.
///
/// Bindings made by the submission persist in `environment`. Lexical and
/// syntax errors stop before anything is evaluated, and an assignment whose
/// value fails to evaluate binds nothing.
pub fn run(
    source_text: &str,
    source_label: &str,
    environment: &mut Environment<'_>,
) -> Result<Number> {
    let ast = check(source_text, source_label)?;
    let context = ExecutionContext::root(PROGRAM_CONTEXT);
    let value = runtime::evaluate(&ast, environment, &context)?;
    debug!("{}: {} => {}", source_label, ast, value);
    Ok(value)
}

/// Tokenize and parse without evaluating
pub fn check(source_text: &str, source_label: &str) -> Result<Node> {
    let source = SourceUnit::new(source_label, source_text);
    let tokens = frontend::lexer::tokenize(source)?;
    frontend::parser::parse(tokens)
}
