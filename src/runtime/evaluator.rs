//! Tree-walking evaluator

use log::trace;

use crate::frontend::ast::Node;
use crate::frontend::token::{Token, TokenKind, TokenValue};
use crate::runtime::{ArithmeticError, Environment, ExecutionContext, Number};
use crate::utils::{Error, Interval, Result};

/// Evaluate `node` against `env`, raising runtime errors in `ctx`.
///
/// Assignments bind in `env` itself, never in one of its parents.
pub fn evaluate(
    node: &Node,
    env: &mut Environment<'_>,
    ctx: &ExecutionContext<'_>,
) -> Result<Number> {
    match node {
        Node::NumberLiteral { token } => Ok(literal(token)),

        Node::UnaryOp { op, operand, interval } => {
            let value = evaluate(operand, env, ctx)?;
            let result = match op.kind {
                TokenKind::Minus => Number::new(0i64).subtract(&value),
                _ => value,
            };
            Ok(result.with_interval(interval.clone()))
        }

        Node::BinaryOp { op, left, right, interval } => {
            let lhs = evaluate(left, env, ctx)?;
            let rhs = evaluate(right, env, ctx)?;
            let result = match op.kind {
                TokenKind::Plus => Ok(lhs.add(&rhs)),
                TokenKind::Minus => Ok(lhs.subtract(&rhs)),
                TokenKind::Multiply => Ok(lhs.multiply(&rhs)),
                TokenKind::Divide => lhs.divide(&rhs),
                TokenKind::Power => lhs.power(&rhs),
                other => unreachable!("parser never builds a binary {:?} node", other),
            };
            let result = result.map_err(|err| arithmetic_error(err, interval, ctx))?;
            trace!("{} = {}", node, result);
            Ok(result.with_interval(interval.clone()))
        }

        Node::VarAssign { name, value, interval } => {
            let value = evaluate(value, env, ctx)?.with_interval(interval.clone());
            let name = identifier(name);
            trace!("bind {} = {}", name, value);
            env.set(name, value.clone());
            Ok(value)
        }

        Node::VarAccess { name } => {
            let interval = name.interval.clone();
            let name = identifier(name);
            match env.get(name) {
                Some(value) => Ok(value.clone().with_interval(interval)),
                None => Err(ctx.error(format!("unknown identifier '{}'", name), interval)),
            }
        }
    }
}

fn literal(token: &Token) -> Number {
    let number = match &token.value {
        Some(TokenValue::Int(v)) => Number::new(*v),
        Some(TokenValue::Float(v)) => Number::new(*v),
        other => unreachable!("number literal carries {:?}", other),
    };
    number.with_interval(token.interval.clone())
}

fn identifier(token: &Token) -> &str {
    token.text().unwrap_or_default()
}

/// Operands always have intervals once evaluated; `fallback` covers the rest
fn arithmetic_error(
    err: ArithmeticError,
    fallback: &Interval,
    ctx: &ExecutionContext<'_>,
) -> Error {
    let interval = err.interval().cloned().unwrap_or_else(|| fallback.clone());
    ctx.error(err.to_string(), interval)
}
