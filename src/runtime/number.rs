//! The numeric value type and its arithmetic

use std::fmt;

use thiserror::Error;

use crate::utils::Interval;

/// Integer or floating point payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Int(i64),
    Float(f64),
}

impl NumericValue {
    pub fn as_f64(self) -> f64 {
        match self {
            NumericValue::Int(v) => v as f64,
            NumericValue::Float(v) => v,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            NumericValue::Int(v) => v == 0,
            NumericValue::Float(v) => v == 0.0,
        }
    }

    fn is_negative(self) -> bool {
        match self {
            NumericValue::Int(v) => v < 0,
            NumericValue::Float(v) => v < 0.0,
        }
    }

    /// Int op Int stays Int unless it overflows; anything with a Float is Float
    fn combine(
        self,
        other: NumericValue,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> NumericValue {
        match (self, other) {
            (NumericValue::Int(a), NumericValue::Int(b)) => int_op(a, b)
                .map(NumericValue::Int)
                .unwrap_or_else(|| NumericValue::Float(float_op(a as f64, b as f64))),
            (a, b) => NumericValue::Float(float_op(a.as_f64(), b.as_f64())),
        }
    }
}

impl From<i64> for NumericValue {
    fn from(v: i64) -> Self {
        NumericValue::Int(v)
    }
}

impl From<f64> for NumericValue {
    fn from(v: f64) -> Self {
        NumericValue::Float(v)
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::Int(v) => write!(f, "{}", v),
            // Debug keeps the fractional part: 3.0, not 3
            NumericValue::Float(v) => write!(f, "{:?}", v),
        }
    }
}

/// Arithmetic failure, carrying the interval of the offending operand
#[derive(Error, Debug, Clone)]
pub enum ArithmeticError {
    #[error("cannot divide by zero")]
    DivisionByZero { divisor: Option<Interval> },

    #[error("cannot raise zero to a negative power")]
    ZeroToNegativePower { exponent: Option<Interval> },
}

impl ArithmeticError {
    pub fn interval(&self) -> Option<&Interval> {
        match self {
            Self::DivisionByZero { divisor } => divisor.as_ref(),
            Self::ZeroToNegativePower { exponent } => exponent.as_ref(),
        }
    }
}

/// The runtime value of every expression.
///
/// Operations never mutate their operands; results start without an
/// interval and the evaluator attaches the node's interval.
#[derive(Debug, Clone)]
pub struct Number {
    pub value: NumericValue,
    pub interval: Option<Interval>,
}

impl Number {
    pub fn new(value: impl Into<NumericValue>) -> Self {
        Self {
            value: value.into(),
            interval: None,
        }
    }

    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn add(&self, other: &Number) -> Number {
        Number::new(self.value.combine(other.value, i64::checked_add, |a, b| a + b))
    }

    pub fn subtract(&self, other: &Number) -> Number {
        Number::new(self.value.combine(other.value, i64::checked_sub, |a, b| a - b))
    }

    pub fn multiply(&self, other: &Number) -> Number {
        Number::new(self.value.combine(other.value, i64::checked_mul, |a, b| a * b))
    }

    /// Always a Float quotient
    pub fn divide(&self, other: &Number) -> Result<Number, ArithmeticError> {
        if other.value.is_zero() {
            return Err(ArithmeticError::DivisionByZero {
                divisor: other.interval.clone(),
            });
        }
        Ok(Number::new(self.value.as_f64() / other.value.as_f64()))
    }

    /// Int ^ non-negative Int stays Int (promoting on overflow); every
    /// other combination is Float
    pub fn power(&self, other: &Number) -> Result<Number, ArithmeticError> {
        if self.value.is_zero() && other.value.is_negative() {
            return Err(ArithmeticError::ZeroToNegativePower {
                exponent: other.interval.clone(),
            });
        }

        let value = match (self.value, other.value) {
            (NumericValue::Int(base), NumericValue::Int(exp)) if exp >= 0 => u32::try_from(exp)
                .ok()
                .and_then(|exp| base.checked_pow(exp))
                .map(NumericValue::Int)
                .unwrap_or_else(|| NumericValue::Float((base as f64).powf(exp as f64))),
            (base, exp) => NumericValue::Float(base.as_f64().powf(exp.as_f64())),
        };
        Ok(Number::new(value))
    }
}

/// Numbers compare by value only
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
