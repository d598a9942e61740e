//! The fixed registry of arithmetic operations served by the calculator.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("Cannot divide by zero")]
    DivideByZero,
    #[error("Result is not a finite number")]
    NonFiniteResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Registry order; also the order used when listing supported names.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Looks up an operation by its exact, case-sensitive name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|operation| operation.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    pub fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(|operation| operation.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn apply(self, n1: f64, n2: f64) -> Result<f64, ArithmeticError> {
        let result = match self {
            Self::Add => n1 + n2,
            Self::Subtract => n1 - n2,
            Self::Multiply => n1 * n2,
            Self::Divide => {
                if n2 == 0.0 {
                    return Err(ArithmeticError::DivideByZero);
                }
                n1 / n2
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(ArithmeticError::NonFiniteResult)
        }
    }
}
