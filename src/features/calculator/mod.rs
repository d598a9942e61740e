pub mod dto;
pub mod handler;
mod helpers;
pub mod operations;
pub mod service;

pub use dto::{CalculationQuery, CalculationRequest, CalculationResult};
pub use handler::handle_calculate;
pub use helpers::parse_operand;
pub use operations::{ArithmeticError, Operation};
pub use service::{CalculatorService, SERVICE_NAME};
