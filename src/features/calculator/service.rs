use std::net::SocketAddr;

use tracing::field::display;
use tracing::{error, info, info_span};

use crate::core::error::AppError;
use crate::features::calculator::dto::{CalculationRequest, CalculationResult};
use crate::features::calculator::helpers::parse_operand;
use crate::features::calculator::operations::Operation;

pub const SERVICE_NAME: &str = "calc-service";

pub struct CalculatorService;

impl Default for CalculatorService {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorService {
    pub fn new() -> Self {
        Self
    }

    /// Validates and runs one calculation, emitting exactly one log event.
    ///
    /// An unknown operation is reported before bad operands.
    pub fn calculate(
        &self,
        request: CalculationRequest,
        client: Option<SocketAddr>,
    ) -> Result<CalculationResult, AppError> {
        let span = info_span!("calculation", service = SERVICE_NAME);
        let _entered = span.enter();

        let n1 = parse_operand(request.n1.as_deref());
        let n2 = parse_operand(request.n2.as_deref());

        let Some(operation) = Operation::from_name(&request.operation) else {
            error!(operation = %request.operation, "invalid operation requested");
            return Err(AppError::invalid_operation(request.operation));
        };

        let (Some(n1), Some(n2)) = (n1, n2) else {
            error!(
                n1 = ?request.n1,
                n2 = ?request.n2,
                "invalid input: n1 or n2 is not a number"
            );
            return Err(AppError::InvalidNumericInput);
        };

        let result = match operation.apply(n1, n2) {
            Ok(result) => result,
            Err(err) => {
                error!(
                    operation = operation.name(),
                    n1,
                    n2,
                    client = client.map(display),
                    "{err}"
                );
                return Err(AppError::from(err));
            }
        };

        info!(
            operation = operation.name(),
            n1,
            n2,
            client = client.map(display),
            "operation {} requested with parameters {n1} and {n2}",
            operation.name()
        );

        Ok(CalculationResult {
            operation: operation.name().to_string(),
            n1,
            n2,
            result,
        })
    }
}
