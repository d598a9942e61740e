use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculationQuery {
    pub n1: Option<String>,
    pub n2: Option<String>,
}

/// One inbound calculation, still unvalidated.
#[derive(Debug, Clone)]
pub struct CalculationRequest {
    pub operation: String,
    pub n1: Option<String>,
    pub n2: Option<String>,
}

impl CalculationRequest {
    pub fn new(operation: impl Into<String>, query: CalculationQuery) -> Self {
        Self {
            operation: operation.into(),
            n1: query.n1,
            n2: query.n2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub operation: String,
    pub n1: f64,
    pub n2: f64,
    pub result: f64,
}
