use std::sync::Arc;

use crate::features::calculator::CalculatorService;

#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<CalculatorService>,
}

impl AppState {
    pub fn new(calculator: Arc<CalculatorService>) -> Self {
        Self { calculator }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(CalculatorService::new()))
    }
}
