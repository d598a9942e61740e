use std::net::SocketAddr;

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{ConnectInfo, Path, Query, State};
use axum::http::Uri;

use crate::core::error::AppError;
use crate::features::calculator::dto::{CalculationQuery, CalculationRequest, CalculationResult};
use crate::server::AppState;

pub async fn handle_calculate(
    State(state): State<AppState>,
    uri: Uri,
    operation: Result<Path<String>, PathRejection>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    query: Result<Query<CalculationQuery>, QueryRejection>,
) -> Result<Json<CalculationResult>, AppError> {
    // A segment that does not decode to UTF-8 is kept in its raw, still-encoded
    // form; it never names a registered operation.
    let operation = match operation {
        Ok(Path(operation)) => operation,
        Err(_) => uri.path().trim_matches('/').to_string(),
    };
    // A query that cannot be decoded counts as missing operands.
    let query = query.map(|Query(query)| query).unwrap_or_default();
    let client = connect_info.map(|ConnectInfo(addr)| addr);

    state
        .calculator
        .calculate(CalculationRequest::new(operation, query), client)
        .map(Json)
}
