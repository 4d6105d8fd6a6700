use axum::{
    extract::{Path, State},
    Json,
};
use tracing::error;

use crate::error::PortfolioError;
use crate::models::portfolio::Portfolio;
use crate::server::SharedServerState;

/// `GET /api/v1/portfolio/{address}`
pub async fn get_portfolio(
    State(state): State<SharedServerState>,
    Path(address): Path<String>,
) -> Result<Json<Portfolio>, PortfolioError> {
    if address.trim().is_empty() {
        return Err(PortfolioError::InvalidAddress("wallet address is required".to_string()));
    }

    match state.tracker.build_portfolio(&address).await {
        Ok(portfolio) => Ok(Json(portfolio)),
        Err(e) => {
            if e.is_fatal() && !matches!(e, PortfolioError::InvalidAddress(_)) {
                error!("Failed to build portfolio for {}: {}", address, e);
            }
            Err(e)
        }
    }
}
