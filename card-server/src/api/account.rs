//! Account-wide endpoints

use axum::Json;
use axum::extract::State;
use shared::error::AppError;

use super::ApiResult;
use super::dto::{AccountBalanceResponse, ListTransactionsResponse};
use crate::state::AppState;

/// GET /account/balance
pub async fn get_balance(State(state): State<AppState>) -> ApiResult<AccountBalanceResponse> {
    let balance = state
        .cards
        .get_account_balance()
        .await
        .map_err(AppError::from)?;
    Ok(Json(balance.into()))
}

/// GET /account/transactions
pub async fn list_transactions(
    State(state): State<AppState>,
) -> ApiResult<ListTransactionsResponse> {
    let txs = state
        .cards
        .list_transactions()
        .await
        .map_err(AppError::from)?;
    Ok(Json(txs.into()))
}
