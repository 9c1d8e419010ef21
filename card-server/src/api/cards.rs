//! Card endpoints

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use http::StatusCode;
use shared::CreateCardParams;
use shared::error::AppError;

use super::ApiResult;
use super::dto::{
    CardResponse, CreateCardRequest, CreateCardResponse, ListBalanceChangesResponse,
    ListCardsResponse, ListTransactionsResponse,
};
use crate::state::AppState;

/// POST /cards
pub async fn create_card(
    State(state): State<AppState>,
    payload: Result<Json<CreateCardRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateCardResponse>), AppError> {
    let Json(req) = payload.map_err(|e| AppError::invalid_request(e.body_text()))?;

    let params = CreateCardParams::from(req);
    params.validate()?;

    let created = state
        .cards
        .create_card(&params)
        .await
        .map_err(AppError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateCardResponse {
            card_id: created.card_id,
        }),
    ))
}

/// GET /cards
pub async fn list_cards(State(state): State<AppState>) -> ApiResult<ListCardsResponse> {
    let cards = state.cards.list_cards().await.map_err(AppError::from)?;
    Ok(Json(ListCardsResponse {
        cards: cards.into_iter().map(Into::into).collect(),
    }))
}

/// GET /cards/{id}
pub async fn get_card(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
) -> ApiResult<CardResponse> {
    let card = state.cards.get_card(&card_id).await.map_err(AppError::from)?;
    Ok(Json(card.into()))
}

/// GET /cards/{id}/transactions
pub async fn list_card_transactions(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
) -> ApiResult<ListTransactionsResponse> {
    let txs = state
        .cards
        .list_card_transactions(&card_id)
        .await
        .map_err(AppError::from)?;
    Ok(Json(txs.into()))
}

/// GET /cards/{id}/balance-history
pub async fn list_card_balance_history(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
) -> ApiResult<ListBalanceChangesResponse> {
    let changes = state
        .cards
        .list_card_balance_history(&card_id)
        .await
        .map_err(AppError::from)?;
    Ok(Json(ListBalanceChangesResponse {
        balance_changes: changes.into_iter().map(Into::into).collect(),
    }))
}
