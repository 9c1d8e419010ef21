//! HTTP routes for card-server

pub mod account;
pub mod cards;
pub mod dto;
pub mod health;

use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Json, Router};
use http::{Method, StatusCode};
use shared::error::AppError;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Create the router with all middleware
///
/// `request_timeout` drops the handler future when it elapses, which cancels
/// any in-flight store or provider call, and answers 408.
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::HEAD])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/account/balance", get(account::get_balance))
        .route("/account/transactions", get(account::list_transactions))
        .route("/cards", post(cards::create_card).get(cards::list_cards))
        .route("/cards/{id}", get(cards::get_card))
        .route("/cards/{id}/transactions", get(cards::list_card_transactions))
        .route(
            "/cards/{id}/balance-history",
            get(cards::list_card_balance_history),
        )
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::new())
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    request_timeout,
                )),
        )
        .with_state(state)
}
