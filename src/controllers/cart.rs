//! cart.rs
//!
//! Корзина выбранных мест: просмотр, удаление одного места, очистка.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::controllers::venue::price_label;
use crate::services::seat_map::{SeatAction, SeatMap, ZoneGroup};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/cart", get(get_cart).delete(clear_cart))
        .route("/cart/{id}", delete(remove_seat))
}

#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub groups: Vec<ZoneGroup>,
    pub total_seats: usize,
    pub total_price: f64,
    pub total_label: String,
}

impl CartResponse {
    pub fn from_map(map: &SeatMap) -> Self {
        let cart = map.cart();
        CartResponse {
            total_label: price_label(cart.total_price, &map.venue().currency),
            groups: cart.groups,
            total_seats: cart.total_seats,
            total_price: cart.total_price,
        }
    }
}

// GET /api/cart
pub async fn get_cart(State(state): State<Arc<AppState>>) -> Json<CartResponse> {
    let map = state.seat_map.read().await;
    Json(CartResponse::from_map(&map))
}

// DELETE /api/cart
pub async fn clear_cart(State(state): State<Arc<AppState>>) -> Json<CartResponse> {
    let mut map = state.seat_map.write().await;
    let removed = map.clear();
    tracing::info!("Cart cleared, {} seats released", removed);
    Json(CartResponse::from_map(&map))
}

// DELETE /api/cart/{id}
pub async fn remove_seat(
    State(state): State<Arc<AppState>>,
    Path(seat_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut map = state.seat_map.write().await;
    match map.deselect(&seat_id) {
        SeatAction::Unknown => Err((StatusCode::NOT_FOUND, format!("Seat {} not found", seat_id))),
        _ => Ok((StatusCode::OK, Json(CartResponse::from_map(&map)))),
    }
}
