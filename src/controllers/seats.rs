//! seats.rs
//!
//! Места на карте: список маркеров для отрисовки, карточка места,
//! клик (выбор/снятие) и наведение.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::controllers::cart::CartResponse;
use crate::models::{Seat, SeatStatus};
use crate::services::seat_map::SeatAction;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/seats", get(list_seats))
        .route("/seats/{id}", get(get_seat))
        .route("/seats/{id}/toggle", post(toggle_seat))
        .route("/hover", get(get_hover).put(set_hover))
}

// Маркер для отрисовки круга на карте
#[derive(Debug, Serialize)]
pub struct SeatMarker {
    pub id: String,
    pub x: i32,
    pub y: i32,
    pub zone: String,
    pub section: String,
    pub row: u32,
    pub seat: u32,
    pub status: SeatStatus,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub seat_id: String,
    pub action: SeatAction,
    pub status: Option<SeatStatus>,
    pub cart: CartResponse,
}

#[derive(Debug, Deserialize)]
pub struct HoverRequest {
    pub seat_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HoverResponse {
    pub seat: Option<Seat>,
}

// GET /api/seats
pub async fn list_seats(State(state): State<Arc<AppState>>) -> Json<Vec<SeatMarker>> {
    let map = state.seat_map.read().await;

    let markers = map
        .layout()
        .positions
        .iter()
        .map(|pos| SeatMarker {
            id: pos.id.clone(),
            x: pos.x,
            y: pos.y,
            zone: pos.zone.clone(),
            section: pos.section.clone(),
            row: pos.row,
            seat: pos.seat,
            status: map.status(&pos.id).unwrap_or(SeatStatus::Available),
            color: map.color(&pos.id).to_string(),
        })
        .collect();

    Json(markers)
}

// GET /api/seats/{id}
pub async fn get_seat(
    State(state): State<Arc<AppState>>,
    Path(seat_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let map = state.seat_map.read().await;
    map.seat(&seat_id)
        .map(|seat| (StatusCode::OK, Json(seat)))
        .ok_or((StatusCode::NOT_FOUND, format!("Seat {} not found", seat_id)))
}

// POST /api/seats/{id}/toggle
pub async fn toggle_seat(
    State(state): State<Arc<AppState>>,
    Path(seat_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut map = state.seat_map.write().await;

    let action = map.toggle(&seat_id);
    if action == SeatAction::Unknown {
        tracing::warn!("toggle_seat: unknown seat {}", seat_id);
        return Err((StatusCode::NOT_FOUND, format!("Seat {} not found", seat_id)));
    }

    let response = ToggleResponse {
        status: map.status(&seat_id),
        action,
        cart: CartResponse::from_map(&map),
        seat_id,
    };
    Ok((StatusCode::OK, Json(response)))
}

// GET /api/hover
pub async fn get_hover(State(state): State<Arc<AppState>>) -> Json<HoverResponse> {
    let map = state.seat_map.read().await;
    Json(HoverResponse { seat: map.hovered() })
}

// PUT /api/hover
pub async fn set_hover(
    State(state): State<Arc<AppState>>,
    Json(req): Json<HoverRequest>,
) -> Json<HoverResponse> {
    let mut map = state.seat_map.write().await;
    Json(HoverResponse {
        seat: map.hover(req.seat_id.as_deref()),
    })
}
