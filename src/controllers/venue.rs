//! venue.rs
//!
//! Описание площадки для слоя отображения: ruedo, зоны с ценами,
//! секции и линии-разделители. Плюс перезагрузка раскладки с диска.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::models::{EventInfo, Ruedo, ZoneLayout};
use crate::services::layout::{Separator, ZoneSections};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/venue", get(get_venue))
        .route("/layout/reload", post(reload_layout))
}

#[derive(Debug, Serialize)]
pub struct ZonePrice {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub price_label: String,
    pub color: String,
    pub layout: ZoneLayout,
}

#[derive(Debug, Serialize)]
pub struct VenueResponse {
    pub name: String,
    pub currency: String,
    pub event: Option<EventInfo>,
    pub ruedo: Ruedo,
    pub zones: Vec<ZonePrice>,
    pub sections: Vec<ZoneSections>,
    pub separators: Vec<Separator>,
    pub total_seats: usize,
}

pub fn price_label(price: f64, currency: &str) -> String {
    format!("${:.2} {}", price, currency)
}

// GET /api/venue
pub async fn get_venue(State(state): State<Arc<AppState>>) -> Json<VenueResponse> {
    let map = state.seat_map.read().await;
    let venue = map.venue();
    let layout = map.layout();

    let zones = venue
        .zones
        .iter()
        .map(|z| ZonePrice {
            id: z.id.clone(),
            name: z.name.clone(),
            price: z.price,
            price_label: price_label(z.price, &venue.currency),
            color: z.color.clone(),
            layout: z.layout,
        })
        .collect();

    Json(VenueResponse {
        name: venue.name.clone(),
        currency: venue.currency.clone(),
        event: venue.event.clone(),
        ruedo: venue.ruedo,
        zones,
        sections: layout.zones.clone(),
        separators: layout.separators.clone(),
        total_seats: layout.len(),
    })
}

// POST /api/layout/reload
pub async fn reload_layout(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    match state.reload().await {
        Ok(seats) => Ok((StatusCode::OK, Json(serde_json::json!({ "total_seats": seats })))),
        Err(e) => {
            tracing::error!("reload_layout failed: {}", e);
            Err((StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))
        }
    }
}
