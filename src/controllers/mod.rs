pub mod venue;
pub mod seats;
pub mod cart;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(venue::routes())
        .merge(seats::routes())
        .merge(cart::routes())
}
