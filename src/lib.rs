pub mod config;
pub mod error;
pub mod models;
pub mod controllers;
pub mod services;

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use services::loader::load_layout;
use services::seat_map::SeatMap;

// Shared state для всего приложения
pub struct AppState {
    pub config: config::Config,
    pub seat_map: RwLock<SeatMap>,
}

impl AppState {
    /// Загружает площадку из файлов конфигурации и строит раскладку.
    pub fn new(config: config::Config) -> Result<Arc<Self>, error::LoadError> {
        let (venue, layout) = load_layout(&config.venue)?;
        Ok(Self::with_seat_map(config, SeatMap::new(venue, layout)))
    }

    pub fn with_seat_map(config: config::Config, seat_map: SeatMap) -> Arc<Self> {
        Arc::new(Self {
            config,
            seat_map: RwLock::new(seat_map),
        })
    }

    /// Перечитывает файлы и целиком заменяет раскладку. При ошибке старая раскладка остаётся.
    pub async fn reload(&self) -> Result<usize, error::LoadError> {
        let (venue, layout) = load_layout(&self.config.venue)?;
        let seats = layout.len();

        self.seat_map.write().await.replace_layout(venue, layout);
        info!("Layout reloaded: {} seats", seats);
        Ok(seats)
    }
}
