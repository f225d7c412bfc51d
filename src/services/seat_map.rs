//! seat_map.rs
//!
//! Состояние выбора мест (корзина) поверх сгенерированной раскладки.
//!
//! Все изменения идут через переходы `toggle`, `select`, `deselect`, `clear`, `hover`
//! и `replace_layout`. Занятые места выбрать нельзя, неизвестные id не ломают состояние.

use serde::Serialize;
use tracing::{debug, info};

use crate::models::{Seat, SeatStatus, VenueConfig};
use crate::services::layout::SeatLayout;

pub const SELECTED_COLOR: &str = "#EC4899";
pub const OCCUPIED_COLOR: &str = "#6B7280";
pub const FALLBACK_COLOR: &str = "#E5E7EB";

/// Результат перехода для одного места.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatAction {
    Selected,
    Deselected,
    Unchanged,
    Occupied,
    Unknown,
}

#[derive(Debug, Clone, Serialize)]
pub struct ZoneGroup {
    pub zone_name: String,
    pub seats: Vec<Seat>,
    pub subtotal: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CartSummary {
    pub groups: Vec<ZoneGroup>,
    pub total_seats: usize,
    pub total_price: f64,
}

#[derive(Debug, Clone)]
pub struct SeatMap {
    venue: VenueConfig,
    layout: SeatLayout,
    // порядок кликов, без повторов
    selected: Vec<String>,
    hovered: Option<String>,
}

impl SeatMap {
    pub fn new(venue: VenueConfig, layout: SeatLayout) -> Self {
        Self {
            venue,
            layout,
            selected: Vec::new(),
            hovered: None,
        }
    }

    pub fn venue(&self) -> &VenueConfig {
        &self.venue
    }

    pub fn layout(&self) -> &SeatLayout {
        &self.layout
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Текущий статус места с учётом выбора. `None` для неизвестного id.
    pub fn status(&self, id: &str) -> Option<SeatStatus> {
        let seat = self.layout.seat(id)?;
        if self.is_selected(id) {
            Some(SeatStatus::Selected)
        } else {
            Some(seat.status)
        }
    }

    pub fn color(&self, id: &str) -> &str {
        match (self.status(id), self.layout.seat(id)) {
            (Some(SeatStatus::Selected), _) => SELECTED_COLOR,
            (Some(SeatStatus::Occupied), _) => OCCUPIED_COLOR,
            (_, Some(seat)) if !seat.color.is_empty() => seat.color.as_str(),
            _ => FALLBACK_COLOR,
        }
    }

    /// Запись места с текущим статусом.
    pub fn seat(&self, id: &str) -> Option<Seat> {
        let mut seat = self.layout.seat(id)?.clone();
        if self.is_selected(id) {
            seat.status = SeatStatus::Selected;
        }
        Some(seat)
    }

    /// Клик по месту: выбрать, если свободно, снять выбор, если уже выбрано.
    pub fn toggle(&mut self, id: &str) -> SeatAction {
        if self.is_selected(id) {
            self.deselect(id)
        } else {
            self.select(id)
        }
    }

    pub fn select(&mut self, id: &str) -> SeatAction {
        let Some(seat) = self.layout.seat(id) else {
            return SeatAction::Unknown;
        };
        if seat.status == SeatStatus::Occupied {
            return SeatAction::Occupied;
        }
        if self.is_selected(id) {
            return SeatAction::Unchanged;
        }

        self.selected.push(id.to_string());
        debug!("Seat {} selected, {} in cart", id, self.selected.len());
        SeatAction::Selected
    }

    pub fn deselect(&mut self, id: &str) -> SeatAction {
        if self.layout.seat(id).is_none() {
            return SeatAction::Unknown;
        }

        let before = self.selected.len();
        self.selected.retain(|s| s != id);
        if self.selected.len() == before {
            return SeatAction::Unchanged;
        }

        debug!("Seat {} removed, {} in cart", id, self.selected.len());
        SeatAction::Deselected
    }

    /// Очищает корзину, возвращает число снятых мест.
    pub fn clear(&mut self) -> usize {
        let removed = self.selected.len();
        self.selected.clear();
        removed
    }

    /// Наведение на место. Неизвестный id сбрасывает подсказку.
    pub fn hover(&mut self, id: Option<&str>) -> Option<Seat> {
        self.hovered = id
            .filter(|id| self.layout.seat(id).is_some())
            .map(str::to_string);
        self.hovered()
    }

    pub fn hovered(&self) -> Option<Seat> {
        self.hovered.as_deref().and_then(|id| self.seat(id))
    }

    pub fn selected_seats(&self) -> Vec<Seat> {
        self.selected.iter().filter_map(|id| self.seat(id)).collect()
    }

    pub fn total_price(&self) -> f64 {
        // fold от +0.0: sum() пустого итератора f64 даёт -0.0
        self.selected_seats().iter().fold(0.0, |acc, s| acc + s.price)
    }

    /// Корзина, сгруппированная по названию зоны в порядке первого выбора.
    pub fn cart(&self) -> CartSummary {
        let seats = self.selected_seats();
        let total_seats = seats.len();
        let total_price = seats.iter().fold(0.0, |acc, s| acc + s.price);

        let mut groups: Vec<ZoneGroup> = Vec::new();
        for seat in seats {
            match groups.iter_mut().find(|g| g.zone_name == seat.zone_name) {
                Some(group) => {
                    group.subtotal += seat.price;
                    group.seats.push(seat);
                }
                None => groups.push(ZoneGroup {
                    zone_name: seat.zone_name.clone(),
                    subtotal: seat.price,
                    seats: vec![seat],
                }),
            }
        }

        CartSummary {
            groups,
            total_seats,
            total_price,
        }
    }

    /// Заменяет площадку и раскладку целиком. Выбор сохраняется только для мест,
    /// которые остались в новой раскладке и не стали занятыми.
    pub fn replace_layout(&mut self, venue: VenueConfig, layout: SeatLayout) {
        let before = self.selected.len();
        self.selected.retain(|id| {
            layout
                .seat(id)
                .is_some_and(|seat| seat.status != SeatStatus::Occupied)
        });
        if self
            .hovered
            .as_deref()
            .is_some_and(|id| layout.seat(id).is_none())
        {
            self.hovered = None;
        }

        info!(
            "Layout replaced: {} seats, kept {} of {} selected",
            layout.len(),
            self.selected.len(),
            before
        );
        self.venue = venue;
        self.layout = layout;
    }
}
