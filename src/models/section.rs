use serde::{Deserialize, Serialize};

/// Секция, выведенная из зоны: угол, ряды и радиальные параметры.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub rows: u32,
    pub seats_per_row: u32,
    pub start_radius: f64,
    pub row_spacing: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Section {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn seat_count(&self) -> usize {
        self.rows as usize * self.seats_per_row as usize
    }

    pub fn row_radius(&self, row: u32) -> f64 {
        self.start_radius + f64::from(row) * self.row_spacing
    }
}
