use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Occupied,
    Selected,
}

// Координаты места, результат генерации раскладки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPosition {
    pub id: String,
    pub x: i32,
    pub y: i32,
    pub zone: String,
    pub section: String,
    pub row: u32,
    pub seat: u32,
}

// Запись места для отображения: позиция + цена, статус, цвет
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    pub zone: String,
    pub zone_name: String,
    pub section: String,
    pub section_name: String,
    pub row: u32,
    pub seat: u32,
    pub price: f64,
    pub status: SeatStatus,
    pub color: String,
    pub x: i32,
    pub y: i32,
}

/// Разбор id места, собранного как `{zone}-{section}-{row}-{seat}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeatKey {
    pub zone: String,
    pub section: String,
    pub row: u32,
    pub seat: u32,
}

pub fn seat_id(zone: &str, section: &str, row: u32, seat: u32) -> String {
    format!("{}-{}-{}-{}", zone, section, row, seat)
}

pub fn section_prefix(zone: &str, section: &str) -> String {
    format!("{}-{}", zone, section)
}

/// Отделяет номера ряда и места от префикса `{zone}-{section}`.
/// Сам префикс неоднозначен (id зон и секций содержат дефисы),
/// его разрешает `SeatLayout::decompose`.
pub fn split_seat_id(id: &str) -> Option<(&str, u32, u32)> {
    let mut parts = id.rsplitn(3, '-');
    let seat = parts.next()?.parse().ok()?;
    let row = parts.next()?.parse().ok()?;
    let prefix = parts.next().filter(|p| !p.is_empty())?;
    Some((prefix, row, seat))
}

/// Внешняя карта занятости: список занятых мест.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Occupancy {
    #[serde(default)]
    pub occupied: HashSet<String>,
}

impl Occupancy {
    pub fn is_occupied(&self, id: &str) -> bool {
        self.occupied.contains(id)
    }
}

impl<S: Into<String>> FromIterator<S> for Occupancy {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Occupancy {
            occupied: iter.into_iter().map(Into::into).collect(),
        }
    }
}
