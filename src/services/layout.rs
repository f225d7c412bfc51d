//! layout.rs
//!
//! Генератор раскладки площадки.
//!
//! Конфигурация площадки -> секции каждой зоны -> координаты мест ->
//! плоский список позиций + таблица записей мест по id + разделители секций.
//! Раскладка всегда пересчитывается целиком; частичных обновлений нет.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::LayoutError;
use crate::models::seat::{section_prefix, split_seat_id};
use crate::models::{Occupancy, Point, Seat, SeatKey, SeatPosition, SeatStatus, Section, VenueConfig, ZoneConfig, ZoneLayout};
use crate::services::partition::partition_zone;
use crate::services::positioner::{arc_positions, circular_positions};

/// Внутренний и внешний радиусы линий-разделителей между секциями.
pub const SEPARATOR_INNER_RADIUS: f64 = 160.0;
pub const SEPARATOR_OUTER_RADIUS: f64 = 280.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Separator {
    pub zone: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ZoneSections {
    pub zone: String,
    pub sections: Vec<Section>,
}

/// Результат генерации. Владеет всеми позициями и записями мест.
#[derive(Debug, Clone, Default)]
pub struct SeatLayout {
    pub positions: Vec<SeatPosition>,
    pub seats: HashMap<String, Seat>,
    pub zones: Vec<ZoneSections>,
    pub separators: Vec<Separator>,
    // префикс id -> (зона, секция), для однозначного разбора id
    prefixes: HashMap<String, (String, String)>,
}

impl SeatLayout {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn seat(&self, id: &str) -> Option<&Seat> {
        self.seats.get(id)
    }

    /// Разбирает id места обратно в (зона, секция, ряд, место).
    /// Только для мест, которые есть в раскладке.
    pub fn decompose(&self, id: &str) -> Option<SeatKey> {
        if !self.seats.contains_key(id) {
            return None;
        }
        let (prefix, row, seat) = split_seat_id(id)?;
        let (zone, section) = self.prefixes.get(prefix)?;
        Some(SeatKey {
            zone: zone.clone(),
            section: section.clone(),
            row,
            seat,
        })
    }
}

/// Позиции мест одной секции зоны.
pub fn section_positions(zone: &ZoneConfig, section: &Section, center: Point) -> Result<Vec<SeatPosition>, LayoutError> {
    match zone.layout {
        ZoneLayout::Arc => Ok(arc_positions(&zone.id, section, center)),
        ZoneLayout::Ring => {
            let mut positions = Vec::with_capacity(section.seat_count());
            for row in 0..section.rows {
                positions.extend(circular_positions(
                    section.row_radius(row),
                    section.seats_per_row,
                    &zone.id,
                    &section.id,
                    center,
                    row + 1,
                )?);
            }
            Ok(positions)
        }
    }
}

/// Линии между соседними секциями зоны: по концу каждой секции, кроме последней.
pub fn section_separators(zone: &ZoneConfig, sections: &[Section], center: Point) -> Vec<Separator> {
    if zone.layout != ZoneLayout::Arc || sections.len() < 2 {
        return Vec::new();
    }

    sections[..sections.len() - 1]
        .iter()
        .map(|section| {
            let angle = section.end_angle.to_radians();
            let (cos, sin) = (angle.cos(), angle.sin());
            Separator {
                zone: zone.id.clone(),
                x1: center.x + SEPARATOR_INNER_RADIUS * cos,
                y1: center.y + SEPARATOR_INNER_RADIUS * sin,
                x2: center.x + SEPARATOR_OUTER_RADIUS * cos,
                y2: center.y + SEPARATOR_OUTER_RADIUS * sin,
            }
        })
        .collect()
}

/// Генерирует полную раскладку площадки. Статусы берутся из карты занятости.
pub fn generate_layout(venue: &VenueConfig, occupancy: &Occupancy) -> Result<SeatLayout, LayoutError> {
    venue.check()?;

    let center = venue.ruedo.center();
    let mut layout = SeatLayout::default();

    for zone in &venue.zones {
        let sections = partition_zone(zone)?;

        for section in &sections {
            let prefix = section_prefix(&zone.id, &section.id);
            match layout.prefixes.entry(prefix) {
                Entry::Occupied(entry) => {
                    return Err(LayoutError::AmbiguousSection(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert((zone.id.clone(), section.id.clone()));
                }
            }

            let positions = section_positions(zone, section, center)?;
            debug!("Zone {} section {}: {} seats", zone.id, section.id, positions.len());

            for pos in &positions {
                let status = if occupancy.is_occupied(&pos.id) {
                    SeatStatus::Occupied
                } else {
                    SeatStatus::Available
                };

                let seat = Seat {
                    id: pos.id.clone(),
                    zone: zone.id.clone(),
                    zone_name: zone.name.clone(),
                    section: section.id.clone(),
                    section_name: section.name.clone(),
                    row: pos.row,
                    seat: pos.seat,
                    price: zone.price,
                    status,
                    color: zone.color.clone(),
                    x: pos.x,
                    y: pos.y,
                };

                if layout.seats.insert(pos.id.clone(), seat).is_some() {
                    return Err(LayoutError::DuplicateSeat(pos.id.clone()));
                }
            }

            layout.positions.extend(positions);
        }

        layout.separators.extend(section_separators(zone, &sections, center));
        layout.zones.push(ZoneSections {
            zone: zone.id.clone(),
            sections,
        });
    }

    let unknown = occupancy
        .occupied
        .iter()
        .filter(|id| !layout.seats.contains_key(id.as_str()))
        .count();
    if unknown > 0 {
        warn!("Occupancy map lists {} seats that are not in the layout", unknown);
    }

    info!(
        "Generated layout for {}: {} zones, {} seats",
        venue.name,
        venue.zones.len(),
        layout.positions.len()
    );

    Ok(layout)
}
