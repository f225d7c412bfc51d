//! partition.rs
//!
//! Разбиение зоны на секции.
//!
//! - Одна секция занимает весь угол зоны за вычетом отступа 5° с каждой стороны.
//! - N секций делят угол поровну, между ними N-1 зазоров фиксированной ширины.
//! - Кольцевая (VIP) зона даёт одну секцию на полный круг.

use crate::error::LayoutError;
pub use crate::models::venue::DEFAULT_SECTION_GAP;
use crate::models::venue::SINGLE_SECTION_INSET;
use crate::models::{Section, ZoneConfig, ZoneLayout};

pub const DEFAULT_ROWS: u32 = 8;
pub const DEFAULT_START_RADIUS: f64 = 180.0;
pub const DEFAULT_ROW_SPACING: f64 = 25.0;

/// Угловая ширина одного места, когда секция одна.
pub const SINGLE_SECTION_SEAT_WIDTH: f64 = 4.0;
/// Угловая ширина одного места в зоне с несколькими секциями.
pub const SECTION_SEAT_WIDTH: f64 = 3.0;

pub const RING_SECTION_ID: &str = "ring";

/// Буквенный суффикс секции: 0 -> a, 25 -> z, 26 -> aa.
pub fn section_letter(index: u32) -> String {
    let mut n = index as u64 + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

fn seats_for(span: f64, seat_width: f64) -> u32 {
    (span / seat_width).floor().max(0.0) as u32
}

/// Разбивает зону на упорядоченный по углу список секций без пересечений.
pub fn partition_zone(zone: &ZoneConfig) -> Result<Vec<Section>, LayoutError> {
    zone.check_geometry()?;

    let proto = zone.prototype().cloned().unwrap_or_default();
    let rows = proto.rows.unwrap_or(DEFAULT_ROWS);
    let start_radius = proto.start_radius.unwrap_or(DEFAULT_START_RADIUS);
    let row_spacing = proto.row_spacing.unwrap_or(DEFAULT_ROW_SPACING);

    if zone.layout == ZoneLayout::Ring {
        return Ok(vec![Section {
            id: proto.id.unwrap_or_else(|| RING_SECTION_ID.to_string()),
            name: proto.name.unwrap_or_else(|| zone.name.clone()),
            rows,
            seats_per_row: proto.seats_per_row.unwrap_or(0),
            start_radius,
            row_spacing,
            start_angle: 0.0,
            end_angle: 360.0,
        }]);
    }

    let position = zone.position;

    if zone.section_count == 1 {
        return Ok(vec![Section {
            id: proto.id.unwrap_or_else(|| format!("sec-{}", section_letter(0))),
            name: proto
                .name
                .unwrap_or_else(|| format!("Sección {}", section_letter(0).to_uppercase())),
            rows,
            // Ширина считается от полного угла зоны, без учёта отступов
            seats_per_row: seats_for(position.span(), SINGLE_SECTION_SEAT_WIDTH),
            start_radius,
            row_spacing,
            start_angle: position.start_angle + SINGLE_SECTION_INSET,
            end_angle: position.end_angle - SINGLE_SECTION_INSET,
        }]);
    }

    let count = zone.section_count;
    let gap = zone.section_gap.unwrap_or(DEFAULT_SECTION_GAP);
    let total_gap = f64::from(count - 1) * gap;
    let section_angle = (position.span() - total_gap) / f64::from(count);

    let sections = (0..count)
        .map(|i| {
            let start_angle = position.start_angle + f64::from(i) * (section_angle + gap);
            let letter = section_letter(i);
            Section {
                id: format!("sec-{}", letter),
                name: format!("Sección {}", letter.to_uppercase()),
                rows,
                seats_per_row: seats_for(section_angle, SECTION_SEAT_WIDTH),
                start_radius,
                row_spacing,
                start_angle,
                end_angle: start_angle + section_angle,
            }
        })
        .collect();

    Ok(sections)
}
