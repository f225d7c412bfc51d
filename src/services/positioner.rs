//! positioner.rs
//!
//! Перевод секций в координаты мест.
//!
//! Дуговая раскладка: ряд `r` лежит на окружности радиуса `start_radius + r * row_spacing`,
//! места ряда равномерно делят угол секции включая оба края.
//! Круговая раскладка: `seat_count` мест с шагом `2π / seat_count`, начиная с 0 рад.
//! Координаты округляются до целых.

use std::f64::consts::PI;

use crate::error::LayoutError;
use crate::models::seat::seat_id;
use crate::models::{Point, Section, SeatPosition};

/// Округление к ближайшему целому, половины вверх.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Полярные координаты (угол в радианах) в целочисленные декартовы.
pub fn polar_to_cartesian(center: Point, radius: f64, theta: f64) -> (i32, i32) {
    (
        round_half_up(center.x + radius * theta.cos()),
        round_half_up(center.y + radius * theta.sin()),
    )
}

/// Раскладывает секцию по концентрическим дугам: `rows * seats_per_row` мест.
pub fn arc_positions(zone_id: &str, section: &Section, center: Point) -> Vec<SeatPosition> {
    let start = section.start_angle.to_radians();
    let end = section.end_angle.to_radians();
    let delta = if section.seats_per_row > 1 {
        (end - start) / f64::from(section.seats_per_row - 1)
    } else {
        0.0
    };

    let mut positions = Vec::with_capacity(section.seat_count());
    for row in 0..section.rows {
        let radius = section.row_radius(row);

        for seat in 0..section.seats_per_row {
            let theta = start + f64::from(seat) * delta;
            let (x, y) = polar_to_cartesian(center, radius, theta);
            positions.push(SeatPosition {
                id: seat_id(zone_id, &section.id, row + 1, seat + 1),
                x,
                y,
                zone: zone_id.to_string(),
                section: section.id.clone(),
                row: row + 1,
                seat: seat + 1,
            });
        }
    }

    positions
}

/// Раскладывает `seat_count` мест по полной окружности. Все места получают ряд `row`.
pub fn circular_positions(
    radius: f64,
    seat_count: u32,
    zone_id: &str,
    section_id: &str,
    center: Point,
    row: u32,
) -> Result<Vec<SeatPosition>, LayoutError> {
    if seat_count == 0 {
        return Err(LayoutError::EmptyRing {
            zone: zone_id.to_string(),
            section: section_id.to_string(),
        });
    }

    let step = 2.0 * PI / f64::from(seat_count);
    let positions = (0..seat_count)
        .map(|i| {
            let (x, y) = polar_to_cartesian(center, radius, f64::from(i) * step);
            SeatPosition {
                id: seat_id(zone_id, section_id, row, i + 1),
                x,
                y,
                zone: zone_id.to_string(),
                section: section_id.to_string(),
                row,
                seat: i + 1,
            }
        })
        .collect();

    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    fn section(rows: u32, seats: u32, start: f64, end: f64) -> Section {
        Section {
            id: "sec-a".to_string(),
            name: "Sección A".to_string(),
            rows,
            seats_per_row: seats,
            start_radius: 100.0,
            row_spacing: 20.0,
            start_angle: start,
            end_angle: end,
        }
    }

    fn coords(positions: &[SeatPosition]) -> Vec<(i32, i32)> {
        positions.iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn quarter_arc_two_rows() {
        let positions = arc_positions("zona-3", &section(2, 3, 0.0, 90.0), ORIGIN);

        assert_eq!(
            coords(&positions),
            vec![(100, 0), (71, 71), (0, 100), (120, 0), (85, 85), (0, 120)]
        );
        assert_eq!(positions[0].id, "zona-3-sec-a-1-1");
        assert_eq!(positions[5].id, "zona-3-sec-a-2-3");
        assert_eq!((positions[4].row, positions[4].seat), (2, 2));
    }

    #[test]
    fn single_seat_rows_sit_at_start_angle() {
        let positions = arc_positions("z", &section(3, 1, 90.0, 180.0), Point { x: 400.0, y: 300.0 });
        assert_eq!(coords(&positions), vec![(400, 400), (400, 420), (400, 440)]);
    }

    #[test]
    fn empty_section_has_no_seats() {
        assert!(arc_positions("z", &section(4, 0, 0.0, 10.0), ORIGIN).is_empty());
        assert!(arc_positions("z", &section(0, 5, 0.0, 10.0), ORIGIN).is_empty());
    }

    #[test]
    fn rounding_goes_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(round_half_up(1e-12), 0);
    }

    #[test]
    fn ring_of_four() {
        let positions = circular_positions(50.0, 4, "vip-central", "ring", Point { x: 400.0, y: 300.0 }, 2).unwrap();
        assert_eq!(coords(&positions), vec![(450, 300), (400, 350), (350, 300), (400, 250)]);
        assert!(positions.iter().all(|p| p.row == 2));
        assert_eq!(positions[3].id, "vip-central-ring-2-4");
    }

    #[test]
    fn ring_without_seats_is_an_error() {
        let err = circular_positions(50.0, 0, "vip", "ring", ORIGIN, 1).unwrap_err();
        assert!(matches!(err, LayoutError::EmptyRing { .. }));
    }
}
