//! Property-based invariant tests for the seat layout generator.
//!
//! 1. A single section spans exactly `[start + 5, end - 5]`.
//! 2. Multiple sections are ordered, non-overlapping and separated by the gap.
//! 3. Arc positions are deterministic.
//! 4. Every generated seat id decomposes back into its zone/section/row/seat.
//! 5. Arc output has `rows * seats_per_row` entries, circular output `seat_count`.
//! 6. Seats within one row never share an angle, modulo a full turn;
//!    zones wider than 360° are rejected.

use proptest::prelude::*;
use seat_map::error::LayoutError;
use seat_map::models::{
    Occupancy, Point, Ruedo, Section, SectionPrototype, VenueConfig, ZoneConfig, ZoneLayout, ZonePosition,
};
use seat_map::services::layout::generate_layout;
use seat_map::services::partition::partition_zone;
use seat_map::services::positioner::{arc_positions, circular_positions};
use std::collections::HashSet;

const EPS: f64 = 1e-9;

// ── Helpers ─────────────────────────────────────────────────────────────

fn arc_zone(id: String, start: f64, span: f64, count: u32, gap: f64, rows: u32) -> ZoneConfig {
    ZoneConfig {
        id,
        name: "Zona".to_string(),
        price: 500.0,
        color: "#3B82F6".to_string(),
        layout: ZoneLayout::Arc,
        position: ZonePosition {
            start_angle: start,
            end_angle: start + span,
        },
        section_count: count,
        section_gap: Some(gap),
        sections: vec![SectionPrototype {
            rows: Some(rows),
            ..Default::default()
        }],
    }
}

fn venue(zones: Vec<ZoneConfig>) -> VenueConfig {
    VenueConfig {
        name: "Palenque".to_string(),
        currency: "MXN".to_string(),
        event: None,
        ruedo: Ruedo {
            center_x: 400.0,
            center_y: 300.0,
            radius: 120.0,
        },
        zones,
    }
}

fn section_strategy() -> impl Strategy<Value = Section> {
    (0u32..6, 0u32..30, -360.0f64..360.0, 0.0f64..180.0, 50.0f64..300.0, 0.0f64..40.0).prop_map(
        |(rows, seats, start, span, radius, spacing)| Section {
            id: "sec-a".to_string(),
            name: "Sección A".to_string(),
            rows,
            seats_per_row: seats,
            start_radius: radius,
            row_spacing: spacing,
            start_angle: start,
            end_angle: start + span,
        },
    )
}

fn center_strategy() -> impl Strategy<Value = Point> {
    (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| Point { x, y })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Single section inset
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn single_section_is_inset(start in -180.0f64..180.0, span in 10.5f64..360.0) {
        let zone = arc_zone("zona-1".to_string(), start, span, 1, 5.0, 3);
        prop_assume!(zone.position.span() <= 360.0);
        let sections = partition_zone(&zone).unwrap();

        prop_assert_eq!(sections.len(), 1);
        prop_assert!((sections[0].start_angle - (start + 5.0)).abs() < EPS);
        prop_assert!((sections[0].end_angle - (start + span - 5.0)).abs() < EPS);
        prop_assert_eq!(sections[0].seats_per_row, (span / 4.0).floor() as u32);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Multiple sections: ordered, disjoint, gap-separated
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sections_are_disjoint_and_gap_separated(
        start in -180.0f64..180.0,
        span in 20.0f64..180.0,
        count in 2u32..7,
        gap in 0.0f64..3.0,
    ) {
        let zone = arc_zone("zona-1".to_string(), start, span, count, gap, 2);
        let sections = partition_zone(&zone).unwrap();

        prop_assert_eq!(sections.len(), count as usize);
        prop_assert!((sections[0].start_angle - start).abs() < EPS);
        prop_assert!((sections[sections.len() - 1].end_angle - (start + span)).abs() < 1e-6);

        let width = (span - f64::from(count - 1) * gap) / f64::from(count);
        for s in &sections {
            prop_assert!(s.span() > 0.0);
            prop_assert!((s.span() - width).abs() < 1e-6);
            prop_assert_eq!(s.seats_per_row, (width / 3.0).floor() as u32);
        }
        for pair in sections.windows(2) {
            prop_assert!(pair[0].end_angle <= pair[1].start_angle + EPS);
            prop_assert!((pair[1].start_angle - pair[0].end_angle - gap).abs() < 1e-6);
        }

        let ids: HashSet<_> = sections.iter().map(|s| s.id.clone()).collect();
        prop_assert_eq!(ids.len(), sections.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Determinism + 5. seat count
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arc_positions_are_deterministic(section in section_strategy(), center in center_strategy()) {
        let first = arc_positions("zona-1", &section, center);
        let second = arc_positions("zona-1", &section, center);

        prop_assert_eq!(first.len(), section.rows as usize * section.seats_per_row as usize);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn circular_positions_have_exact_count(
        radius in 0.0f64..400.0,
        seats in 1u32..200,
        row in 1u32..5,
        center in center_strategy(),
    ) {
        let positions = circular_positions(radius, seats, "vip-central", "ring", center, row).unwrap();

        prop_assert_eq!(positions.len(), seats as usize);
        prop_assert!(positions.iter().all(|p| p.row == row));
        let numbers: Vec<_> = positions.iter().map(|p| p.seat).collect();
        prop_assert_eq!(numbers, (1..=seats).collect::<Vec<_>>());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Id round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn seat_ids_round_trip(
        counts in proptest::collection::vec(1u32..5, 1..4),
        rows in 1u32..4,
    ) {
        let zones = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| arc_zone(format!("zona-{}", i + 1), 90.0 * i as f64, 80.0, count, 5.0, rows))
            .collect();
        let layout = generate_layout(&venue(zones), &Occupancy::default()).unwrap();

        prop_assert_eq!(layout.positions.len(), layout.seats.len());
        for pos in &layout.positions {
            let key = layout.decompose(&pos.id).unwrap();
            prop_assert_eq!(&key.zone, &pos.zone);
            prop_assert_eq!(&key.section, &pos.section);
            prop_assert_eq!(key.row, pos.row);
            prop_assert_eq!(key.seat, pos.seat);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Distinct angles within a row, full-circle cap
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn seats_in_a_row_have_distinct_angles(start in -360.0f64..360.0, span in 20.0f64..=360.0, count in 1u32..5) {
        let zone = arc_zone("zona-1".to_string(), start, span, count, 3.0, 1);
        // start + span - start может на ulp превысить 360
        prop_assume!(zone.position.span() <= 360.0);
        for mut section in partition_zone(&zone).unwrap() {
            let n = section.seats_per_row;
            if n < 2 {
                continue;
            }

            // Углы по кругу: соседние (и последний с первым через 360) не совпадают
            let step = section.span() / f64::from(n - 1);
            let mut angles: Vec<f64> = (0..n)
                .map(|i| (section.start_angle + f64::from(i) * step).rem_euclid(360.0))
                .collect();
            angles.sort_by(f64::total_cmp);
            for pair in angles.windows(2) {
                prop_assert!(pair[1] - pair[0] > 1e-6, "angles {} and {} coincide", pair[0], pair[1]);
            }
            prop_assert!(angles[0] + 360.0 - angles[angles.len() - 1] > 1e-6);

            // На большом радиусе совпадение координат означает совпадение углов
            section.start_radius = 2000.0;
            let positions = arc_positions(&zone.id, &section, Point { x: 0.0, y: 0.0 });
            let coords: HashSet<_> = positions.iter().map(|p| (p.x, p.y)).collect();
            prop_assert_eq!(coords.len(), positions.len());
        }
    }

    #[test]
    fn zones_wider_than_a_circle_are_rejected(start in -360.0f64..360.0, extra in 1e-3f64..720.0, count in 1u32..5) {
        let zone = arc_zone("zona-1".to_string(), start, 360.0 + extra, count, 3.0, 1);
        let span_too_wide = matches!(partition_zone(&zone), Err(LayoutError::SpanTooWide { .. }));
        prop_assert!(span_too_wide);
        prop_assert!(generate_layout(&venue(vec![zone]), &Occupancy::default()).is_err());
    }
}

// ── Worked example ──────────────────────────────────────────────────────

#[test]
fn quarter_arc_worked_example() {
    let section = Section {
        id: "sec-a".to_string(),
        name: "Sección A".to_string(),
        rows: 2,
        seats_per_row: 3,
        start_radius: 100.0,
        row_spacing: 20.0,
        start_angle: 0.0,
        end_angle: 90.0,
    };
    let coords: Vec<_> = arc_positions("zona-3", &section, Point { x: 0.0, y: 0.0 })
        .into_iter()
        .map(|p| (p.row, p.seat, p.x, p.y))
        .collect();

    assert_eq!(
        coords,
        vec![
            (1, 1, 100, 0),
            (1, 2, 71, 71),
            (1, 3, 0, 100),
            (2, 1, 120, 0),
            (2, 2, 85, 85),
            (2, 3, 0, 120),
        ]
    );
}
