use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::Validate;

use crate::error::LayoutError;

/// Отступ от краёв зоны для единственной секции (в градусах, с каждой стороны).
pub const SINGLE_SECTION_INSET: f64 = 5.0;
/// Зазор между секциями, если в зоне он не указан.
pub const DEFAULT_SECTION_GAP: f64 = 5.0;

// Корневая структура конфигурации площадки
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VenueConfig {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub event: Option<EventInfo>,
    #[validate(nested)]
    pub ruedo: Ruedo,
    #[validate(length(min = 1), nested)]
    pub zones: Vec<ZoneConfig>,
}

fn default_currency() -> String {
    "MXN".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventInfo {
    pub title: String,
    pub starts_at: NaiveDateTime,
    pub venue_name: String,
}

// Центральная арена, вокруг которой расположены все зоны
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct Ruedo {
    pub center_x: f64,
    pub center_y: f64,
    #[validate(range(min = 0.0))]
    pub radius: f64,
}

impl Ruedo {
    pub fn center(&self) -> Point {
        Point {
            x: self.center_x,
            y: self.center_y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneLayout {
    /// Ряды по концентрическим дугам.
    #[default]
    Arc,
    /// Полные окружности вокруг ruedo (VIP).
    Ring,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ZonePosition {
    pub start_angle: f64,
    pub end_angle: f64,
}

impl ZonePosition {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

// Зона: угловой сектор с единой ценой
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ZoneConfig {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub color: String,
    #[serde(default)]
    pub layout: ZoneLayout,
    pub position: ZonePosition,
    #[validate(range(min = 1))]
    pub section_count: u32,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub section_gap: Option<f64>,
    #[serde(default)]
    #[validate(nested)]
    pub sections: Vec<SectionPrototype>,
}

/// Прототип секции: все поля необязательны, пропуски заполняются значениями по умолчанию.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SectionPrototype {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rows: Option<u32>,
    #[serde(default)]
    pub seats_per_row: Option<u32>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub start_radius: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub row_spacing: Option<f64>,
}

impl ZoneConfig {
    pub fn prototype(&self) -> Option<&SectionPrototype> {
        self.sections.first()
    }

    /// Проверка геометрии, которую не выразить атрибутами validator:
    /// конечность чисел, непустой угол, место под секции после вычета зазоров.
    pub fn check_geometry(&self) -> Result<(), LayoutError> {
        let zone = || self.id.clone();

        let finite_fields = [
            ("position.start_angle", Some(self.position.start_angle)),
            ("position.end_angle", Some(self.position.end_angle)),
            ("price", Some(self.price)),
            ("section_gap", self.section_gap),
            ("start_radius", self.prototype().and_then(|p| p.start_radius)),
            ("row_spacing", self.prototype().and_then(|p| p.row_spacing)),
        ];
        for (field, value) in finite_fields {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(LayoutError::NonFinite { zone: zone(), field });
                }
            }
        }

        if self.section_count == 0 {
            return Err(LayoutError::NoSections { zone: zone() });
        }

        if let Some(proto) = self.prototype() {
            for (field, value) in [("start_radius", proto.start_radius), ("row_spacing", proto.row_spacing)] {
                if matches!(value, Some(v) if v < 0.0) {
                    return Err(LayoutError::NegativeRadial { zone: zone(), field });
                }
            }
        }

        if self.layout == ZoneLayout::Ring {
            let seats = self.prototype().and_then(|p| p.seats_per_row).unwrap_or(0);
            if seats == 0 {
                return Err(LayoutError::RingWithoutSeats { zone: zone() });
            }
            return Ok(());
        }

        let span = self.position.span();
        if span <= 0.0 {
            return Err(LayoutError::EmptySpan {
                zone: zone(),
                start: self.position.start_angle,
                end: self.position.end_angle,
            });
        }
        // Больше полного круга: места одного ряда начнут совпадать
        if span > 360.0 {
            return Err(LayoutError::SpanTooWide { zone: zone(), span });
        }

        if self.section_count == 1 {
            if span <= 2.0 * SINGLE_SECTION_INSET {
                return Err(LayoutError::SpanWithinInset {
                    zone: zone(),
                    span,
                    inset: 2.0 * SINGLE_SECTION_INSET,
                });
            }
            return Ok(());
        }

        let gap = self.section_gap.unwrap_or(DEFAULT_SECTION_GAP);
        if gap < 0.0 {
            return Err(LayoutError::NegativeGap { zone: zone(), gap });
        }
        let total_gap = f64::from(self.section_count - 1) * gap;
        if total_gap >= span {
            return Err(LayoutError::GapsTooWide {
                zone: zone(),
                gap,
                count: self.section_count,
                span,
            });
        }

        Ok(())
    }
}

impl VenueConfig {
    /// Полная проверка схемы: атрибуты validator, уникальность id зон, геометрия каждой зоны.
    pub fn check(&self) -> Result<(), LayoutError> {
        self.validate()?;

        for (field, value) in [
            ("ruedo.center_x", self.ruedo.center_x),
            ("ruedo.center_y", self.ruedo.center_y),
            ("ruedo.radius", self.ruedo.radius),
        ] {
            if !value.is_finite() {
                return Err(LayoutError::NonFinite {
                    zone: self.name.clone(),
                    field,
                });
            }
        }

        let mut ids = HashSet::new();
        for zone in &self.zones {
            if !ids.insert(zone.id.as_str()) {
                return Err(LayoutError::DuplicateZone(zone.id.clone()));
            }
            zone.check_geometry()?;
        }
        Ok(())
    }

    pub fn zone(&self, id: &str) -> Option<&ZoneConfig> {
        self.zones.iter().find(|z| z.id == id)
    }
}
