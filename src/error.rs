use std::path::PathBuf;
use thiserror::Error;

/// Ошибки переменных окружения.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has invalid value `{value}`")]
    InvalidVar { name: &'static str, value: String },
}

/// Ошибки геометрии и схемы площадки. Возникают при загрузке, до генерации мест.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid venue schema: {0}")]
    Schema(#[from] validator::ValidationErrors),

    #[error("zone `{zone}`: {field} must be a finite number")]
    NonFinite { zone: String, field: &'static str },

    #[error("zone `{zone}`: section count must be at least 1")]
    NoSections { zone: String },

    #[error("zone `{zone}`: angular span {start}..{end} is empty")]
    EmptySpan { zone: String, start: f64, end: f64 },

    #[error("zone `{zone}`: span of {span} degrees exceeds a full circle")]
    SpanTooWide { zone: String, span: f64 },

    #[error("zone `{zone}`: span of {span} degrees does not exceed the {inset} degree inset")]
    SpanWithinInset { zone: String, span: f64, inset: f64 },

    #[error("zone `{zone}`: section gap {gap} must not be negative")]
    NegativeGap { zone: String, gap: f64 },

    #[error("zone `{zone}`: gaps of {gap} degrees leave no room for {count} sections in {span} degrees")]
    GapsTooWide { zone: String, gap: f64, count: u32, span: f64 },

    #[error("zone `{zone}`: {field} must not be negative")]
    NegativeRadial { zone: String, field: &'static str },

    #[error("zone `{zone}`: ring layout needs a positive seats_per_row")]
    RingWithoutSeats { zone: String },

    #[error("circular layout for `{zone}-{section}` needs at least one seat")]
    EmptyRing { zone: String, section: String },

    #[error("duplicate zone id `{0}`")]
    DuplicateZone(String),

    #[error("seat id prefix `{0}` is produced by more than one zone/section pair")]
    AmbiguousSection(String),

    #[error("seat id `{0}` is produced twice")]
    DuplicateSeat(String),
}

/// Ошибки загрузки файлов площадки и занятости.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read venue config: {0}")]
    Venue(#[from] ::config::ConfigError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse occupancy file: {0}")]
    Occupancy(#[from] serde_json::Error),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}
