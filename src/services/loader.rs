//! loader.rs
//!
//! Загрузка площадки и карты занятости с диска.
//!
//! Площадка читается через `config` (JSON) в строго типизированную схему
//! и проверяется один раз при загрузке. Карта занятости: `{"occupied": [...]}`.

use std::path::Path;
use tracing::info;

use crate::config::VenueSource;
use crate::error::LoadError;
use crate::models::{Occupancy, VenueConfig};
use crate::services::layout::{generate_layout, SeatLayout};

pub fn load_venue(path: &Path) -> Result<VenueConfig, LoadError> {
    let venue: VenueConfig = ::config::Config::builder()
        .add_source(::config::File::from(path).format(::config::FileFormat::Json))
        .build()?
        .try_deserialize()?;

    venue.check()?;
    info!("Venue {} loaded from {}: {} zones", venue.name, path.display(), venue.zones.len());
    Ok(venue)
}

pub fn load_occupancy(path: Option<&Path>) -> Result<Occupancy, LoadError> {
    let Some(path) = path else {
        info!("No occupancy map configured, all seats start available");
        return Ok(Occupancy::default());
    };

    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let occupancy: Occupancy = serde_json::from_str(&raw)?;
    info!("Occupancy loaded from {}: {} seats occupied", path.display(), occupancy.occupied.len());
    Ok(occupancy)
}

/// Читает оба файла и строит раскладку.
pub fn load_layout(source: &VenueSource) -> Result<(VenueConfig, SeatLayout), LoadError> {
    let venue = load_venue(&source.venue_path)?;
    let occupancy = load_occupancy(source.occupancy_path.as_deref())?;
    let layout = generate_layout(&venue, &occupancy)?;
    Ok((venue, layout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn data(file: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(file)
    }

    #[test]
    fn bundled_venue_loads() {
        let venue = load_venue(&data("palenque.json")).unwrap();
        assert_eq!(venue.zones.len(), 5);
        assert_eq!(venue.currency, "MXN");
        assert!(venue.event.is_some());
    }

    #[test]
    fn bundled_occupancy_loads() {
        let occupancy = load_occupancy(Some(&data("occupancy.json"))).unwrap();
        assert!(occupancy.is_occupied("zona-1-sec-a-1-1"));
    }

    #[test]
    fn missing_occupancy_file_is_an_io_error() {
        let err = load_occupancy(Some(&data("does-not-exist.json"))).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn full_layout_from_bundled_files() {
        let source = VenueSource {
            venue_path: data("palenque.json"),
            occupancy_path: Some(data("occupancy.json")),
        };
        let (venue, layout) = load_layout(&source).unwrap();
        assert_eq!(venue.name, "Palenque Victoria");
        assert!(!layout.is_empty());
        assert_eq!(layout.positions.len(), layout.seats.len());
    }
}
