pub mod venue;
pub mod section;
pub mod seat;

pub use venue::{VenueConfig, ZoneConfig, ZoneLayout, ZonePosition, SectionPrototype, Ruedo, Point, EventInfo};
pub use section::Section;
pub use seat::{Seat, SeatPosition, SeatStatus, SeatKey, Occupancy};
