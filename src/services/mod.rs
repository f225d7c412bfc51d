pub mod partition;
pub mod positioner;
pub mod layout;
pub mod seat_map;
pub mod loader;
