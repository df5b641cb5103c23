pub mod equipment_rentals;
pub mod home;
pub mod minnesota;
pub mod not_found;
pub mod private_events;
pub mod saint_lucia;
pub mod weddings;
