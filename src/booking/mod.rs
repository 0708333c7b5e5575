//! Booking records and the booking store interface

pub mod memory;
pub mod record;
pub mod store;

pub use memory::InMemoryBookingStore;
pub use record::Booking;
pub use store::{BookingStore, CheckinOutcome, SubmitOutcome};
