pub mod clock;
pub mod error;
pub mod json_serialisation;
mod parking_lot;
mod summary;

pub use clock::{Clock, ReferenceClock, SystemClock};
pub use error::LedgerError;
pub use parking_lot::{CheckOut, ParkingLot};
pub use summary::DailySummary;
