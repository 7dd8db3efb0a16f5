use model::base_types::Plate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The lot is full or a vehicle with the same plate is already parked.
    #[error("check-in of {plate} rejected: lot full or plate already parked")]
    CapacityOrDuplicate { plate: Plate },
    /// No parked plate contains the query.
    #[error("no parked vehicle matches '{query}'")]
    VehicleNotFound { query: String },
}
