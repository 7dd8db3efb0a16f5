
use std::collections::HashSet;
use std::fmt;

use model::base_types::{Cost, Minutes, Plate, VehicleCount};
use model::config::Config;
use model::tariff::Tariff;
use model::vehicles::{Parkable, Vehicle};
use tracing::{debug, info, warn};

use crate::clock::{clock_from_config, Clock};
use crate::error::LedgerError;
use crate::summary::DailySummary;

/// The ledger of a single parking lot: who is parked right now and what the
/// day has earned so far.
///
/// At most `capacity` vehicles are parked at any time, plates are unique
/// among them, and `checked_out`/`earnings` only ever grow together on a
/// successful check-out.
pub struct ParkingLot {
    vehicles: HashSet<Vehicle>,
    capacity: VehicleCount,
    tariff: Tariff,
    clock: Box<dyn Clock>,
    checked_out: VehicleCount,
    earnings: Cost,
}

/// Receipt of a successful check-out.
#[derive(Debug, Clone)]
pub struct CheckOut {
    pub vehicle: Vehicle,
    pub parked_minutes: Minutes,
    pub fee: Cost,
}

// constructors
impl ParkingLot {
    pub fn new(capacity: VehicleCount, tariff: Tariff, clock: impl Clock + 'static) -> ParkingLot {
        ParkingLot::with_boxed_clock(capacity, tariff, Box::new(clock))
    }

    pub fn from_config(config: &Config) -> ParkingLot {
        ParkingLot::with_boxed_clock(
            config.capacity,
            config.tariff.clone(),
            clock_from_config(config.clock),
        )
    }

    fn with_boxed_clock(
        capacity: VehicleCount,
        tariff: Tariff,
        clock: Box<dyn Clock>,
    ) -> ParkingLot {
        ParkingLot {
            vehicles: HashSet::with_capacity(capacity as usize),
            capacity,
            tariff,
            clock,
            checked_out: 0,
            earnings: 0,
        }
    }
}

impl Default for ParkingLot {
    fn default() -> ParkingLot {
        ParkingLot::from_config(&Config::default())
    }
}

// methods
impl ParkingLot {
    pub fn check_in(&mut self, vehicle: Vehicle) -> Result<(), LedgerError> {
        if self.is_full() || self.vehicles.contains(vehicle.plate()) {
            warn!(plate = %vehicle.plate(), parked = self.len(), "check-in rejected");
            return Err(LedgerError::CapacityOrDuplicate {
                plate: vehicle.plate().clone(),
            });
        }
        debug!(%vehicle, "checked in");
        self.vehicles.insert(vehicle);
        Ok(())
    }

    /// Checks out the first parked vehicle whose plate contains `query`.
    /// Among several matches the smallest plate is taken.
    pub fn check_out(&mut self, query: &str) -> Result<CheckOut, LedgerError> {
        let plate = self
            .vehicles
            .iter()
            .map(|vehicle| vehicle.plate())
            .filter(|plate| plate.contains(query))
            .min()
            .cloned()
            .ok_or_else(|| {
                warn!(query, "check-out rejected");
                LedgerError::VehicleNotFound {
                    query: query.to_string(),
                }
            })?;
        let vehicle = self
            .vehicles
            .take(&plate)
            .ok_or(LedgerError::VehicleNotFound {
                query: query.to_string(),
            })?;

        let parked_minutes = self.clock.parked_minutes(vehicle.check_in_time());
        let fee = self.fee(&vehicle, parked_minutes);

        self.checked_out += 1;
        self.earnings += fee;
        info!(%plate, parked_minutes, fee, "checked out");

        Ok(CheckOut {
            vehicle,
            parked_minutes,
            fee,
        })
    }

    /// Fee for `vehicle` after `parked_minutes`, discount card included.
    pub fn fee(&self, vehicle: &impl Parkable, parked_minutes: Minutes) -> Cost {
        self.tariff
            .fee(parked_minutes, vehicle.vehicle_type(), vehicle.has_discount())
    }

    pub fn daily_summary(&self) -> DailySummary {
        DailySummary {
            checked_out: self.checked_out,
            earnings: self.earnings,
        }
    }

    /// Plates of all parked vehicles, in no particular order.
    pub fn list_parked(&self) -> impl Iterator<Item = &Plate> + '_ {
        self.vehicles.iter().map(|vehicle| vehicle.plate())
    }

    pub fn contains(&self, plate: &Plate) -> bool {
        self.vehicles.contains(plate)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity as usize
    }

    pub fn capacity(&self) -> VehicleCount {
        self.capacity
    }

    pub fn free_spaces(&self) -> VehicleCount {
        self.capacity.saturating_sub(self.len() as VehicleCount)
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }
}

impl fmt::Display for ParkingLot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Parking lot ({}/{} parked):", self.len(), self.capacity)?;
        for vehicle in self.vehicles.iter() {
            writeln!(f, "  {}", vehicle)?;
        }
        write!(f, "{}", self.daily_summary())
    }
}
