use model::base_types::Minutes;
use model::config::ClockConfig;
use model::date_times::{minutes_between, now};
use rapid_time::DateTime;

/// Measures how long a vehicle has been parked when it leaves.
pub trait Clock {
    fn parked_minutes(&self, check_in: DateTime) -> Minutes;
}

/// Measures against a fixed reference point: parked time is the check-in
/// time minus the reference, so check-ins before the reference come out
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceClock(pub DateTime);

/// Parked time is the current system time minus the check-in time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for ReferenceClock {
    fn parked_minutes(&self, check_in: DateTime) -> Minutes {
        minutes_between(self.0, check_in)
    }
}

impl Clock for SystemClock {
    fn parked_minutes(&self, check_in: DateTime) -> Minutes {
        minutes_between(check_in, now())
    }
}

pub fn clock_from_config(clock_config: ClockConfig) -> Box<dyn Clock> {
    match clock_config {
        ClockConfig::Reference { at } => Box::new(ReferenceClock(at)),
        ClockConfig::System => Box::new(SystemClock),
    }
}
