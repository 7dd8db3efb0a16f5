use std::fmt;

use model::base_types::{Cost, VehicleCount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub checked_out: VehicleCount,
    pub earnings: Cost,
}

impl fmt::Display for DailySummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} vehicles have checked out and have earnings of ${}",
            self.checked_out, self.earnings
        )
    }
}
