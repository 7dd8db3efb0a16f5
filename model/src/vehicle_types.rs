use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VehicleType {
    #[display(fmt = "car")]
    Car,
    #[display(fmt = "motorcycle")]
    Motorcycle,
    #[display(fmt = "miniBus")]
    MiniBus,
    #[display(fmt = "bus")]
    Bus,
}

impl VehicleType {
    pub fn all() -> [VehicleType; 4] {
        [
            VehicleType::Car,
            VehicleType::Motorcycle,
            VehicleType::MiniBus,
            VehicleType::Bus,
        ]
    }
}
