use serde::{Deserialize, Serialize};
use rapid_time::DateTime;

use crate::base_types::{DiscountCard, Plate};
use crate::config::Config;
use crate::date_times::parse_date_time;
use crate::vehicle_types::VehicleType;
use crate::vehicles::Vehicle;
use crate::LoadError;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonVehicle {
    plate: String,
    vehicle_type: VehicleType,
    check_in_time: Option<String>,
    discount_card: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonInput {
    #[serde(default)]
    config: Config,
    vehicles: Vec<JsonVehicle>,
    #[serde(default)]
    check_outs: Vec<String>,
}

/// One simulated parking day: the lot configuration, the vehicles arriving
/// (in arrival order) and the plate queries presented at the exit.
#[derive(Debug, Clone)]
pub struct ParkingInstance {
    pub config: Config,
    pub vehicles: Vec<Vehicle>,
    pub check_outs: Vec<String>,
}

/// Vehicles without a `checkInTime` are stamped with `arrival`.
pub fn load_parking_instance_from_json(
    input_data: serde_json::Value,
    arrival: DateTime,
) -> Result<ParkingInstance, LoadError> {
    let json_input: JsonInput = serde_json::from_value(input_data)?;
    let vehicles = json_input
        .vehicles
        .into_iter()
        .map(|json_vehicle| create_vehicle(json_vehicle, arrival))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParkingInstance {
        config: json_input.config,
        vehicles,
        check_outs: json_input.check_outs,
    })
}

fn create_vehicle(json_vehicle: JsonVehicle, arrival: DateTime) -> Result<Vehicle, LoadError> {
    let check_in_time = match json_vehicle.check_in_time {
        Some(string) => parse_date_time(&string)?,
        None => arrival,
    };
    Ok(Vehicle::new(
        Plate::from(json_vehicle.plate),
        json_vehicle.vehicle_type,
        check_in_time,
        json_vehicle.discount_card.map(DiscountCard::from),
    ))
}
