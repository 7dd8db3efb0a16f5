use itertools::Itertools;
use model::vehicles::Parkable;
use serde::{Deserialize, Serialize};

use crate::{CheckOut, DailySummary, LedgerError, ParkingLot};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JsonCheckIn {
    pub plate: String,
    pub accepted: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JsonCheckOut {
    pub query: String,
    pub plate: Option<String>,
    pub parked_minutes: Option<i64>,
    pub fee: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct JsonLot {
    capacity: u32,
    summary: DailySummary,
    parked: Vec<String>,
}

pub fn check_in_to_json(plate: &str, result: &Result<(), LedgerError>) -> JsonCheckIn {
    JsonCheckIn {
        plate: plate.to_string(),
        accepted: result.is_ok(),
    }
}

pub fn check_out_to_json(query: &str, result: &Result<CheckOut, LedgerError>) -> JsonCheckOut {
    match result {
        Ok(check_out) => JsonCheckOut {
            query: query.to_string(),
            plate: Some(check_out.vehicle.plate().to_string()),
            parked_minutes: Some(check_out.parked_minutes),
            fee: Some(check_out.fee),
        },
        Err(_) => JsonCheckOut {
            query: query.to_string(),
            plate: None,
            parked_minutes: None,
            fee: None,
        },
    }
}

/// Capacity, summary and the parked plates (sorted, for stable output).
pub fn lot_to_json(lot: &ParkingLot) -> serde_json::Value {
    let json_lot = JsonLot {
        capacity: lot.capacity(),
        summary: lot.daily_summary(),
        parked: lot
            .list_parked()
            .map(|plate| plate.to_string())
            .sorted()
            .collect(),
    };
    serde_json::json!(json_lot)
}

#[cfg(test)]
mod tests {
    use model::tariff::Tariff;
    use model::vehicle_types::VehicleType;
    use model::vehicles::Vehicle;
    use serde_json::json;
    use rapid_time::DateTime;

    use super::*;
    use crate::ReferenceClock;

    #[test]
    fn lot_and_check_outs_as_json() {
        // ARRANGE
        let mut lot = ParkingLot::new(
            4,
            Tariff::default(),
            ReferenceClock(DateTime::new("2022-09-05T13:31")),
        );
        for plate in ["CC333CC", "AA111AA"] {
            let vehicle = Vehicle::new(
                plate,
                VehicleType::MiniBus,
                DateTime::new("2022-09-05T16:01"),
                None,
            );
            lot.check_in(vehicle).unwrap();
        }

        // ACT
        let found = check_out_to_json("CC333", &lot.check_out("CC333"));
        let missing = check_out_to_json("ZZ", &lot.check_out("ZZ"));
        let json_lot = lot_to_json(&lot);

        // ASSERT
        assert_eq!(
            found,
            JsonCheckOut {
                query: String::from("CC333"),
                plate: Some(String::from("CC333CC")),
                parked_minutes: Some(150),
                fee: Some(35),
            }
        );
        assert_eq!(missing.fee, None);
        assert_eq!(
            json_lot,
            json!({
                "capacity": 4,
                "summary": { "checkedOut": 1, "earnings": 35 },
                "parked": ["AA111AA"],
            })
        );
    }
}
