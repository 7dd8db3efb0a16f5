pub mod logging;


use ledger::json_serialisation::{check_in_to_json, check_out_to_json, lot_to_json};
use ledger::ParkingLot;
use model::json_serialisation::load_parking_instance_from_json;
use model::vehicles::Parkable;
use model::LoadError;
use rapid_time::DateTime;
use tracing::info;

/// Runs one parking day: every vehicle of the instance arrives in order, then
/// every check-out query is presented at the exit. Vehicles without an
/// explicit check-in time arrive at `arrival`.
pub fn run(input_data: serde_json::Value, arrival: DateTime) -> Result<serde_json::Value, LoadError> {
    let instance = load_parking_instance_from_json(input_data, arrival)?;
    let mut lot = ParkingLot::from_config(&instance.config);

    let mut check_ins = Vec::with_capacity(instance.vehicles.len());
    for vehicle in instance.vehicles {
        let plate = vehicle.plate().to_string();
        let result = lot.check_in(vehicle);
        match &result {
            Ok(()) => info!(%plate, "Welcome to AlkeParking"),
            Err(err) => info!(%plate, "Sorry, the check-in failed: {}", err),
        }
        check_ins.push(check_in_to_json(&plate, &result));
    }

    let mut check_outs = Vec::with_capacity(instance.check_outs.len());
    for query in instance.check_outs.iter() {
        let result = lot.check_out(query);
        match &result {
            Ok(check_out) => info!(query = query.as_str(), "Your fee is ${}", check_out.fee),
            Err(err) => info!(query = query.as_str(), "Sorry, the check-out failed: {}", err),
        }
        check_outs.push(check_out_to_json(query, &result));
    }

    info!("{}", lot.daily_summary());

    Ok(serde_json::json!({
        "checkIns": check_ins,
        "checkOuts": check_outs,
        "lot": lot_to_json(&lot),
    }))
}
