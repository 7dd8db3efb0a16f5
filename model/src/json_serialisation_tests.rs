use serde_json::json;
use rapid_time::DateTime;

use crate::{
    base_types::Plate, config::ClockConfig, json_serialisation::load_parking_instance_from_json,
    vehicle_types::VehicleType, vehicles::Parkable, LoadError,
};

#[test]
fn test_load_from_json() {
    // ARRANGE
    let arrival = DateTime::new("2022-09-05T09:00");
    let input_data = json!({
        "config": {
            "capacity": 3,
            "clock": { "mode": "reference", "at": "2022-09-05T13:31" }
        },
        "vehicles": [
            { "plate": "AA111AA", "vehicleType": "car", "discountCard": "DISCOUNT_CARD_001" },
            { "plate": "CC333CC", "vehicleType": "miniBus", "checkInTime": "2022/09/05 10:15" }
        ],
        "checkOuts": ["AA111", "ZZ999ZZ"]
    });

    // ACT
    let instance = load_parking_instance_from_json(input_data, arrival).unwrap();

    // ASSERT
    assert_eq!(instance.config.capacity, 3);
    assert_eq!(
        instance.config.clock,
        ClockConfig::Reference {
            at: DateTime::new("2022-09-05T13:31")
        }
    );
    assert_eq!(instance.vehicles.len(), 2);

    let car = &instance.vehicles[0];
    assert_eq!(car.plate(), &Plate::from("AA111AA"));
    assert_eq!(car.vehicle_type(), VehicleType::Car);
    assert_eq!(car.check_in_time(), arrival);
    assert!(car.has_discount());

    let mini_bus = &instance.vehicles[1];
    assert_eq!(mini_bus.vehicle_type(), VehicleType::MiniBus);
    assert_eq!(mini_bus.check_in_time(), DateTime::new("2022-09-05T10:15"));
    assert!(!mini_bus.has_discount());

    assert_eq!(instance.check_outs, vec!["AA111", "ZZ999ZZ"]);
}

#[test]
fn test_config_and_check_outs_are_optional() {
    let input_data = json!({
        "vehicles": [{ "plate": "B222BBB", "vehicleType": "motorcycle" }]
    });
    let instance =
        load_parking_instance_from_json(input_data, DateTime::new("2022-09-05T09:00")).unwrap();
    assert_eq!(instance.config.capacity, 20);
    assert!(instance.check_outs.is_empty());
}

#[test]
fn test_invalid_check_in_time() {
    let input_data = json!({
        "vehicles": [{ "plate": "B222BBB", "vehicleType": "motorcycle", "checkInTime": "2022-02-30T10:00" }]
    });
    let result = load_parking_instance_from_json(input_data, DateTime::new("2022-09-05T09:00"));
    assert!(matches!(result, Err(LoadError::Time(_))));
}

#[test]
fn test_unknown_vehicle_type() {
    let input_data = json!({
        "vehicles": [{ "plate": "B222BBB", "vehicleType": "tractor" }]
    });
    let result = load_parking_instance_from_json(input_data, DateTime::new("2022-09-05T09:00"));
    assert!(matches!(result, Err(LoadError::Json(_))));
}
