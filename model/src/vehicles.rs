use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use rapid_time::DateTime;

use crate::base_types::{DiscountCard, Plate};
use crate::vehicle_types::VehicleType;

/// Everything the lot needs to know about a vehicle to admit and bill it.
pub trait Parkable {
    fn plate(&self) -> &Plate;
    fn vehicle_type(&self) -> VehicleType;
    fn check_in_time(&self) -> DateTime;
    fn discount_card(&self) -> Option<&DiscountCard>;

    fn has_discount(&self) -> bool {
        self.discount_card().is_some()
    }
}

/// A vehicle is identified by its plate alone: two vehicles with the same
/// plate are equal and hash the same, whatever their other attributes.
#[derive(Debug, Clone)]
pub struct Vehicle {
    plate: Plate,
    vehicle_type: VehicleType,
    check_in_time: DateTime,
    discount_card: Option<DiscountCard>,
}

impl Vehicle {
    pub fn new(
        plate: impl Into<Plate>,
        vehicle_type: VehicleType,
        check_in_time: DateTime,
        discount_card: Option<DiscountCard>,
    ) -> Vehicle {
        Vehicle {
            plate: plate.into(),
            vehicle_type,
            check_in_time,
            discount_card,
        }
    }
}

impl Parkable for Vehicle {
    fn plate(&self) -> &Plate {
        &self.plate
    }

    fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    fn check_in_time(&self) -> DateTime {
        self.check_in_time
    }

    fn discount_card(&self) -> Option<&DiscountCard> {
        self.discount_card.as_ref()
    }
}

impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        self.plate == other.plate
    }
}

impl Eq for Vehicle {}

impl Hash for Vehicle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.plate.hash(state);
    }
}

// consistent with Hash and Eq above, so sets of vehicles can be queried by plate
impl Borrow<Plate> for Vehicle {
    fn borrow(&self) -> &Plate {
        &self.plate
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({}, in since {}",
            self.plate,
            self.vehicle_type,
            self.check_in_time.as_iso()
        )?;
        if let Some(card) = &self.discount_card {
            write!(f, ", card {}", card)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn identity_is_the_plate() {
        let morning = DateTime::new("2022-09-05T08:00");
        let car = Vehicle::new("AA111AA", VehicleType::Car, morning, None);
        let bus = Vehicle::new(
            "AA111AA",
            VehicleType::Bus,
            DateTime::new("2022-09-05T09:00"),
            Some(DiscountCard::from("DISCOUNT_CARD_001")),
        );
        assert_eq!(car, bus);

        let mut set = HashSet::new();
        assert!(set.insert(car));
        assert!(!set.insert(bus));
        assert!(set.insert(Vehicle::new("AA111AB", VehicleType::Car, morning, None)));
        assert!(set.contains(&Plate::from("AA111AA")));
    }

    #[test]
    fn discount_follows_the_card() {
        let now = DateTime::new("2022-09-05T08:00");
        let with_card = Vehicle::new(
            "DD444DD",
            VehicleType::Bus,
            now,
            Some(DiscountCard::from("DISCOUNT_CARD_002")),
        );
        let without_card = Vehicle::new("B222BBB", VehicleType::Motorcycle, now, None);
        assert!(with_card.has_discount());
        assert!(!without_card.has_discount());
        assert_eq!(
            format!("{}", with_card),
            format!(
                "DD444DD (bus, in since {}, card DISCOUNT_CARD_002)",
                now.as_iso()
            )
        );
    }
}
