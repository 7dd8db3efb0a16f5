use serde::{Deserialize, Serialize};

use crate::base_types::{Cost, Minutes};
use crate::vehicle_types::VehicleType;

/// Pricing rules applied at check-out.
///
/// Up to `free_minutes` the vehicle pays its base fee. Every complete block of
/// `block_minutes` beyond that adds `fee_per_block`. A discount card takes
/// `discount_percent` off the total, rounded down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tariff {
    pub base_fees: BaseFees,
    pub free_minutes: Minutes,
    pub block_minutes: Minutes,
    pub fee_per_block: Cost,
    pub discount_percent: Cost,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseFees {
    pub car: Cost,
    pub motorcycle: Cost,
    pub mini_bus: Cost,
    pub bus: Cost,
}

impl Default for Tariff {
    fn default() -> Tariff {
        Tariff {
            base_fees: BaseFees::default(),
            free_minutes: 120,
            block_minutes: 15,
            fee_per_block: 5,
            discount_percent: 15,
        }
    }
}

impl Default for BaseFees {
    fn default() -> BaseFees {
        BaseFees {
            car: 20,
            motorcycle: 15,
            mini_bus: 25,
            bus: 30,
        }
    }
}

impl BaseFees {
    pub fn get(&self, vehicle_type: VehicleType) -> Cost {
        match vehicle_type {
            VehicleType::Car => self.car,
            VehicleType::Motorcycle => self.motorcycle,
            VehicleType::MiniBus => self.mini_bus,
            VehicleType::Bus => self.bus,
        }
    }
}

impl Tariff {
    pub fn base_fee(&self, vehicle_type: VehicleType) -> Cost {
        self.base_fees.get(vehicle_type)
    }

    pub fn fee(&self, parked_minutes: Minutes, vehicle_type: VehicleType, has_discount: bool) -> Cost {
        let mut fee = self.base_fee(vehicle_type);
        if parked_minutes >= self.free_minutes && self.block_minutes > 0 {
            let blocks = (parked_minutes - self.free_minutes) / self.block_minutes;
            fee += self.fee_per_block * blocks as Cost;
        }
        if has_discount {
            fee = fee * (100 - self.discount_percent.min(100)) / 100;
        }
        fee
    }
}
