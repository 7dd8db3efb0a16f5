use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Currency units; fees and earnings are always whole numbers.
pub type Cost = u64;
pub type VehicleCount = u32;
/// Parked time in whole minutes. Negative when the check-in lies after the
/// check-out reference.
pub type Minutes = i64;

#[derive(Display, From, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plate(String);

impl Plate {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Loose lookup: true if `pattern` occurs anywhere in the plate.
    pub fn contains(&self, pattern: &str) -> bool {
        self.0.contains(pattern)
    }
}

impl From<&str> for Plate {
    fn from(plate: &str) -> Plate {
        Plate(plate.to_string())
    }
}

#[derive(Display, From, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountCard(String);

impl From<&str> for DiscountCard {
    fn from(card: &str) -> DiscountCard {
        DiscountCard(card.to_string())
    }
}
