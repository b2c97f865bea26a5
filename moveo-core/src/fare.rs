use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// The three fixed fare classes every train carries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String")]
pub enum FareClassName {
    First,
    Business,
    Economy,
}

impl FareClassName {
    pub const ALL: [FareClassName; 3] = [
        FareClassName::First,
        FareClassName::Business,
        FareClassName::Economy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FareClassName::First => "First",
            FareClassName::Business => "Business",
            FareClassName::Economy => "Economy",
        }
    }
}

impl fmt::Display for FareClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FareClassName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(FareClassName::First),
            "business" => Ok(FareClassName::Business),
            "economy" => Ok(FareClassName::Economy),
            other => Err(CoreError::ValidationError(format!(
                "Unknown fare class: {}",
                other
            ))),
        }
    }
}

impl TryFrom<String> for FareClassName {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Pricing and seat pool for a single fare class
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FareClass {
    pub price: Decimal,
    pub total_seats: u32,
    pub available_seats: u32,
}

impl FareClass {
    pub fn new(price: Decimal, total_seats: u32, available_seats: u32) -> Self {
        Self {
            price,
            total_seats,
            available_seats,
        }
    }

    /// Seats currently held by bookings
    pub fn booked_seats(&self) -> u32 {
        self.total_seats.saturating_sub(self.available_seats)
    }

    pub fn has_capacity_for(&self, seats: u32) -> bool {
        self.available_seats >= seats
    }

    /// Share of the pool that is booked, in `[0, 1]`
    pub fn utilization(&self) -> f64 {
        if self.total_seats == 0 {
            0.0
        } else {
            1.0 - (self.available_seats as f64 / self.total_seats as f64)
        }
    }
}

/// One record per fare class; there is no way to add or drop a class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FareClasses {
    pub first: FareClass,
    pub business: FareClass,
    pub economy: FareClass,
}

impl FareClasses {
    pub fn get(&self, class: FareClassName) -> &FareClass {
        match class {
            FareClassName::First => &self.first,
            FareClassName::Business => &self.business,
            FareClassName::Economy => &self.economy,
        }
    }

    pub fn get_mut(&mut self, class: FareClassName) -> &mut FareClass {
        match class {
            FareClassName::First => &mut self.first,
            FareClassName::Business => &mut self.business,
            FareClassName::Economy => &mut self.economy,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FareClassName, &FareClass)> {
        FareClassName::ALL.into_iter().map(move |name| (name, self.get(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FareClasses {
        FareClasses {
            first: FareClass::new(Decimal::from(3500), 50, 45),
            business: FareClass::new(Decimal::from(2000), 100, 90),
            economy: FareClass::new(Decimal::from(800), 200, 150),
        }
    }

    #[test]
    fn test_class_name_parsing() {
        assert_eq!("economy".parse::<FareClassName>().unwrap(), FareClassName::Economy);
        assert_eq!(" First ".parse::<FareClassName>().unwrap(), FareClassName::First);
        assert!("sleeper".parse::<FareClassName>().is_err());
    }

    #[test]
    fn test_class_name_json_ignores_case() {
        let class: FareClassName = serde_json::from_str("\"economy\"").unwrap();
        assert_eq!(class, FareClassName::Economy);
        assert!(serde_json::from_str::<FareClassName>("\"sleeper\"").is_err());
        assert_eq!(serde_json::to_string(&FareClassName::Business).unwrap(), "\"Business\"");
    }

    #[test]
    fn test_iter_covers_every_class_in_order() {
        let classes = sample();
        let names: Vec<_> = classes.iter().map(|(name, _)| name).collect();
        assert_eq!(names, FareClassName::ALL.to_vec());
        assert_eq!(classes.get(FareClassName::Business).total_seats, 100);
    }

    #[test]
    fn test_utilization() {
        let economy = sample().economy;
        assert_eq!(economy.booked_seats(), 50);
        assert!((economy.utilization() - 0.25).abs() < 1e-9);
        assert_eq!(FareClass::new(Decimal::ONE, 0, 0).utilization(), 0.0);
    }
}
