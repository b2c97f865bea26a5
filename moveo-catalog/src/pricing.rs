use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use moveo_core::{CoreError, CoreResult, FareClassName, Train};

/// Price of a booking at the moment it is made
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FareQuote {
    pub class: FareClassName,
    pub unit_price: Decimal,
    pub passengers: u32,
    pub total: Decimal,
}

/// Flat per-seat pricing: the class fare times the passenger count.
pub struct PricingEngine;

impl PricingEngine {
    pub fn quote(train: &Train, class: FareClassName, passengers: u32) -> CoreResult<FareQuote> {
        let unit_price = train.classes.get(class).price;
        let total = unit_price
            .checked_mul(Decimal::from(passengers))
            .ok_or_else(|| CoreError::ValidationError("Total price is out of range.".to_string()))?;
        Ok(FareQuote {
            class,
            unit_price,
            passengers,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet;

    #[test]
    fn test_quote_multiplies_class_price() {
        let train = fleet::demo_fleet().remove(0);
        let quote = PricingEngine::quote(&train, FareClassName::Economy, 5).unwrap();
        assert_eq!(quote.unit_price, Decimal::from(800));
        assert_eq!(quote.total, Decimal::from(4000));
    }

    #[test]
    fn test_fractional_fares_stay_exact() {
        let mut train = fleet::demo_fleet().remove(0);
        train.classes.first.price = "1234.55".parse().unwrap();
        let quote = PricingEngine::quote(&train, FareClassName::First, 3).unwrap();
        assert_eq!(quote.total, "3703.65".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_overflowing_total_is_an_error() {
        let mut train = fleet::demo_fleet().remove(0);
        train.classes.economy.price = Decimal::MAX;
        let err = PricingEngine::quote(&train, FareClassName::Economy, 2).unwrap_err();
        assert_eq!(err.to_string(), "Total price is out of range.");
    }
}
