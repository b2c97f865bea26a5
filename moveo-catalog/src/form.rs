use rust_decimal::Decimal;
use serde::Deserialize;

use moveo_core::{
    CoreError, CoreResult, FareClass, FareClassName, FareClasses, NewTrain, Train, TrainId,
};

/// Seat and price fields for one fare class as submitted by an admin
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FareClassForm {
    pub price: Option<Decimal>,
    pub total_seats: Option<u32>,
    pub available_seats: Option<u32>,
}

impl FareClassForm {
    pub fn new(price: Decimal, total_seats: u32, available_seats: u32) -> Self {
        Self {
            price: Some(price),
            total_seats: Some(total_seats),
            available_seats: Some(available_seats),
        }
    }

    fn parse(&self, class: FareClassName) -> CoreResult<FareClass> {
        let price = self.price.ok_or_else(|| missing(class, "price"))?;
        let total_seats = self.total_seats.ok_or_else(|| missing(class, "total seats"))?;
        let available_seats = self
            .available_seats
            .ok_or_else(|| missing(class, "available seats"))?;
        Ok(FareClass::new(price, total_seats, available_seats))
    }
}

fn missing(class: FareClassName, field: &str) -> CoreError {
    CoreError::ValidationError(format!("{} Class {} is required.", class, field))
}

/// Admin add/edit form. Every fare class has its own typed record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainForm {
    #[serde(default)]
    pub train_name: String,
    #[serde(default)]
    pub train_number: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub departure: String,
    pub description: Option<String>,
    #[serde(default)]
    pub first: FareClassForm,
    #[serde(default)]
    pub business: FareClassForm,
    #[serde(default)]
    pub economy: FareClassForm,
}

impl TrainForm {
    pub fn into_new_train(self) -> CoreResult<NewTrain> {
        let classes = FareClasses {
            first: self.first.parse(FareClassName::First)?,
            business: self.business.parse(FareClassName::Business)?,
            economy: self.economy.parse(FareClassName::Economy)?,
        };

        Ok(NewTrain {
            train_name: self.train_name.trim().to_string(),
            train_number: self.train_number.trim().to_string(),
            source: self.source,
            destination: self.destination,
            departure: self.departure.trim().to_string(),
            description: self.description,
            classes,
        })
    }

    pub fn into_train(self, id: TrainId) -> CoreResult<Train> {
        self.into_new_train().map(|t| t.into_train(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> TrainForm {
        TrainForm {
            train_name: "Konkan Kanya".to_string(),
            train_number: "10111".to_string(),
            source: "mumbai".to_string(),
            destination: "goa".to_string(),
            departure: "23:05".to_string(),
            description: Some("Overnight to the coast.".to_string()),
            first: FareClassForm::new(Decimal::from(3500), 50, 50),
            business: FareClassForm::new(Decimal::from(2000), 100, 100),
            economy: FareClassForm::new(Decimal::from(800), 200, 200),
        }
    }

    #[test]
    fn test_form_parses_every_class() {
        let train = filled().into_new_train().unwrap();
        assert_eq!(train.classes.business.total_seats, 100);
        assert_eq!(train.classes.economy.price, Decimal::from(800));
    }

    #[test]
    fn test_missing_field_is_named() {
        let mut form = filled();
        form.business.total_seats = None;
        assert_eq!(
            form.into_new_train().unwrap_err(),
            CoreError::ValidationError("Business Class total seats is required.".to_string())
        );
    }

    #[test]
    fn test_form_accepts_string_prices() {
        let json = r#"{
            "train_name": "Test", "train_number": "1", "source": "a", "destination": "b",
            "departure": "10:00",
            "first": { "price": "1500.50", "total_seats": 10, "available_seats": 10 },
            "business": { "price": 900, "total_seats": 10, "available_seats": 5 },
            "economy": { "price": 450, "total_seats": 10, "available_seats": 0 }
        }"#;
        let form: TrainForm = serde_json::from_str(json).unwrap();
        let train = form.into_train("T9".to_string()).unwrap();
        assert_eq!(train.id, "T9");
        assert_eq!(train.classes.first.price, "1500.50".parse::<Decimal>().unwrap());
    }
}
