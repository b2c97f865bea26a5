use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::fare::FareClassName;
use crate::train::{Train, TrainId};

pub type BookingId = Uuid;

/// Bookings are removed outright on cancellation, so a stored booking is
/// always confirmed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
}

/// A confirmed seat reservation with a snapshot of the train at booking time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: String,
    pub train_id: TrainId,
    pub train_name: String,
    pub train_number: String,
    pub destination: String,
    pub date: NaiveDate,
    pub class: FareClassName,
    pub passengers: u32,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn confirmed(
        user_id: String,
        train: &Train,
        date: NaiveDate,
        class: FareClassName,
        passengers: u32,
        total_price: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            train_id: train.id.clone(),
            train_name: train.train_name.clone(),
            train_number: train.train_number.clone(),
            destination: train.destination.clone(),
            date,
            class,
            passengers,
            total_price,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        }
    }
}
