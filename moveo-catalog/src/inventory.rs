use std::collections::BTreeSet;

use chrono::NaiveDate;
use uuid::Uuid;

use moveo_core::{
    Booking, BookingId, CoreError, FareClassName, NewTrain, SearchQuery, Train, TrainId,
};

use crate::fleet;
use crate::pricing::PricingEngine;

/// Owns every train and every booking. Seat counts and the booking list are
/// only changed together, through `reserve` and `release`.
#[derive(Debug, Default)]
pub struct Ledger {
    trains: Vec<Train>,
    bookings: Vec<Booking>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger pre-loaded with the demo fleet
    pub fn with_fleet() -> Self {
        Self {
            trains: fleet::demo_fleet(),
            bookings: Vec::new(),
        }
    }

    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    pub fn train(&self, train_id: &str) -> Option<&Train> {
        self.trains.iter().find(|t| t.id == train_id)
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn booking(&self, booking_id: &BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| &b.id == booking_id)
    }

    /// Bookings owned by a user, oldest first
    pub fn bookings_for(&self, user_id: &str) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Every station served as a source or destination, sorted
    pub fn stations(&self) -> Vec<String> {
        self.trains
            .iter()
            .flat_map(|t| [t.source.clone(), t.destination.clone()])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Reserve seats and record a confirmed booking
    pub fn reserve(
        &mut self,
        user_id: &str,
        train_id: &str,
        date: NaiveDate,
        passengers: u32,
        class: FareClassName,
    ) -> LedgerResult<Booking> {
        if passengers == 0 {
            return Err(CoreError::ValidationError(
                "Passenger count must be at least 1.".to_string(),
            )
            .into());
        }

        let train = self
            .trains
            .iter_mut()
            .find(|t| t.id == train_id)
            .ok_or_else(|| LedgerError::TrainNotFound(train_id.to_string()))?;

        let fare = train.classes.get(class);
        if !fare.has_capacity_for(passengers) {
            tracing::warn!(
                "Rejected booking of {} {} seats on {}: {} left",
                passengers,
                class,
                train_id,
                fare.available_seats
            );
            return Err(LedgerError::InsufficientCapacity {
                class,
                requested: passengers,
                available: fare.available_seats,
            });
        }

        let quote = PricingEngine::quote(train, class, passengers)?;
        train.classes.get_mut(class).available_seats -= passengers;

        let booking = Booking::confirmed(
            user_id.to_string(),
            train,
            date,
            class,
            passengers,
            quote.total,
        );
        self.bookings.push(booking.clone());

        tracing::info!(
            "Booking {} confirmed: {} x {} on {} ({})",
            booking.id,
            passengers,
            class,
            train_id,
            booking.total_price
        );
        Ok(booking)
    }

    /// Cancel a booking and hand its seats back to the train
    pub fn release(&mut self, booking_id: &BookingId) -> LedgerResult<Booking> {
        let index = self
            .bookings
            .iter()
            .position(|b| &b.id == booking_id)
            .ok_or(LedgerError::BookingNotFound(*booking_id))?;
        let booking = self.bookings.remove(index);

        match self.trains.iter_mut().find(|t| t.id == booking.train_id) {
            Some(train) => {
                let fare = train.classes.get_mut(booking.class);
                fare.available_seats = fare
                    .available_seats
                    .saturating_add(booking.passengers)
                    .min(fare.total_seats);
            }
            None => {
                // The train was deleted after booking; nothing to restore.
                tracing::warn!(
                    "Released booking {} for missing train {}",
                    booking.id,
                    booking.train_id
                );
            }
        }

        tracing::info!("Booking {} has been cancelled", booking.id);
        Ok(booking)
    }

    pub fn add_train(&mut self, new_train: NewTrain) -> LedgerResult<Train> {
        let id = format!("T{}", Uuid::new_v4().simple());
        let mut train = new_train.into_train(id);
        validate_train(&train)?;
        train.normalize();

        self.trains.push(train.clone());
        tracing::info!("Train {} added as {}", train.train_number, train.id);
        Ok(train)
    }

    /// Replace the whole record with the same id
    pub fn update_train(&mut self, mut train: Train) -> LedgerResult<Train> {
        validate_train(&train)?;
        train.normalize();

        let slot = self
            .trains
            .iter_mut()
            .find(|t| t.id == train.id)
            .ok_or_else(|| LedgerError::TrainNotFound(train.id.clone()))?;
        *slot = train.clone();

        tracing::info!("Train {} updated", train.id);
        Ok(train)
    }

    /// Remove a train. Bookings that reference it are left in place.
    pub fn delete_train(&mut self, train_id: &str) -> LedgerResult<Train> {
        let index = self
            .trains
            .iter()
            .position(|t| t.id == train_id)
            .ok_or_else(|| LedgerError::TrainNotFound(train_id.to_string()))?;
        let train = self.trains.remove(index);

        let orphaned = self.bookings.iter().filter(|b| b.train_id == train_id).count();
        if orphaned > 0 {
            tracing::warn!("Train {} deleted with {} active bookings", train_id, orphaned);
        }
        tracing::info!("Train ID {} has been deleted", train_id);
        Ok(train)
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<Train> {
        self.trains
            .iter()
            .filter(|t| t.serves(query.from_station(), query.to_station()))
            .filter(|t| query.class.admits(&t.classes, query.min_seats))
            .cloned()
            .collect()
    }
}

/// Checks every fare class first, then the descriptive fields.
fn validate_train(train: &Train) -> LedgerResult<()> {
    for (class, fare) in train.classes.iter() {
        if fare.available_seats > fare.total_seats {
            return Err(LedgerError::InvalidSeatConfiguration {
                class,
                available: fare.available_seats,
                total: fare.total_seats,
            });
        }
        if fare.total_seats == 0 {
            return Err(CoreError::ValidationError(format!(
                "{} Class must have at least one seat.",
                class
            ))
            .into());
        }
        if fare.price <= rust_decimal::Decimal::ZERO {
            return Err(CoreError::ValidationError(format!(
                "{} Class price must be positive.",
                class
            ))
            .into());
        }
    }

    let required = [
        &train.train_name,
        &train.train_number,
        &train.source,
        &train.destination,
    ];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(CoreError::ValidationError(
            "Please fill all required train fields.".to_string(),
        )
        .into());
    }

    Ok(())
}

pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Train not found: {0}")]
    TrainNotFound(TrainId),

    #[error("Booking not found: {0}")]
    BookingNotFound(BookingId),

    #[error("Booking failed: Only {available} {class} seats available.")]
    InsufficientCapacity {
        class: FareClassName,
        requested: u32,
        available: u32,
    },

    #[error("Error in {class} Class: Available seats ({available}) cannot be greater than total seats ({total}).")]
    InvalidSeatConfiguration {
        class: FareClassName,
        available: u32,
        total: u32,
    },

    #[error(transparent)]
    Validation(#[from] CoreError),
}
