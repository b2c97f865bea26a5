use serde::{Deserialize, Serialize};

use crate::fare::FareClasses;

pub type TrainId = String;

/// A scheduled service with its three fare classes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Train {
    pub id: TrainId,
    pub train_name: String,
    pub train_number: String,
    pub source: String,
    pub destination: String,
    pub departure: String,
    pub description: Option<String>,
    pub classes: FareClasses,
}

/// Train data submitted by an admin before an id is assigned
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTrain {
    pub train_name: String,
    pub train_number: String,
    pub source: String,
    pub destination: String,
    pub departure: String,
    pub description: Option<String>,
    pub classes: FareClasses,
}

impl NewTrain {
    pub fn into_train(self, id: TrainId) -> Train {
        Train {
            id,
            train_name: self.train_name,
            train_number: self.train_number,
            source: self.source,
            destination: self.destination,
            departure: self.departure,
            description: self.description,
            classes: self.classes,
        }
    }
}

impl Train {
    /// Uppercases the station names so searches match exactly.
    pub fn normalize(&mut self) {
        self.source = normalize_station(&self.source);
        self.destination = normalize_station(&self.destination);
        if self.description.as_deref().is_some_and(|d| d.trim().is_empty()) {
            self.description = None;
        }
    }

    pub fn serves(&self, from: Option<&str>, to: Option<&str>) -> bool {
        let source_match = from.map_or(true, |s| self.source == normalize_station(s));
        let dest_match = to.map_or(true, |d| self.destination == normalize_station(d));
        source_match && dest_match
    }
}

pub fn normalize_station(station: &str) -> String {
    station.trim().to_uppercase()
}
