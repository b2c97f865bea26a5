use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::fare::{FareClassName, FareClasses};
use crate::CoreError;

/// Which fare classes a search checks for free seats
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub enum ClassFilter {
    #[default]
    All,
    Only(FareClassName),
}

impl ClassFilter {
    pub fn admits(&self, classes: &FareClasses, seats: u32) -> bool {
        match self {
            ClassFilter::All => classes.iter().any(|(_, c)| c.has_capacity_for(seats)),
            ClassFilter::Only(name) => classes.get(*name).has_capacity_for(seats),
        }
    }
}

impl FromStr for ClassFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() || s.trim().eq_ignore_ascii_case("all") {
            return Ok(ClassFilter::All);
        }
        s.parse().map(ClassFilter::Only)
    }
}

impl TryFrom<String> for ClassFilter {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClassFilter> for String {
    fn from(filter: ClassFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for ClassFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassFilter::All => f.write_str("all"),
            ClassFilter::Only(name) => write!(f, "{}", name),
        }
    }
}

/// Filter applied to the train list. Empty station filters match everything.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    #[serde(default)]
    pub class: ClassFilter,
    #[serde(default = "default_min_seats")]
    pub min_seats: u32,
}

fn default_min_seats() -> u32 {
    1
}

impl SearchQuery {
    pub fn new(from: Option<&str>, to: Option<&str>, class: ClassFilter, min_seats: u32) -> Self {
        Self {
            from: from.map(str::to_string),
            to: to.map(str::to_string),
            class,
            min_seats,
        }
    }

    pub fn from_station(&self) -> Option<&str> {
        non_empty(self.from.as_deref())
    }

    pub fn to_station(&self) -> Option<&str> {
        non_empty(self.to.as_deref())
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new(None, None, ClassFilter::All, default_min_seats())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fare::FareClass;
    use rust_decimal::Decimal;

    #[test]
    fn test_class_filter_parsing() {
        assert_eq!("all".parse::<ClassFilter>().unwrap(), ClassFilter::All);
        assert_eq!("".parse::<ClassFilter>().unwrap(), ClassFilter::All);
        assert_eq!(
            "Business".parse::<ClassFilter>().unwrap(),
            ClassFilter::Only(FareClassName::Business)
        );
        assert!("cargo".parse::<ClassFilter>().is_err());
    }

    #[test]
    fn test_query_deserialization_defaults() {
        let json = r#"{ "from": "delhi", "to": "" }"#;
        let query: SearchQuery = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(query.from_station(), Some("delhi"));
        assert_eq!(query.to_station(), None);
        assert_eq!(query.class, ClassFilter::All);
        assert_eq!(query.min_seats, 1);
    }

    #[test]
    fn test_filter_admits() {
        let classes = FareClasses {
            first: FareClass::new(Decimal::from(1000), 20, 0),
            business: FareClass::new(Decimal::from(700), 50, 3),
            economy: FareClass::new(Decimal::from(300), 120, 0),
        };
        assert!(ClassFilter::All.admits(&classes, 3));
        assert!(!ClassFilter::All.admits(&classes, 4));
        assert!(!ClassFilter::Only(FareClassName::First).admits(&classes, 1));
        assert!(ClassFilter::Only(FareClassName::Business).admits(&classes, 2));
    }
}
