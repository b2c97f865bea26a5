pub mod inventory;
pub mod pricing;
pub mod form;
pub mod fleet;

pub use inventory::{Ledger, LedgerError, LedgerResult};
pub use pricing::{FareQuote, PricingEngine};
pub use form::{FareClassForm, TrainForm};
