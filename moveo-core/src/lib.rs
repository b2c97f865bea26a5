pub mod fare;
pub mod train;
pub mod booking;
pub mod search;
pub mod identity;

pub use fare::{FareClass, FareClassName, FareClasses};
pub use train::{NewTrain, Train, TrainId};
pub use booking::{Booking, BookingId, BookingStatus};
pub use search::{ClassFilter, SearchQuery};
pub use identity::{Credentials, CredentialVerifier, FixedCredentialVerifier, Role, User};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    IdentityError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
