// Service exports
pub mod matching;
pub mod store;

pub use matching::{MatchingService, ServiceError};
pub use store::{ProfileSource, ProfileStore, SourceError};
