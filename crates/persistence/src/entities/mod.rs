//! Row entities (database row mappings).

pub mod car;
pub mod location;
pub mod payment;
pub mod queue_entry;
pub mod rating;
pub mod report;
pub mod user;

pub use car::CarEntity;
pub use location::LocationEntity;
pub use payment::PaymentEntity;
pub use queue_entry::QueueEntryEntity;
pub use rating::RatingEntity;
pub use report::ReportEntity;
pub use user::{BeeperCandidateEntity, UserEntity};
