//! Repository implementations for database operations.

pub mod car;
pub mod location;
pub mod payment;
pub mod queue_entry;
pub mod rating;
pub mod report;
pub mod user;

pub use car::CarRepository;
pub use location::LocationRepository;
pub use payment::PaymentRepository;
pub use queue_entry::QueueRepository;
pub use rating::RatingRepository;
pub use report::ReportRepository;
pub use user::{NewUser, UserRepository};
