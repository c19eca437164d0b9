//! Domain model definitions.

pub mod car;
pub mod location;
pub mod payment;
pub mod queue;
pub mod rating;
pub mod report;
pub mod user;

pub use car::Car;
pub use location::{Location, Point};
pub use payment::Payment;
pub use queue::{QueueEntry, QueueStatus};
pub use rating::Rating;
pub use report::Report;
pub use user::{User, UserRole, UserSummary};
