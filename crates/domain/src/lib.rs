//! Domain models and event types for the Beep backend.
//!
//! This crate holds the entities of the ride-coordination domain (users,
//! locations, queue entries, reports, ratings, payments, cars), the
//! request/response payloads exchanged with clients, and the typed pub/sub
//! topics that scope live updates to a single user.

pub mod events;
pub mod models;
