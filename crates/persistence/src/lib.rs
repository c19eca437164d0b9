//! Persistence layer for the Beep backend.
//!
//! Hand-written SQL over a PostgreSQL pool: row entities under `entities`,
//! repositories under `repositories`, migrations under `src/migrations`.

pub mod db;
pub mod entities;
pub mod repositories;
