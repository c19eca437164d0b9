//! Shared utilities and common types for the Beep backend.
//!
//! This crate provides common functionality used across all other crates:
//! - JWT token generation and validation
//! - Password hashing with Argon2id
//! - Offset/limit pagination types
//! - Common validation logic

pub mod jwt;
pub mod pagination;
pub mod password;
pub mod validation;
