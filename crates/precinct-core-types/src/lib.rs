//! Core types shared across Precinct facilities
//!
//! This crate provides foundational types used by the error, logging and
//! audit facilities:
//!
//! - **Correlation types**: SessionId
//! - **Schema constants**: Canonical field keys, event names and audit outcomes

pub mod correlation;
pub mod schema;

pub use correlation::SessionId;
