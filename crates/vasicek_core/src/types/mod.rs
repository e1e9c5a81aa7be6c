//! Shared types for the pricing engine.
//!
//! # Re-exports
//!
//! [`DomainError`] is re-exported at this module level for convenience.

pub mod error;

pub use error::DomainError;
