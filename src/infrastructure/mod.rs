//! Infrastructure layer providing external service integrations.
//!
//! This module contains the durable key-value preference store backing
//! the onboarding flow.

pub mod persistence;

pub use persistence::*;
