//! Hint - Onboarding Questionnaire Library
//!
//! The onboarding flow for the Hint app: a static question catalog, a
//! session state container, a validation gate for forward navigation,
//! and durable key-value persistence of the collected answers.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
