//! Error handling for the spinner backend.

pub mod domain;

pub use domain::DomainError;
