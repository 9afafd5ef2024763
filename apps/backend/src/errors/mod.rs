//! Error handling for the misfortune backend.

pub mod domain;

pub use domain::DomainError;
