//! Types shared by every layer of the BFF: the domain model, validated inputs,
//! the error taxonomy and the backend configuration.

pub mod config;
pub mod error;
pub mod input;
pub mod model;

pub use error::{DomainError, ErrorKind};
