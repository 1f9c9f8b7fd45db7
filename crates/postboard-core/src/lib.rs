//! # Postboard Core
//!
//! The domain layer of Postboard.
//! This crate holds the post model and the ports that storage and
//! secret backends implement. It has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{RepoError, SecretError};
