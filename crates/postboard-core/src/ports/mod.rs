//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod repository;
mod secrets;

pub use repository::PostRepository;
pub use secrets::SecretProvider;
