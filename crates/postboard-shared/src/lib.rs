//! # Postboard Shared
//!
//! Request and response shapes shared by the web layer and its tests.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
