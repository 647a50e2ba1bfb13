//! Shared types for the object layer.

pub mod error;

pub use error::Error;
