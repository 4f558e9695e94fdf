//! # phoneguard-core
//!
//! Core crate for PhoneGuard. Contains the security-event model, typed
//! identifiers, filter types, device status, configuration schemas,
//! capability-provider traits, and the unified error system.
//!
//! This crate has **no** internal dependencies on other PhoneGuard crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
