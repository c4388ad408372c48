//! `excelgen-core` — error model shared by every layer.
//!
//! This crate has no IO and no framework dependencies.

pub mod error;

pub use error::{ServiceError, ServiceResult};
