//! Inventory record model for spreadsheet generation.
//!
//! This crate contains the `Item` record and the validation rules for the
//! generate request payload, implemented as pure logic (no IO, no HTTP).

pub mod item;
pub mod payload;

pub use item::{FieldValue, Item};
pub use payload::parse_items;
