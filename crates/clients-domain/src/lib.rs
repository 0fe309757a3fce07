//! clients-domain
//!
//! Pure domain models for client records and their form fields.
//! No I/O, no CLI, no network. Only data types and core enums.

pub mod client;
pub mod field;

pub use client::*;
pub use field::*;
