//! # Domain Models
//!
//! This crate contains pure domain types with no dependencies.
//! Keep it lean: no networking, no heavy logic—just data and simple helpers.

pub mod flags;
