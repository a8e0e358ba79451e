//! Core inventory types and operations.

pub mod error;
pub mod inventory;
pub mod output;
pub mod persist;
