//! TechStore: a single-user inventory manager.
//!
//! TechStore keeps a small product list in memory, persists it to a flat
//! JSON file in the working directory, and drives everything through an
//! interactive five-option text menu. Single process, single thread,
//! single operator; all state lives in one [`core::inventory::Inventory`]
//! value constructed at session start.
//!
//! # Crate Structure
//!
//! - [`core`]: inventory data model, persistence, and rendering helpers
//! - [`shell`]: the interactive menu loop (prompt, validate, dispatch)

pub mod core;
pub mod shell;
