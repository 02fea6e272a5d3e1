//! MediWrap Core - Shared types library.
//!
//! This crate provides common types used across all MediWrap components:
//! - `cart` - Shopping cart state manager and persistence
//! - `cli` - Command-line tools for inspecting and driving a cart
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
