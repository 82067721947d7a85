//! TajiCart Core - Shared types library.
//!
//! This crate provides common types used across all TajiCart components:
//! - `pricing` - Pricing, discount-stacking and loyalty-tier engine
//! - `storefront` - Public-facing JSON API
//! - `cli` - Command-line tools for threshold management and quote simulation
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, points, tiers and
//!   payment methods

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
