//! Core types for TajiCart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod payment;
pub mod points;
pub mod tier;

pub use id::*;
pub use money::{DiscountPercent, Money, MoneyError};
pub use payment::PaymentMethod;
pub use points::{POINTS_PER_KES, Points};
pub use tier::{EarlyAccessStatus, Tier};
