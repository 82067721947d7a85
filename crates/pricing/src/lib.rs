//! TajiCart pricing engine.
//!
//! The one subsystem of the storefront with real computational rules: loyalty
//! tier resolution under a configurable early-access policy, deterministic
//! stacking of independently-sourced discounts, and checkout quote assembly.
//!
//! # Architecture
//!
//! Everything in this crate is pure computation over data already fetched by
//! collaborators. There is no I/O, no shared mutable state and no async;
//! every function can be invoked concurrently for different checkout
//! attempts. A quote is recomputed from scratch on demand - there is no
//! persistent "current discount" value anywhere.
//!
//! The same module is used wherever a price is shown or charged (line item,
//! cart summary, checkout quote), so the three can never disagree.
//!
//! # Modules
//!
//! - [`thresholds`] - tier point thresholds and their validation
//! - [`account`] - loyalty account snapshot consumed by the resolver
//! - [`resolver`] - effective tier and early-access status
//! - [`stacker`] - sequential per-line discount application
//! - [`cart`] - product snapshots and cart lines
//! - [`rewards`] - community-campaign reward selection
//! - [`redeem`] - loyalty point redemption
//! - [`quote`] - the checkout quote pipeline
//! - [`preview`] - time-boxed display-only tier preview
//! - [`error`] - engine error taxonomy

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod account;
pub mod cart;
pub mod error;
pub mod preview;
pub mod quote;
pub mod redeem;
pub mod resolver;
pub mod rewards;
pub mod stacker;
pub mod thresholds;

pub use account::{AccountSource, LoyaltyAccount};
pub use cart::{CartLine, ProductSnapshot};
pub use error::{QuoteError, ThresholdError};
pub use preview::TierPreview;
pub use quote::{CheckoutQuote, LineQuote, QuoteRequest, build_quote};
pub use resolver::{TierResolution, resolve};
pub use rewards::{CommunityReward, RewardEffect, RewardKind, RewardSelection, ToggleOutcome};
pub use stacker::{LineDiscount, apply_discounts};
pub use thresholds::{TierThreshold, TierThresholdConfig};
