//! Integration tests for TajiCart.
//!
//! # Test Categories
//!
//! - `quote_pipeline` - Full pricing pipeline scenarios across the engine
//!   components (resolver, stacker, rewards, redemption)
//! - `collaborator_fallbacks` - The storefront's degradation contract,
//!   driven through stub collaborator services
//!
//! The crate root exports shared stub collaborator implementations used by
//! the storefront tests.

pub mod stubs;
