//! Product snapshots and cart lines.
//!
//! A cart line references a snapshot of the product as it was when added to
//! the cart; the catalog collaborator owns the live record. Snapshots with
//! missing or unusable fields are rejected at construction - a product is
//! never silently priced at zero.

use serde::{Deserialize, Serialize};

use tajicart_core::{CartLineId, DiscountPercent, Money, ProductId};

use crate::error::QuoteError;

/// A product as captured when it entered the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub product_id: ProductId,
    /// Positive unit price.
    pub price: Money,
    /// The product's own promotional discount.
    pub discount_percent: DiscountPercent,
    /// Units in stock at snapshot time.
    pub stock: u32,
}

impl ProductSnapshot {
    /// Create a validated snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::NonPositivePrice`] when the price is zero.
    pub fn new(
        product_id: ProductId,
        price: Money,
        discount_percent: DiscountPercent,
        stock: u32,
    ) -> Result<Self, QuoteError> {
        if price.is_zero() {
            return Err(QuoteError::NonPositivePrice(product_id));
        }
        Ok(Self {
            product_id,
            price,
            discount_percent,
            stock,
        })
    }
}

/// One line of a cart: a product snapshot and a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub line_id: CartLineId,
    pub product: ProductSnapshot,
    pub quantity: u32,
}

impl CartLine {
    /// Create a validated cart line.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::ZeroQuantity`] when the quantity is zero.
    pub fn new(
        line_id: CartLineId,
        product: ProductSnapshot,
        quantity: u32,
    ) -> Result<Self, QuoteError> {
        if quantity == 0 {
            return Err(QuoteError::ZeroQuantity(line_id));
        }
        Ok(Self {
            line_id,
            product,
            quantity,
        })
    }

    /// Pre-discount total for this line.
    #[must_use]
    pub fn undiscounted_total(&self) -> Money {
        self.product.price.mul_quantity(self.quantity)
    }
}
