//! Payment method selection.
//!
//! The pricing engine never talks to a gateway; the selected method is
//! opaque data forwarded to the order-placement collaborator.

use serde::{Deserialize, Serialize};

/// Payment method selected at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Card payment via the hosted gateway.
    Card,
    /// M-Pesa mobile money.
    MobileMoney,
    /// Cash on delivery.
    CashOnDelivery,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Card => write!(f, "card"),
            Self::MobileMoney => write!(f, "mobile_money"),
            Self::CashOnDelivery => write!(f, "cash_on_delivery"),
        }
    }
}
