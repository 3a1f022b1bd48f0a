use core::str::FromStr;

use serde::{Deserialize, Serialize};

use flexorder_core::{DomainError, Money};

use crate::gateway::PaymentGateway;

/// A way of paying for an order.
///
/// Variants differ only in the label reported to the gateway. Amounts are
/// forwarded as given; negative amounts are not rejected.
pub trait PaymentMethod: core::fmt::Debug {
    fn label(&self) -> &'static str;

    fn apply(&self, gateway: &mut dyn PaymentGateway, amount: Money) {
        gateway.payment_completed(self.label(), amount);
    }
}

impl<P: PaymentMethod + ?Sized> PaymentMethod for Box<P> {
    fn label(&self) -> &'static str {
        (**self).label()
    }

    fn apply(&self, gateway: &mut dyn PaymentGateway, amount: Money) {
        (**self).apply(gateway, amount)
    }
}

/// Instant bank transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pix;

impl PaymentMethod for Pix {
    fn label(&self) -> &'static str {
        "PIX"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Credit;

impl PaymentMethod for Credit {
    fn label(&self) -> &'static str {
        "Credit Card"
    }
}

/// Built-in payment methods, selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    Pix,
    Credit,
}

impl PaymentKind {
    pub fn method(self) -> Box<dyn PaymentMethod> {
        match self {
            PaymentKind::Pix => Box::new(Pix),
            PaymentKind::Credit => Box::new(Credit),
        }
    }
}

impl FromStr for PaymentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pix" => Ok(PaymentKind::Pix),
            "credit" | "credit_card" => Ok(PaymentKind::Credit),
            other => Err(DomainError::unknown("payment method", other)),
        }
    }
}
