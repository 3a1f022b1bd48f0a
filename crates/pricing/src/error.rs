use thiserror::Error;

pub type PricingResult<T> = Result<T, PricingError>;

/// Why a price (shipping quote, order total or modifier chain) could not be computed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Decimal arithmetic left the representable range.
    #[error("arithmetic overflow in {stage}")]
    Overflow { stage: &'static str },

    /// A caller-supplied stage refused to produce a value.
    #[error("modifier rejected resolution: {0}")]
    Rejected(String),
}

impl PricingError {
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }
}
