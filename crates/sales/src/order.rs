use rust_decimal::Decimal;

use flexorder_core::{DomainError, DomainResult, Entity, Money, OrderId};
use flexorder_payments::{PaymentGateway, PaymentMethod};
use flexorder_pricing::{PricingError, PricingResult, ShippingStrategy};

/// A purchase order.
///
/// Read-only after construction. Distances are supplied per call and never
/// stored, so two `total` calls with different distances are independent.
#[derive(Debug)]
pub struct Order {
    id: OrderId,
    base_value: Money,
    payment_method: Box<dyn PaymentMethod>,
    shipping_strategy: Box<dyn ShippingStrategy>,
}

impl Order {
    /// Create an order, rejecting a negative base value.
    pub fn new(
        base_value: Money,
        payment_method: impl PaymentMethod + 'static,
        shipping_strategy: impl ShippingStrategy + 'static,
    ) -> DomainResult<Self> {
        Self::with_id(OrderId::new(), base_value, payment_method, shipping_strategy)
    }

    pub fn with_id(
        id: OrderId,
        base_value: Money,
        payment_method: impl PaymentMethod + 'static,
        shipping_strategy: impl ShippingStrategy + 'static,
    ) -> DomainResult<Self> {
        Self::from_boxed(
            id,
            base_value,
            Box::new(payment_method),
            Box::new(shipping_strategy),
        )
    }

    /// Create an order from strategies already selected at runtime
    /// (`PaymentKind::method`, `ShippingTier::strategy`).
    pub fn from_boxed(
        id: OrderId,
        base_value: Money,
        payment_method: Box<dyn PaymentMethod>,
        shipping_strategy: Box<dyn ShippingStrategy>,
    ) -> DomainResult<Self> {
        if base_value < Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "base_value must not be negative (got {base_value})"
            )));
        }

        Ok(Self {
            id,
            base_value,
            payment_method,
            shipping_strategy,
        })
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn base_value(&self) -> Money {
        self.base_value
    }

    pub fn payment_method(&self) -> &dyn PaymentMethod {
        self.payment_method.as_ref()
    }

    pub fn shipping_strategy(&self) -> &dyn ShippingStrategy {
        self.shipping_strategy.as_ref()
    }

    /// Base value plus the shipping quote for `distance_km`.
    pub fn total(&self, distance_km: Money) -> PricingResult<Money> {
        let shipping = self.shipping_strategy.quote(distance_km)?;
        self.base_value
            .checked_add(shipping)
            .ok_or(PricingError::Overflow { stage: "order_total" })
    }

    /// Pay `total(distance_km)` through the order's payment method and return it.
    ///
    /// Nothing is sent to the gateway when the total cannot be computed.
    pub fn settle(
        &self,
        distance_km: Money,
        gateway: &mut dyn PaymentGateway,
    ) -> PricingResult<Money> {
        let total = self.total(distance_km)?;
        tracing::info!(
            order_id = %self.id,
            method = self.payment_method.label(),
            shipping = self.shipping_strategy.name(),
            %distance_km,
            %total,
            "settling order"
        );
        self.payment_method.apply(gateway, total);
        Ok(total)
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
