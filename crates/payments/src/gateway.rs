//! Payment gateway collaborators.

use flexorder_core::{CurrencySymbol, Money, format_money};

/// Receives "payment executed" notifications.
pub trait PaymentGateway {
    fn payment_completed(&mut self, method: &str, amount: Money);
}

/// Gateway that reports each payment as a log line.
#[derive(Debug, Clone, Default)]
pub struct TracingPaymentGateway {
    currency: CurrencySymbol,
}

impl TracingPaymentGateway {
    pub fn new(currency: CurrencySymbol) -> Self {
        Self { currency }
    }

    /// `Payment via <method> completed: <currency><amount>`.
    pub fn confirmation_line(&self, method: &str, amount: Money) -> String {
        format!(
            "Payment via {method} completed: {}",
            format_money(&self.currency, amount)
        )
    }
}

impl PaymentGateway for TracingPaymentGateway {
    fn payment_completed(&mut self, method: &str, amount: Money) {
        let line = self.confirmation_line(method, amount);
        tracing::info!(target: "flexorder::payment", method, %amount, "{line}");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPayment {
    pub method: String,
    pub amount: Money,
}

/// In-memory gateway for tests/dev.
#[derive(Debug, Clone, Default)]
pub struct RecordingPaymentGateway {
    payments: Vec<RecordedPayment>,
}

impl RecordingPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payments(&self) -> &[RecordedPayment] {
        &self.payments
    }
}

impl PaymentGateway for RecordingPaymentGateway {
    fn payment_completed(&mut self, method: &str, amount: Money) {
        self.payments.push(RecordedPayment {
            method: method.to_string(),
            amount,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn confirmation_line_uses_currency_and_two_decimals() {
        let gateway = TracingPaymentGateway::default();
        assert_eq!(
            gateway.confirmation_line("PIX", dec!(234.4)),
            "Payment via PIX completed: R$234.40"
        );
    }
}
