use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use flexorder_core::{CurrencySymbol, InvoiceId, Money, ValueObject, format_money};

/// An emitted invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub invoice_id: InvoiceId,
    pub amount: Option<Money>,
    pub issued_at: DateTime<Utc>,
}

impl ValueObject for InvoiceRecord {}

impl InvoiceRecord {
    pub fn new(amount: Option<Money>, issued_at: DateTime<Utc>) -> Self {
        Self {
            invoice_id: InvoiceId::new(),
            amount,
            issued_at,
        }
    }

    /// Human-readable summary, e.g. `Invoice issued. Amount: R$232.68`.
    pub fn summary(&self, currency: &CurrencySymbol) -> String {
        match self.amount {
            Some(amount) => format!("Invoice issued. Amount: {}", format_money(currency, amount)),
            None => "Invoice issued.".to_string(),
        }
    }
}

/// Receives the final checkout amount (if any) and emits an invoice for it.
pub trait InvoiceGenerator {
    fn emit(&mut self, amount: Option<Money>);
}

/// Generator that logs each invoice and keeps the emitted records.
#[derive(Debug, Clone, Default)]
pub struct TracingInvoiceGenerator {
    currency: CurrencySymbol,
    issued: Vec<InvoiceRecord>,
}

impl TracingInvoiceGenerator {
    pub fn new(currency: CurrencySymbol) -> Self {
        Self {
            currency,
            issued: Vec::new(),
        }
    }

    pub fn issued(&self) -> &[InvoiceRecord] {
        &self.issued
    }
}

impl InvoiceGenerator for TracingInvoiceGenerator {
    fn emit(&mut self, amount: Option<Money>) {
        let record = InvoiceRecord::new(amount, Utc::now());
        tracing::info!(
            target: "flexorder::invoicing",
            invoice_id = %record.invoice_id,
            "{}",
            record.summary(&self.currency)
        );
        self.issued.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn summary_with_amount_uses_two_decimals() {
        let record = InvoiceRecord::new(Some(dec!(232.68)), Utc::now());
        assert_eq!(
            record.summary(&CurrencySymbol::default()),
            "Invoice issued. Amount: R$232.68"
        );
    }

    #[test]
    fn summary_without_amount_is_generic() {
        let record = InvoiceRecord::new(None, Utc::now());
        assert_eq!(record.summary(&CurrencySymbol::new("$")), "Invoice issued.");
    }

    #[test]
    fn generator_keeps_emitted_records_in_order() {
        let mut generator = TracingInvoiceGenerator::default();

        generator.emit(Some(dec!(200.0)));
        generator.emit(None);

        let amounts: Vec<_> = generator.issued().iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![Some(dec!(200.0)), None]);
        assert_ne!(generator.issued()[0].invoice_id, generator.issued()[1].invoice_id);
    }

    #[test]
    fn record_serializes_amount_as_string() {
        let record = InvoiceRecord::new(Some(dec!(232.68)), Utc::now());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["amount"], "232.68");
    }
}
