//! Invoicing collaborator.
//!
//! Invoices are emitted records, not persisted documents: an invoice carries
//! the final amount when checkout resolved one, and no amount otherwise.

pub mod invoice;

pub use invoice::{InvoiceGenerator, InvoiceRecord, TracingInvoiceGenerator};
