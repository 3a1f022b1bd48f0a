//! Payment methods and the gateway they notify.
//!
//! Payment methods compute nothing: applying one reports `(label, amount)` to a
//! [`PaymentGateway`]. No real payment provider is integrated.

pub mod gateway;
pub mod method;

pub use gateway::{PaymentGateway, RecordedPayment, RecordingPaymentGateway, TracingPaymentGateway};
pub use method::{Credit, PaymentKind, PaymentMethod, Pix};
