//! FlexOrder application wiring: configuration and the checkout run.

pub mod config;
pub mod run;

pub use config::AppConfig;
pub use run::{CheckoutReport, run};
