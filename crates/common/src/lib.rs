//! Shared value types for the ice-cream ordering system.
//!
//! Identifiers for orders and customers, and [`Amount`], the validated
//! single unit of account every price and payment is expressed in.

pub mod amount;
pub mod types;

pub use amount::{Amount, AmountError};
pub use types::{CustomerId, OrderId};
