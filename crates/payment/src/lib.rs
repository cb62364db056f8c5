//! Payment settlement for the ice-cream shop.
//!
//! A [`PaymentProcessor`] settles an amount with its [`PaymentStrategy`],
//! credits loyalty points for the same amount to a shared
//! [`LoyaltyProgram`], and holds a FIFO queue of [`PaymentCommand`]s that
//! run after settlement (customer feedback, for instance).

pub mod command;
pub mod error;
pub mod loyalty;
pub mod processor;
pub mod strategy;

pub use command::{FeedbackCommand, FeedbackEntry, FeedbackLog, PaymentCommand};
pub use error::{PaymentError, Result};
pub use loyalty::{DEFAULT_SPEND_PER_POINT, LoyaltyProgram, SimpleLoyaltyProgram};
pub use processor::PaymentProcessor;
pub use strategy::{
    CashOnDelivery, CreditCardPayment, DigitalWalletPayment, PaymentMethod, PaymentStrategy,
    Settlement,
};
