//! Order lifecycle for the ice-cream shop.
//!
//! This crate provides:
//! - [`OrderState`] and the delivery-dependent transition table
//! - The [`Order`] aggregate, which runs each state's behavior and notifies
//!   its observers
//! - The [`OrderObserver`] trait and [`CustomerNotifier`], the observer that
//!   keeps a customer informed

pub mod notifier;
pub mod observer;
pub mod order;

pub use common::OrderId;
pub use notifier::{CustomerNotifier, Notification};
pub use observer::{ObserverError, OrderObserver};
pub use order::{DeliveryDetail, DeliveryMethod, Order, OrderError, OrderState};
