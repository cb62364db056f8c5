//! Order aggregate and related types.

mod aggregate;
mod state;
mod value_objects;

pub use aggregate::Order;
pub use state::OrderState;
pub use value_objects::{DeliveryDetail, DeliveryMethod};

use thiserror::Error;

use crate::observer::ObserverError;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// No transition exists from the current state for this delivery method.
    #[error("Invalid state transition: no state follows {current_state} for a {delivery_method} order")]
    InvalidStateTransition {
        current_state: OrderState,
        delivery_method: DeliveryMethod,
    },

    /// The address (delivery) or location (pickup) was never set.
    #[error("Missing delivery detail: {delivery_method} order has no {}", detail_name(.delivery_method))]
    MissingDeliveryDetail { delivery_method: DeliveryMethod },

    /// An observer failed while being notified; later observers were skipped.
    #[error("Observer '{observer}' failed: {source}")]
    ObserverFailed {
        observer: String,
        source: ObserverError,
    },
}

fn detail_name(method: &DeliveryMethod) -> &'static str {
    match method {
        DeliveryMethod::Delivery => "delivery address",
        DeliveryMethod::Pickup => "pickup location",
    }
}
