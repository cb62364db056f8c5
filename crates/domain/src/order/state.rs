//! Order state machine.

use serde::{Deserialize, Serialize};

use super::DeliveryMethod;

/// The state of an order in its lifecycle.
///
/// State transitions:
/// ```text
///                ┌─ Delivery ─► InPreparation ──► OutForDelivery ──► Delivered
/// Placed ────────┤
///                └─ Pickup ───► ReadyForPickup
/// ```
///
/// The branch is chosen once, on leaving `Placed`, by the order's delivery
/// method. `Delivered` and `ReadyForPickup` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderState {
    /// Order has been received.
    #[default]
    Placed,

    /// The ice cream is being made for delivery.
    InPreparation,

    /// A courier has the order.
    OutForDelivery,

    /// Order handed to the customer at their address (terminal state).
    Delivered,

    /// Order is waiting at the counter (terminal state).
    ReadyForPickup,
}

impl OrderState {
    /// Every state, in lifecycle order.
    pub const ALL: [OrderState; 5] = [
        OrderState::Placed,
        OrderState::InPreparation,
        OrderState::OutForDelivery,
        OrderState::Delivered,
        OrderState::ReadyForPickup,
    ];

    /// Returns the state that follows this one for the given delivery method.
    ///
    /// Returns `None` when the pair has no transition, which includes both
    /// terminal states.
    pub fn next(&self, delivery_method: DeliveryMethod) -> Option<OrderState> {
        match (self, delivery_method) {
            (OrderState::Placed, DeliveryMethod::Delivery) => Some(OrderState::InPreparation),
            (OrderState::Placed, DeliveryMethod::Pickup) => Some(OrderState::ReadyForPickup),
            (OrderState::InPreparation, DeliveryMethod::Delivery) => {
                Some(OrderState::OutForDelivery)
            }
            (OrderState::OutForDelivery, DeliveryMethod::Delivery) => Some(OrderState::Delivered),
            _ => None,
        }
    }

    /// Returns true if the order can advance from this state.
    pub fn can_advance(&self, delivery_method: DeliveryMethod) -> bool {
        self.next(delivery_method).is_some()
    }

    /// Returns true if this is a terminal state (no further transitions possible).
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderState::Delivered | OrderState::ReadyForPickup)
    }

    /// Returns the customer-facing status label for this state.
    pub fn label(&self) -> &'static str {
        match self {
            OrderState::Placed => "Order Placed",
            OrderState::InPreparation => "Ice Cream preparation in process.......",
            OrderState::OutForDelivery => "Out for Delivery",
            OrderState::Delivered => "Delivered",
            OrderState::ReadyForPickup => "Ready for Pickup",
        }
    }

    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::Placed => "Placed",
            OrderState::InPreparation => "InPreparation",
            OrderState::OutForDelivery => "OutForDelivery",
            OrderState::Delivered => "Delivered",
            OrderState::ReadyForPickup => "ReadyForPickup",
        }
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
