//! Value objects for the order domain.

use serde::{Deserialize, Serialize};

/// How an order reaches the customer. Fixed when the order is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryMethod {
    /// Courier to the customer's address.
    Delivery,

    /// Customer collects from a shop.
    Pickup,
}

impl DeliveryMethod {
    /// Returns the method name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMethod::Delivery => "DELIVERY",
            DeliveryMethod::Pickup => "PICKUP",
        }
    }
}

impl std::fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where the order goes, matching its delivery method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryDetail<'a> {
    /// Address for a delivery order.
    Address(&'a str),

    /// Shop location for a pickup order.
    PickupLocation(&'a str),
}

impl DeliveryDetail<'_> {
    /// Returns the address or location text.
    pub fn value(&self) -> &str {
        match self {
            DeliveryDetail::Address(v) | DeliveryDetail::PickupLocation(v) => v,
        }
    }
}

impl std::fmt::Display for DeliveryDetail<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryDetail::Address(address) => write!(f, "Delivery Address: {address}"),
            DeliveryDetail::PickupLocation(location) => write!(f, "Pickup Location: {location}"),
        }
    }
}
