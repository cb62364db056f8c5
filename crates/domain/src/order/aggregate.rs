//! Order aggregate implementation.

use std::sync::Arc;

use common::OrderId;

use crate::observer::OrderObserver;

use super::{DeliveryDetail, DeliveryMethod, OrderError, OrderState};

/// Order aggregate root.
///
/// Tracks one customer purchase from placement to fulfillment. Every
/// behavior run (on [`process_order`](Order::process_order) or after a
/// transition in [`next_state`](Order::next_state)) sets the status label
/// and notifies the registered observers in registration order.
pub struct Order {
    /// Correlation ID for logs and notifications.
    id: OrderId,

    /// Customer-facing status label, empty until the first behavior runs.
    status: String,

    /// Item labels in the order they were added.
    items: Vec<String>,

    /// Fixed at construction.
    delivery_method: DeliveryMethod,

    /// Meaningful only for delivery orders.
    delivery_address: Option<String>,

    /// Meaningful only for pickup orders.
    pickup_location: Option<String>,

    /// Subscribers, notified in insertion order. Duplicates are allowed.
    observers: Vec<Arc<dyn OrderObserver>>,

    /// Current state of the order.
    state: OrderState,
}

impl Order {
    /// Creates an order in the `Placed` state.
    pub fn new(delivery_method: DeliveryMethod) -> Self {
        Self {
            id: OrderId::new(),
            status: String::new(),
            items: Vec::new(),
            delivery_method,
            delivery_address: None,
            pickup_location: None,
            observers: Vec::new(),
            state: OrderState::Placed,
        }
    }
}

// Query methods
impl Order {
    /// Returns the order's correlation ID.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the current status label.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the current state.
    pub fn state(&self) -> OrderState {
        self.state
    }

    /// Returns the item labels in insertion order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Returns the delivery method.
    pub fn delivery_method(&self) -> DeliveryMethod {
        self.delivery_method
    }

    /// Returns the delivery address, if set.
    pub fn delivery_address(&self) -> Option<&str> {
        self.delivery_address.as_deref()
    }

    /// Returns the pickup location, if set.
    pub fn pickup_location(&self) -> Option<&str> {
        self.pickup_location.as_deref()
    }

    /// Returns the address or pickup location matching the delivery method.
    ///
    /// Fails with [`OrderError::MissingDeliveryDetail`] when the detail for
    /// this order's method was never set, even if the other one was.
    pub fn delivery_detail(&self) -> Result<DeliveryDetail<'_>, OrderError> {
        let detail = match self.delivery_method {
            DeliveryMethod::Delivery => self.delivery_address().map(DeliveryDetail::Address),
            DeliveryMethod::Pickup => self.pickup_location().map(DeliveryDetail::PickupLocation),
        };

        detail.ok_or(OrderError::MissingDeliveryDetail {
            delivery_method: self.delivery_method,
        })
    }

    /// Returns the number of registered observers, counting duplicates.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Returns true if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}

// Mutation methods
impl Order {
    /// Appends an item label.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Sets the delivery address. Not checked against the delivery method.
    pub fn set_delivery_address(&mut self, address: impl Into<String>) {
        self.delivery_address = Some(address.into());
    }

    /// Sets the pickup location. Not checked against the delivery method.
    pub fn set_pickup_location(&mut self, location: impl Into<String>) {
        self.pickup_location = Some(location.into());
    }

    /// Subscribes an observer. Registering the same observer twice means it
    /// is notified twice.
    pub fn register_observer(&mut self, observer: Arc<dyn OrderObserver>) {
        tracing::debug!(order_id = %self.id, observer = observer.name(), "observer registered");
        self.observers.push(observer);
    }

    /// Unsubscribes one registration of `observer`, matched by identity.
    ///
    /// Returns false, and changes nothing, when it was not registered.
    pub fn remove_observer<O>(&mut self, observer: &Arc<O>) -> bool
    where
        O: OrderObserver + ?Sized,
    {
        let target = Arc::as_ptr(observer).cast::<()>();
        let position = self
            .observers
            .iter()
            .position(|o| Arc::as_ptr(o).cast::<()>() == target);

        match position {
            Some(index) => {
                let removed = self.observers.remove(index);
                tracing::debug!(order_id = %self.id, observer = removed.name(), "observer removed");
                true
            }
            None => false,
        }
    }

    /// Calls every observer's `update` in registration order.
    ///
    /// Stops at the first observer that fails and returns its error; the
    /// observers after it are not called for this round.
    pub fn notify_observers(&self) -> Result<(), OrderError> {
        tracing::debug!(
            order_id = %self.id,
            status = %self.status,
            observers = self.observers.len(),
            "notifying observers"
        );

        for observer in &self.observers {
            if let Err(source) = observer.update(self) {
                metrics::counter!("order_observer_failures_total").increment(1);
                tracing::warn!(
                    order_id = %self.id,
                    observer = observer.name(),
                    error = %source,
                    "observer failed, skipping remaining observers"
                );
                return Err(OrderError::ObserverFailed {
                    observer: observer.name().to_string(),
                    source,
                });
            }
            metrics::counter!("order_notifications_total").increment(1);
        }

        Ok(())
    }

    /// Runs the current state's behavior without changing state.
    #[tracing::instrument(skip(self), fields(order_id = %self.id, state = %self.state))]
    pub fn process_order(&mut self) -> Result<(), OrderError> {
        self.run_state_behavior()
    }

    /// Advances to the next state and runs its behavior.
    ///
    /// The next state is looked up from the current state and the delivery
    /// method. When there is none the order is left untouched and
    /// [`OrderError::InvalidStateTransition`] is returned. If notification
    /// fails after a successful transition, the new state is kept and the
    /// observer error is returned.
    #[tracing::instrument(skip(self), fields(order_id = %self.id, from = %self.state))]
    pub fn next_state(&mut self) -> Result<OrderState, OrderError> {
        let from = self.state;
        let to = from
            .next(self.delivery_method)
            .ok_or(OrderError::InvalidStateTransition {
                current_state: from,
                delivery_method: self.delivery_method,
            })?;

        self.state = to;
        metrics::counter!("orders_state_transitions_total", "to" => to.as_str()).increment(1);
        tracing::info!(%from, %to, "order state advanced");

        self.run_state_behavior()?;
        Ok(to)
    }

    fn run_state_behavior(&mut self) -> Result<(), OrderError> {
        self.status = self.state.label().to_string();
        self.notify_observers()
    }
}

impl std::fmt::Debug for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let observers: Vec<&str> = self.observers.iter().map(|o| o.name()).collect();
        f.debug_struct("Order")
            .field("id", &self.id)
            .field("status", &self.status)
            .field("items", &self.items)
            .field("delivery_method", &self.delivery_method)
            .field("delivery_address", &self.delivery_address)
            .field("pickup_location", &self.pickup_location)
            .field("observers", &observers)
            .field("state", &self.state)
            .finish()
    }
}
