//! Customer-facing notifications.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::observer::{ObserverError, OrderObserver};
use crate::order::{Order, OrderError, OrderState};

/// One message delivered to a customer about one of their orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// The order the message is about.
    pub order_id: OrderId,

    /// Name of the customer being notified.
    pub recipient: String,

    /// State the order was in when notified.
    pub state: OrderState,

    /// Status label at notification time.
    pub status: String,

    /// Items in the order. Only filled in for the placement notice.
    pub items: Vec<String>,

    /// Rendered delivery address or pickup location. Only filled in for the
    /// placement notice.
    pub detail: Option<String>,

    /// When the notification was produced.
    pub sent_at: DateTime<Utc>,
}

impl Notification {
    /// Returns true if this is the placement notice.
    pub fn is_placement(&self) -> bool {
        self.status == OrderState::Placed.label()
    }

    /// Returns the greeting line.
    pub fn headline(&self) -> String {
        format!("Hello {}! Order status: {}", self.recipient, self.status)
    }
}

/// Observer representing a customer who wants to hear about their order.
///
/// Every update is recorded as a [`Notification`]. On the placement notice
/// the customer also gets the item list and where the order is going; a
/// missing address or pickup location fails the update.
#[derive(Debug, Clone)]
pub struct CustomerNotifier {
    name: String,
    inbox: Arc<RwLock<Vec<Notification>>>,
}

impl CustomerNotifier {
    /// Creates a notifier for the named customer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inbox: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Returns all notifications received so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.inbox
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns all notifications received so far.
    pub fn take_notifications(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.inbox.write().unwrap_or_else(PoisonError::into_inner))
    }

    /// Returns the number of notifications received.
    pub fn notification_count(&self) -> usize {
        self.inbox
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn build(&self, order: &Order) -> Result<Notification, ObserverError> {
        let mut notification = Notification {
            order_id: order.id(),
            recipient: self.name.clone(),
            state: order.state(),
            status: order.status().to_string(),
            items: Vec::new(),
            detail: None,
            sent_at: Utc::now(),
        };

        if notification.is_placement() {
            let detail = order.delivery_detail().map_err(|e| match e {
                OrderError::MissingDeliveryDetail { delivery_method } => {
                    ObserverError::MissingDeliveryDetail { delivery_method }
                }
                other => ObserverError::Rejected(other.to_string()),
            })?;
            notification.items = order.items().to_vec();
            notification.detail = Some(detail.to_string());
        }

        Ok(notification)
    }
}

impl OrderObserver for CustomerNotifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, order: &Order) -> Result<(), ObserverError> {
        let notification = self.build(order)?;
        tracing::info!(
            customer = %self.name,
            order_id = %notification.order_id,
            status = %notification.status,
            "customer notified"
        );

        self.inbox
            .write()
            .map_err(|_| ObserverError::Poisoned)?
            .push(notification);
        Ok(())
    }
}
