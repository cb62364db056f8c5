//! Integration tests for the Order aggregate.
//!
//! These tests drive orders through their full lifecycle with real
//! observers attached, checking status sequences, fan-out counts and
//! error reporting.

use std::sync::{Arc, Mutex};

use domain::{
    CustomerNotifier, DeliveryMethod, ObserverError, Order, OrderError, OrderObserver, OrderState,
};

/// Counts calls and remembers statuses.
struct Recorder {
    statuses: Mutex<Vec<String>>,
}

impl Recorder {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            statuses: Mutex::new(Vec::new()),
        })
    }

    fn statuses(&self) -> Vec<String> {
        self.statuses.lock().unwrap().clone()
    }

    fn calls(&self) -> usize {
        self.statuses.lock().unwrap().len()
    }
}

impl OrderObserver for Recorder {
    fn name(&self) -> &str {
        "recorder"
    }

    fn update(&self, order: &Order) -> Result<(), ObserverError> {
        self.statuses
            .lock()
            .unwrap()
            .push(order.status().to_string());
        Ok(())
    }
}

fn delivery_order() -> Order {
    let mut order = Order::new(DeliveryMethod::Delivery);
    order.add_item("Chocolate Caramel");
    order.set_delivery_address("Bambapitiya, Colombo");
    order
}

fn pickup_order() -> Order {
    let mut order = Order::new(DeliveryMethod::Pickup);
    order.add_item("Chocolate Caramel");
    order.set_pickup_location("IceCreamShop");
    order
}

mod order_lifecycle {
    use super::*;

    #[test]
    fn delivery_scenario_status_sequence() {
        let mut order = delivery_order();
        let recorder = Recorder::new();
        order.register_observer(recorder.clone());

        order.process_order().unwrap();
        order.next_state().unwrap();
        order.next_state().unwrap();
        order.next_state().unwrap();

        assert_eq!(
            recorder.statuses(),
            vec![
                "Order Placed",
                "Ice Cream preparation in process.......",
                "Out for Delivery",
                "Delivered",
            ]
        );
        assert_eq!(order.state(), OrderState::Delivered);
    }

    #[test]
    fn pickup_scenario_status_sequence() {
        let mut order = pickup_order();
        let recorder = Recorder::new();
        order.register_observer(recorder.clone());

        order.process_order().unwrap();
        order.next_state().unwrap();

        assert_eq!(recorder.statuses(), vec!["Order Placed", "Ready for Pickup"]);
        assert_eq!(order.state(), OrderState::ReadyForPickup);
    }

    #[test]
    fn repeated_next_state_follows_table_until_terminal() {
        for (mut order, expected) in [
            (
                delivery_order(),
                vec![
                    OrderState::InPreparation,
                    OrderState::OutForDelivery,
                    OrderState::Delivered,
                ],
            ),
            (pickup_order(), vec![OrderState::ReadyForPickup]),
        ] {
            let mut visited = Vec::new();
            loop {
                match order.next_state() {
                    Ok(state) => visited.push(state),
                    Err(OrderError::InvalidStateTransition { current_state, .. }) => {
                        assert!(current_state.is_terminal());
                        break;
                    }
                    Err(other) => panic!("unexpected error: {other}"),
                }
            }
            assert_eq!(visited, expected);
        }
    }

    #[test]
    fn invalid_transition_message_names_state_and_method() {
        let mut order = pickup_order();
        order.next_state().unwrap();
        let err = order.next_state().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid state transition: no state follows ReadyForPickup for a PICKUP order"
        );
    }
}

mod notification {
    use super::*;

    #[test]
    fn fresh_order_process_yields_one_placed_notification() {
        let mut order = delivery_order();
        let recorder = Recorder::new();
        order.register_observer(recorder.clone());

        order.process_order().unwrap();

        assert_eq!(recorder.calls(), 1);
        assert_eq!(recorder.statuses()[0], OrderState::Placed.label());
    }

    #[test]
    fn duplicate_registration_doubles_every_transition() {
        let mut order = delivery_order();
        let recorder = Recorder::new();
        order.register_observer(recorder.clone());
        order.register_observer(recorder.clone());

        order.process_order().unwrap();
        assert_eq!(recorder.calls(), 2);
        order.next_state().unwrap();
        assert_eq!(recorder.calls(), 4);
        order.next_state().unwrap();
        assert_eq!(recorder.calls(), 6);
    }

    #[test]
    fn removing_unregistered_observer_changes_nothing() {
        let mut order = delivery_order();
        let registered = Recorder::new();
        let stranger = Recorder::new();
        order.register_observer(registered.clone());

        assert!(!order.remove_observer(&stranger));
        assert!(!order.remove_observer(&stranger));

        order.process_order().unwrap();
        order.next_state().unwrap();
        assert_eq!(registered.calls(), 2);
        assert_eq!(stranger.calls(), 0);
    }

    #[test]
    fn removed_observer_stops_receiving() {
        let mut order = delivery_order();
        let recorder = Recorder::new();
        order.register_observer(recorder.clone());

        order.process_order().unwrap();
        assert!(order.remove_observer(&recorder));
        order.next_state().unwrap();

        assert_eq!(recorder.calls(), 1);
    }

    #[test]
    fn customer_sees_both_orders_in_sequence() {
        let customer = Arc::new(CustomerNotifier::new("Anbu"));
        let mut delivery = delivery_order();
        let mut pickup = pickup_order();
        delivery.register_observer(customer.clone());
        pickup.register_observer(customer.clone());

        delivery.process_order().unwrap();
        while !delivery.is_terminal() {
            delivery.next_state().unwrap();
        }
        pickup.process_order().unwrap();
        pickup.next_state().unwrap();

        let headlines: Vec<String> = customer
            .notifications()
            .iter()
            .map(|n| n.headline())
            .collect();
        assert_eq!(
            headlines,
            vec![
                "Hello Anbu! Order status: Order Placed",
                "Hello Anbu! Order status: Ice Cream preparation in process.......",
                "Hello Anbu! Order status: Out for Delivery",
                "Hello Anbu! Order status: Delivered",
                "Hello Anbu! Order status: Order Placed",
                "Hello Anbu! Order status: Ready for Pickup",
            ]
        );
    }

    #[test]
    fn missing_pickup_location_surfaces_to_caller() {
        let mut order = Order::new(DeliveryMethod::Pickup);
        order.add_item("Chocolate Caramel");
        let customer = Arc::new(CustomerNotifier::new("Anbu"));
        order.register_observer(customer.clone());

        let err = order.process_order().unwrap_err();
        assert!(matches!(
            err,
            OrderError::ObserverFailed {
                source: ObserverError::MissingDeliveryDetail {
                    delivery_method: DeliveryMethod::Pickup
                },
                ..
            }
        ));
        assert_eq!(order.status(), "Order Placed");
    }
}
