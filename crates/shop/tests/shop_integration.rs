//! Integration tests for a full shop run.

use catalog::{Amount, Flavor};
use payment::PaymentMethod;
use shop::{Config, ShopError};

#[test]
fn default_run_prices_discounts_and_pays() {
    let report = shop::run(&Config::default()).unwrap();

    assert_eq!(report.combination.total_price(), Amount::from_units(280));
    let quotes: Vec<(String, Amount)> = report
        .packaging
        .iter()
        .map(|q| (q.description.clone(), q.price))
        .collect();
    assert_eq!(
        quotes,
        vec![
            (
                "Chocolate Caramel with Gift Wrapping".to_string(),
                Amount::from_units(330)
            ),
            (
                "Chocolate Caramel with Special Packaging".to_string(),
                Amount::from_units(310)
            ),
        ]
    );

    let discount = report.discount.unwrap();
    assert_eq!(discount.special.flavor(), Flavor::Chocolate);
    assert_eq!(report.final_price(), Amount::from_units(252));

    let methods: Vec<PaymentMethod> = report.settlements.iter().map(|s| s.method).collect();
    assert_eq!(
        methods,
        vec![
            PaymentMethod::DigitalWallet,
            PaymentMethod::CreditCard,
            PaymentMethod::CashOnDelivery,
        ]
    );
    assert!((report.loyalty_points - 7.56).abs() < 1e-9);
}

#[test]
fn default_run_notifies_customer_for_both_orders() {
    let report = shop::run(&Config::default()).unwrap();

    let statuses: Vec<&str> = report
        .notifications
        .iter()
        .map(|n| n.status.as_str())
        .collect();
    assert_eq!(
        statuses,
        vec![
            "Order Placed",
            "Ice Cream preparation in process.......",
            "Out for Delivery",
            "Delivered",
            "Order Placed",
            "Ready for Pickup",
        ]
    );
    assert!(report.notifications.iter().all(|n| n.recipient == "Anbu"));
    assert_eq!(
        report.notifications[0].detail.as_deref(),
        Some("Delivery Address: Bambapitiya, Colombo")
    );
    assert_eq!(
        report.notifications[4].detail.as_deref(),
        Some("Pickup Location: IceCreamShop")
    );
}

#[test]
fn feedback_recorded_with_points_at_submission() {
    let report = shop::run(&Config::default()).unwrap();

    assert_eq!(report.feedback.len(), 1);
    assert_eq!(report.feedback[0].message, "yummmy :)");
    assert_eq!(report.feedback[0].customer.as_str(), "Anbu");
    assert!((report.feedback[0].points_at_submission - 7.56).abs() < 1e-9);
}

#[test]
fn summer_run_pays_full_price() {
    let config = Config {
        season: "summer".to_string(),
        customer: "John".to_string(),
        ..Config::default()
    };
    let report = shop::run(&config).unwrap();

    assert!(report.discount.is_none());
    assert_eq!(report.final_price(), Amount::from_units(280));
    assert!(report.settlements.iter().all(|s| s.amount == Amount::from_units(280)));
    assert!((report.loyalty_points - 8.4).abs() < 1e-9);
    assert_eq!(report.notifications[0].headline(), "Hello John! Order status: Order Placed");
}

#[test]
fn unknown_season_is_rejected() {
    let config = Config {
        season: "monsoon".to_string(),
        ..Config::default()
    };
    let err = shop::run(&config).unwrap_err();
    assert!(matches!(err, ShopError::Catalog(_)));
    assert_eq!(err.to_string(), "Unknown season: monsoon");
}

#[test]
fn report_renders_session_transcript() {
    let rendered = shop::run(&Config::default()).unwrap().to_string();

    assert!(rendered.starts_with("Ice Cream Customization:\nIce Cream Name: Chocolate Caramel"));
    assert!(rendered.contains("Basic Ice Cream: Chocolate Caramel - LKR 280"));
    assert!(rendered.contains("Applying Seasonal Discount: CHOCOLATE - 10% off"));
    assert!(rendered.contains("Discounted Price: LKR 252.00"));
    assert!(rendered.contains("Order : [Chocolate Caramel]"));
    assert!(rendered.contains("Paid 252 with Digital Wallet"));
    assert!(rendered.contains("Feedback: yummmy :)"));
    assert!(rendered.contains("Loyalty Points Earned: "));
}
