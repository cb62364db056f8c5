//! Ice-cream shop runner.
//!
//! Wires the catalog, order and payment crates into one customer session:
//! price a combination, run a delivery and a pickup order past a customer
//! notifier, then settle the discounted price with every payment method
//! against one shared loyalty program and record the customer's feedback.

pub mod config;
pub mod error;

use std::fmt;
use std::sync::Arc;

use catalog::{
    Amount, Flavor, GiftWrapping, IceCreamCombination, Priced, Season, SeasonalSpecial,
    SpecialPackaging, Syrup, Topping, first_applicable_discount,
};
use common::CustomerId;
use domain::{CustomerNotifier, DeliveryMethod, Notification, Order, OrderError};
use payment::{
    CashOnDelivery, CreditCardPayment, DigitalWalletPayment, FeedbackCommand, FeedbackEntry,
    FeedbackLog, PaymentProcessor, SimpleLoyaltyProgram, Settlement,
};

pub use config::Config;
pub use error::ShopError;

const SEPARATOR: &str = "------------------------------";

/// A packaging option offered for the combination.
#[derive(Debug, Clone, PartialEq)]
pub struct PackagingQuote {
    pub label: &'static str,
    pub description: String,
    pub price: Amount,
}

impl PackagingQuote {
    fn of(label: &'static str, item: &impl Priced) -> Self {
        Self {
            label,
            description: item.description(),
            price: item.price(),
        }
    }
}

/// A seasonal special that was applied to the price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedDiscount {
    pub special: SeasonalSpecial,
    pub price: Amount,
}

/// Everything that happened during one shop run.
#[derive(Debug, Clone)]
pub struct ShopReport {
    pub customer: CustomerId,
    pub combination: IceCreamCombination,
    pub packaging: Vec<PackagingQuote>,
    pub discount: Option<AppliedDiscount>,
    pub notifications: Vec<Notification>,
    pub settlements: Vec<Settlement>,
    pub feedback: Vec<FeedbackEntry>,
    pub loyalty_points: f64,
}

impl ShopReport {
    /// Returns the price the customer pays, after any seasonal discount.
    pub fn final_price(&self) -> Amount {
        self.discount
            .map_or_else(|| self.combination.total_price(), |d| d.price)
    }
}

/// Runs one customer session with the given configuration.
#[tracing::instrument(skip(config), fields(customer = %config.customer, season = %config.season))]
pub fn run(config: &Config) -> Result<ShopReport, ShopError> {
    let season: Season = config.season.parse()?;
    let customer = CustomerId::new(config.customer.as_str());

    let combination = IceCreamCombination::builder("Chocolate Caramel")
        .flavor(Flavor::Chocolate)
        .topping(Topping::Sprinkles)
        .syrup(Syrup::Caramel)
        .build()?;

    let packaging = vec![
        PackagingQuote::of("Ice Cream with Gift Wrapping", &GiftWrapping::new(&combination)),
        PackagingQuote::of(
            "Ice Cream with Special Packaging",
            &SpecialPackaging::new(&combination),
        ),
    ];

    let specials = [SeasonalSpecial::new(Season::Winter, Flavor::Chocolate, 10)?];
    let discount = first_applicable_discount(
        &specials,
        season,
        combination.flavor(),
        combination.total_price(),
    )
    .map(|(special, price)| AppliedDiscount { special, price });
    let price = discount.map_or_else(|| combination.total_price(), |d| d.price);

    let notifier = Arc::new(CustomerNotifier::new(config.customer.as_str()));

    let mut delivery = Order::new(DeliveryMethod::Delivery);
    delivery.add_item(combination.name());
    delivery.set_delivery_address(config.delivery_address.as_str());

    let mut pickup = Order::new(DeliveryMethod::Pickup);
    pickup.add_item(combination.name());
    pickup.set_pickup_location(config.pickup_location.as_str());

    delivery.register_observer(notifier.clone());
    pickup.register_observer(notifier.clone());

    fulfill(&mut delivery)?;
    fulfill(&mut pickup)?;

    let loyalty = Arc::new(SimpleLoyaltyProgram::new());
    let mut by_card = PaymentProcessor::new(
        CreditCardPayment::new("1234-5678-9101-1121", "John Doe", "12/23", "123"),
        loyalty.clone(),
    );
    let mut by_wallet = PaymentProcessor::new(
        DigitalWalletPayment::new("john_wallet", "password"),
        loyalty.clone(),
    );
    let mut by_cash = PaymentProcessor::new(CashOnDelivery, loyalty.clone());

    let settlements = vec![
        by_wallet.process_payment(&customer, price.value())?,
        by_card.process_payment(&customer, price.value())?,
        by_cash.process_payment(&customer, price.value())?,
    ];

    let feedback = FeedbackLog::new();
    by_cash.queue_command(FeedbackCommand::new(
        loyalty,
        customer.clone(),
        "yummmy :)",
        feedback.clone(),
    )?);
    by_cash.execute_commands()?;

    let loyalty_points = by_cash.earned_points(&customer);
    metrics::gauge!("shop_loyalty_points").set(loyalty_points);
    tracing::info!(%price, loyalty_points, "shop run complete");

    Ok(ShopReport {
        customer,
        combination,
        packaging,
        discount,
        notifications: notifier.notifications(),
        settlements,
        feedback: feedback.entries(),
        loyalty_points,
    })
}

/// Places the order and advances it until it reaches a terminal state.
fn fulfill(order: &mut Order) -> Result<(), OrderError> {
    order.process_order()?;
    while !order.is_terminal() {
        order.next_state()?;
    }
    Ok(())
}

impl fmt::Display for ShopReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ice Cream Customization:\n{}", self.combination)?;
        writeln!(f, "{SEPARATOR}")?;
        writeln!(
            f,
            "Basic Ice Cream: {} - LKR {}",
            self.combination.description(),
            self.combination.total_price()
        )?;
        writeln!(f, "{SEPARATOR}")?;
        for quote in &self.packaging {
            writeln!(
                f,
                "{}: {} - LKR {}",
                quote.label, quote.description, quote.price
            )?;
        }
        writeln!(f, "{SEPARATOR}")?;

        if let Some(discount) = &self.discount {
            writeln!(
                f,
                "\nApplying Seasonal Discount: {} - {}% off",
                discount.special.flavor(),
                discount.special.discount_percentage()
            )?;
            writeln!(f, "Discounted Price: LKR {:.2}", discount.price.value())?;
        }
        writeln!(f, "{SEPARATOR}")?;

        for notification in &self.notifications {
            writeln!(f, "{}", notification.headline())?;
            if notification.is_placement() {
                writeln!(f, "Order : [{}]", notification.items.join(", "))?;
                if let Some(detail) = &notification.detail {
                    writeln!(f, "{detail}")?;
                }
                writeln!(f, "{SEPARATOR}")?;
            }
        }
        writeln!(f, "{SEPARATOR}")?;

        for settlement in &self.settlements {
            writeln!(f, "{}", settlement.description())?;
            writeln!(f, "{SEPARATOR}")?;
        }

        for entry in &self.feedback {
            writeln!(f, "Feedback: {}", entry.message)?;
        }
        write!(f, "Loyalty Points Earned: {}", self.loyalty_points)
    }
}
