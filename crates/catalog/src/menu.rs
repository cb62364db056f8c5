//! Menu items and their list prices.

use common::Amount;
use serde::{Deserialize, Serialize};

/// Ice-cream base flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Flavor {
    Vanilla,
    Chocolate,
    Strawberry,
    MintChocolate,
    CookieDough,
}

impl Flavor {
    /// All flavors in menu order.
    pub const ALL: [Flavor; 5] = [
        Flavor::Vanilla,
        Flavor::Chocolate,
        Flavor::Strawberry,
        Flavor::MintChocolate,
        Flavor::CookieDough,
    ];

    /// Returns the list price of a scoop.
    pub fn price(&self) -> Amount {
        Amount::from_units(match self {
            Flavor::Vanilla => 100,
            Flavor::Chocolate => 150,
            Flavor::Strawberry => 180,
            Flavor::MintChocolate => 250,
            Flavor::CookieDough => 500,
        })
    }

    /// Returns the menu code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Vanilla => "VANILLA",
            Flavor::Chocolate => "CHOCOLATE",
            Flavor::Strawberry => "STRAWBERRY",
            Flavor::MintChocolate => "MINT_CHOCOLATE",
            Flavor::CookieDough => "COOKIE_DOUGH",
        }
    }
}

impl std::fmt::Display for Flavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Toppings sprinkled over a combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Topping {
    Sprinkles,
    ChocolateChips,
    Nuts,
    WhippedCream,
}

impl Topping {
    /// Returns the list price of one serving.
    pub fn price(&self) -> Amount {
        Amount::from_units(match self {
            Topping::Sprinkles => 50,
            Topping::ChocolateChips => 75,
            Topping::Nuts => 50,
            Topping::WhippedCream => 100,
        })
    }

    /// Returns the menu code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topping::Sprinkles => "SPRINKLES",
            Topping::ChocolateChips => "CHOCOLATE_CHIPS",
            Topping::Nuts => "NUTS",
            Topping::WhippedCream => "WHIPPED_CREAM",
        }
    }
}

impl std::fmt::Display for Topping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Syrups drizzled over a combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Syrup {
    Chocolate,
    Caramel,
    Strawberry,
    Maple,
}

impl Syrup {
    /// Returns the list price of one pour.
    pub fn price(&self) -> Amount {
        Amount::from_units(match self {
            Syrup::Chocolate => 50,
            Syrup::Caramel => 80,
            Syrup::Strawberry => 120,
            Syrup::Maple => 120,
        })
    }

    /// Returns the menu code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Syrup::Chocolate => "CHOCOLATE",
            Syrup::Caramel => "CARAMEL",
            Syrup::Strawberry => "STRAWBERRY",
            Syrup::Maple => "MAPLE",
        }
    }
}

impl std::fmt::Display for Syrup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
