//! Ice-cream catalog and pricing.
//!
//! This crate prices what the customer asks for before an order exists:
//! - Menu enums ([`Flavor`], [`Topping`], [`Syrup`]) with their list prices
//! - [`IceCreamCombination`] and its builder
//! - [`Priced`] decorators that add a flat packaging surcharge
//! - [`SeasonalSpecial`] discounts keyed by season and flavor
//!
//! The order and payment crates only ever see the resulting [`Amount`] and
//! the combination's name.

pub mod combination;
pub mod error;
pub mod menu;
pub mod packaging;
pub mod seasonal;

pub use combination::{IceCreamCombination, IceCreamCombinationBuilder};
pub use common::Amount;
pub use error::{CatalogError, Result};
pub use menu::{Flavor, Syrup, Topping};
pub use packaging::{GiftWrapping, Priced, SpecialPackaging};
pub use seasonal::{Season, SeasonalSpecial, first_applicable_discount};
