//! Customized ice-cream combinations.

use common::Amount;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::menu::{Flavor, Syrup, Topping};
use crate::packaging::Priced;

/// A named ice cream: one flavor plus any number of toppings and syrups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IceCreamCombination {
    name: String,
    flavor: Flavor,
    toppings: Vec<Topping>,
    syrups: Vec<Syrup>,
}

impl IceCreamCombination {
    /// Creates a plain combination with no extras.
    pub fn new(name: impl Into<String>, flavor: Flavor) -> Self {
        Self {
            name: name.into(),
            flavor,
            toppings: Vec::new(),
            syrups: Vec::new(),
        }
    }

    /// Starts building a combination with the given name.
    pub fn builder(name: impl Into<String>) -> IceCreamCombinationBuilder {
        IceCreamCombinationBuilder::new(name)
    }

    /// Adds a topping.
    pub fn add_topping(&mut self, topping: Topping) {
        self.toppings.push(topping);
    }

    /// Adds a syrup.
    pub fn add_syrup(&mut self, syrup: Syrup) {
        self.syrups.push(syrup);
    }

    /// Returns the combination's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base flavor.
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Returns the toppings in the order they were added.
    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    /// Returns the syrups in the order they were added.
    pub fn syrups(&self) -> &[Syrup] {
        &self.syrups
    }

    /// Returns flavor + toppings + syrups.
    pub fn total_price(&self) -> Amount {
        self.flavor.price()
            + self.toppings.iter().map(Topping::price).sum::<Amount>()
            + self.syrups.iter().map(Syrup::price).sum::<Amount>()
    }
}

impl Priced for IceCreamCombination {
    fn price(&self) -> Amount {
        self.total_price()
    }

    fn description(&self) -> String {
        self.name.clone()
    }
}

fn join_codes<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl std::fmt::Display for IceCreamCombination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ice Cream Name: {}\nFlavor: {}", self.name, self.flavor)?;
        if !self.toppings.is_empty() {
            write!(f, "\nToppings: {}", join_codes(&self.toppings))?;
        }
        if !self.syrups.is_empty() {
            write!(f, "\nSyrups: {}", join_codes(&self.syrups))?;
        }
        write!(f, "\nTotal Price: LKR {:.2}", self.total_price().value())
    }
}

/// Step-by-step builder for [`IceCreamCombination`].
#[derive(Debug, Clone, Default)]
pub struct IceCreamCombinationBuilder {
    name: String,
    flavor: Option<Flavor>,
    toppings: Vec<Topping>,
    syrups: Vec<Syrup>,
}

impl IceCreamCombinationBuilder {
    /// Creates a builder for a combination with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the base flavor, replacing any previous choice.
    pub fn flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = Some(flavor);
        self
    }

    /// Adds a topping.
    pub fn topping(mut self, topping: Topping) -> Self {
        self.toppings.push(topping);
        self
    }

    /// Adds a syrup.
    pub fn syrup(mut self, syrup: Syrup) -> Self {
        self.syrups.push(syrup);
        self
    }

    /// Builds the combination. A flavor is required.
    pub fn build(self) -> Result<IceCreamCombination> {
        let flavor = self
            .flavor
            .ok_or_else(|| CatalogError::MissingFlavor {
                name: self.name.clone(),
            })?;

        tracing::debug!(
            name = %self.name,
            %flavor,
            toppings = self.toppings.len(),
            syrups = self.syrups.len(),
            "combination built"
        );

        Ok(IceCreamCombination {
            name: self.name,
            flavor,
            toppings: self.toppings,
            syrups: self.syrups,
        })
    }
}
