//! Packaging options that add a flat surcharge to a priced item.

use common::Amount;

/// Surcharge for gift wrapping.
pub const GIFT_WRAPPING_SURCHARGE: u32 = 50;

/// Surcharge for special packaging.
pub const SPECIAL_PACKAGING_SURCHARGE: u32 = 30;

/// Anything with a price and a customer-facing description.
pub trait Priced {
    /// Returns the price including any surcharges.
    fn price(&self) -> Amount;

    /// Returns a human-readable description.
    fn description(&self) -> String;
}

impl<T: Priced + ?Sized> Priced for &T {
    fn price(&self) -> Amount {
        (**self).price()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

/// Gift-wrapped item.
#[derive(Debug, Clone)]
pub struct GiftWrapping<P> {
    inner: P,
}

impl<P: Priced> GiftWrapping<P> {
    /// Wraps an item.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Returns the wrapped item.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Priced> Priced for GiftWrapping<P> {
    fn price(&self) -> Amount {
        self.inner.price() + Amount::from_units(GIFT_WRAPPING_SURCHARGE)
    }

    fn description(&self) -> String {
        format!("{} with Gift Wrapping", self.inner.description())
    }
}

/// Item in special packaging.
#[derive(Debug, Clone)]
pub struct SpecialPackaging<P> {
    inner: P,
}

impl<P: Priced> SpecialPackaging<P> {
    /// Packages an item.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Returns the packaged item.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Priced> Priced for SpecialPackaging<P> {
    fn price(&self) -> Amount {
        self.inner.price() + Amount::from_units(SPECIAL_PACKAGING_SURCHARGE)
    }

    fn description(&self) -> String {
        format!("{} with Special Packaging", self.inner.description())
    }
}
