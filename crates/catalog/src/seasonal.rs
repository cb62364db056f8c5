//! Seasonal specials.

use std::str::FromStr;

use common::Amount;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::menu::Flavor;

/// Seasons of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Returns the season name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Season {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "winter" => Ok(Season::Winter),
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" | "autumn" => Ok(Season::Fall),
            _ => Err(CatalogError::UnknownSeason(s.to_string())),
        }
    }
}

/// A percentage discount on one flavor during one season.
///
/// Deserialization goes through [`SeasonalSpecial::new`], so an out-of-range
/// percentage is rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSeasonalSpecial")]
pub struct SeasonalSpecial {
    season: Season,
    flavor: Flavor,
    discount_percentage: u8,
}

/// Unvalidated wire form of a [`SeasonalSpecial`].
#[derive(Deserialize)]
struct RawSeasonalSpecial {
    season: Season,
    flavor: Flavor,
    discount_percentage: u32,
}

impl TryFrom<RawSeasonalSpecial> for SeasonalSpecial {
    type Error = CatalogError;

    fn try_from(raw: RawSeasonalSpecial) -> Result<Self> {
        Self::new(raw.season, raw.flavor, raw.discount_percentage)
    }
}

impl SeasonalSpecial {
    /// Creates a special. The percentage must be between 0 and 100.
    pub fn new(season: Season, flavor: Flavor, discount_percentage: u32) -> Result<Self> {
        let pct = u8::try_from(discount_percentage)
            .ok()
            .filter(|p| *p <= 100)
            .ok_or(CatalogError::InvalidDiscount {
                percentage: discount_percentage,
            })?;

        Ok(Self {
            season,
            flavor,
            discount_percentage: pct,
        })
    }

    /// Returns the season this special runs in.
    pub fn season(&self) -> Season {
        self.season
    }

    /// Returns the discounted flavor.
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Returns the discount percentage.
    pub fn discount_percentage(&self) -> u8 {
        self.discount_percentage
    }

    /// Returns true if the special covers this season and flavor.
    pub fn is_applicable(&self, season: Season, flavor: Flavor) -> bool {
        self.season == season && self.flavor == flavor
    }

    /// Applies the discount to a price.
    pub fn apply_discount(&self, price: Amount) -> Amount {
        price.discounted_by(self.discount_percentage)
    }
}

/// Applies the first applicable special to `price`, in slice order.
///
/// Returns the special that was used along with the discounted price, or
/// `None` when nothing applies.
pub fn first_applicable_discount(
    specials: &[SeasonalSpecial],
    season: Season,
    flavor: Flavor,
    price: Amount,
) -> Option<(SeasonalSpecial, Amount)> {
    let special = specials
        .iter()
        .find(|s| s.is_applicable(season, flavor))?;
    let discounted = special.apply_discount(price);

    tracing::debug!(
        %season,
        %flavor,
        percentage = special.discount_percentage,
        %discounted,
        "seasonal special applied"
    );

    Some((*special, discounted))
}
