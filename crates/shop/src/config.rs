//! Shop configuration loaded from environment variables.

/// Run configuration with the shop's usual defaults.
///
/// Reads from environment variables:
/// - `SHOP_CUSTOMER`: who places and pays for the orders (default: `"Anbu"`)
/// - `SHOP_SEASON`: season used for seasonal specials (default: `"winter"`)
/// - `SHOP_DELIVERY_ADDRESS`: address for the delivery order
///   (default: `"Bambapitiya, Colombo"`)
/// - `SHOP_PICKUP_LOCATION`: counter for the pickup order
///   (default: `"IceCreamShop"`)
/// - `SHOP_PRINT_METRICS`: print Prometheus metrics on exit (default: `false`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub customer: String,
    pub season: String,
    pub delivery_address: String,
    pub pickup_location: String,
    pub print_metrics: bool,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            customer: lookup("SHOP_CUSTOMER").unwrap_or(defaults.customer),
            season: lookup("SHOP_SEASON").unwrap_or(defaults.season),
            delivery_address: lookup("SHOP_DELIVERY_ADDRESS").unwrap_or(defaults.delivery_address),
            pickup_location: lookup("SHOP_PICKUP_LOCATION").unwrap_or(defaults.pickup_location),
            print_metrics: lookup("SHOP_PRINT_METRICS")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.print_metrics),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            customer: "Anbu".to_string(),
            season: "winter".to_string(),
            delivery_address: "Bambapitiya, Colombo".to_string(),
            pickup_location: "IceCreamShop".to_string(),
            print_metrics: false,
            log_level: "info".to_string(),
        }
    }
}
