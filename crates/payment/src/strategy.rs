//! Payment strategies.

use chrono::{DateTime, Utc};
use common::Amount;
use serde::{Deserialize, Serialize};

use crate::error::{PaymentError, Result};

/// The kind of settlement a strategy performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DigitalWallet,
    CashOnDelivery,
}

impl PaymentMethod {
    /// Returns the customer-facing name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DigitalWallet => "Digital Wallet",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Record of one settled payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    /// How the amount was settled.
    pub method: PaymentMethod,

    /// The settled amount.
    pub amount: Amount,

    /// When the settlement happened.
    pub settled_at: DateTime<Utc>,
}

impl Settlement {
    fn now(method: PaymentMethod, amount: Amount) -> Self {
        Self {
            method,
            amount,
            settled_at: Utc::now(),
        }
    }

    /// Returns a one-line receipt, e.g. `Paid 1000 with Credit Card`.
    pub fn description(&self) -> String {
        format!("Paid {} with {}", self.amount, self.method)
    }
}

/// A way of settling an amount.
pub trait PaymentStrategy: Send + Sync {
    /// Returns the kind of settlement this strategy performs.
    fn method(&self) -> PaymentMethod;

    /// Settles `amount`.
    fn pay(&self, amount: Amount) -> Result<Settlement>;
}

impl<T: PaymentStrategy + ?Sized> PaymentStrategy for Box<T> {
    fn method(&self) -> PaymentMethod {
        (**self).method()
    }

    fn pay(&self, amount: Amount) -> Result<Settlement> {
        (**self).pay(amount)
    }
}

/// Payment by credit card.
#[derive(Clone)]
pub struct CreditCardPayment {
    card_number: String,
    holder: String,
    expiry: String,
    cvv: String,
}

impl CreditCardPayment {
    /// Creates a card payment.
    pub fn new(
        card_number: impl Into<String>,
        holder: impl Into<String>,
        expiry: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            holder: holder.into(),
            expiry: expiry.into(),
            cvv: cvv.into(),
        }
    }

    /// Returns the card holder's name.
    pub fn holder(&self) -> &str {
        &self.holder
    }

    /// Returns the expiry date as given.
    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    /// Returns the card number with all but the last four digits masked.
    pub fn masked_card_number(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(char::is_ascii_digit).collect();
        let visible = digits.len().saturating_sub(4);
        digits
            .iter()
            .enumerate()
            .map(|(i, d)| if i < visible { '*' } else { *d })
            .collect()
    }

    fn digit_count(&self) -> usize {
        self.card_number.chars().filter(char::is_ascii_digit).count()
    }
}

impl std::fmt::Debug for CreditCardPayment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreditCardPayment")
            .field("card_number", &self.masked_card_number())
            .field("holder", &self.holder)
            .field("expiry", &self.expiry)
            .field("cvv", &"***")
            .finish()
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::CreditCard
    }

    fn pay(&self, amount: Amount) -> Result<Settlement> {
        if !(12..=19).contains(&self.digit_count()) {
            return Err(PaymentError::Declined {
                method: self.method(),
                reason: "card number must have 12 to 19 digits".to_string(),
            });
        }
        if self.cvv.is_empty() {
            return Err(PaymentError::Declined {
                method: self.method(),
                reason: "missing CVV".to_string(),
            });
        }

        tracing::info!(
            card = %self.masked_card_number(),
            holder = %self.holder,
            %amount,
            "card payment settled"
        );
        Ok(Settlement::now(self.method(), amount))
    }
}

/// Payment from a digital wallet.
#[derive(Clone)]
pub struct DigitalWalletPayment {
    wallet_id: String,
    credential: String,
}

impl DigitalWalletPayment {
    /// Creates a wallet payment.
    pub fn new(wallet_id: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            wallet_id: wallet_id.into(),
            credential: credential.into(),
        }
    }

    /// Returns the wallet ID.
    pub fn wallet_id(&self) -> &str {
        &self.wallet_id
    }
}

impl std::fmt::Debug for DigitalWalletPayment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigitalWalletPayment")
            .field("wallet_id", &self.wallet_id)
            .field("credential", &"***")
            .finish()
    }
}

impl PaymentStrategy for DigitalWalletPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::DigitalWallet
    }

    fn pay(&self, amount: Amount) -> Result<Settlement> {
        if self.wallet_id.trim().is_empty() || self.credential.is_empty() {
            return Err(PaymentError::Declined {
                method: self.method(),
                reason: "wallet ID and credential are required".to_string(),
            });
        }

        tracing::info!(wallet = %self.wallet_id, %amount, "wallet payment settled");
        Ok(Settlement::now(self.method(), amount))
    }
}

/// Cash collected when the order is handed over.
#[derive(Debug, Clone, Copy, Default)]
pub struct CashOnDelivery;

impl PaymentStrategy for CashOnDelivery {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::CashOnDelivery
    }

    fn pay(&self, amount: Amount) -> Result<Settlement> {
        tracing::info!(%amount, "cash on delivery recorded");
        Ok(Settlement::now(self.method(), amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CreditCardPayment {
        CreditCardPayment::new("1234-5678-9101-1121", "John Doe", "12/23", "123")
    }

    #[test]
    fn test_each_strategy_reports_its_method() {
        let amount = Amount::from_units(252);
        let settlements = [
            card().pay(amount).unwrap(),
            DigitalWalletPayment::new("john_wallet", "password")
                .pay(amount)
                .unwrap(),
            CashOnDelivery.pay(amount).unwrap(),
        ];

        let descriptions: Vec<String> = settlements.iter().map(Settlement::description).collect();
        assert_eq!(
            descriptions,
            vec![
                "Paid 252 with Credit Card",
                "Paid 252 with Digital Wallet",
                "Paid 252 with Cash on Delivery",
            ]
        );
        assert!(settlements.iter().all(|s| s.amount == amount));
    }

    #[test]
    fn test_card_debug_redacts_secrets() {
        let debug = format!("{:?}", card());
        assert!(debug.contains("************1121"));
        assert!(!debug.contains("1234"));
        assert!(!debug.contains("\"123\""));
        assert!(debug.contains("John Doe"));
    }

    #[test]
    fn test_wallet_debug_redacts_credential() {
        let debug = format!("{:?}", DigitalWalletPayment::new("john_wallet", "password"));
        assert!(debug.contains("john_wallet"));
        assert!(!debug.contains("password"));
    }

    #[test]
    fn test_short_card_number_declined() {
        let result = CreditCardPayment::new("1234", "John Doe", "12/23", "123")
            .pay(Amount::from_units(10));
        assert!(matches!(
            result,
            Err(PaymentError::Declined {
                method: PaymentMethod::CreditCard,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_wallet_declined() {
        let result = DigitalWalletPayment::new("  ", "password").pay(Amount::from_units(10));
        assert!(matches!(
            result,
            Err(PaymentError::Declined {
                method: PaymentMethod::DigitalWallet,
                ..
            })
        ));
    }

    #[test]
    fn test_boxed_strategy_delegates() {
        let boxed: Box<dyn PaymentStrategy> = Box::new(CashOnDelivery);
        assert_eq!(boxed.method(), PaymentMethod::CashOnDelivery);
        assert!(boxed.pay(Amount::zero()).is_ok());
    }

    #[test]
    fn test_settlement_serialization() {
        let settlement = CashOnDelivery.pay(Amount::from_units(1000)).unwrap();
        let json = serde_json::to_string(&settlement).unwrap();
        assert!(json.contains("\"cash_on_delivery\""));
        let deserialized: Settlement = serde_json::from_str(&json).unwrap();
        assert_eq!(settlement, deserialized);
    }
}
