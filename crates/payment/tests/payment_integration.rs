//! Integration tests for payment processing.
//!
//! Several processors share one loyalty program, the way a shop runs one
//! processor per payment method.

use std::sync::Arc;

use common::CustomerId;
use payment::{
    CashOnDelivery, CreditCardPayment, DigitalWalletPayment, FeedbackCommand, FeedbackLog,
    LoyaltyProgram, PaymentError, PaymentMethod, PaymentProcessor, SimpleLoyaltyProgram,
};

fn card() -> CreditCardPayment {
    CreditCardPayment::new("1234-5678-9101-1121", "John Doe", "12/23", "123")
}

fn wallet() -> DigitalWalletPayment {
    DigitalWalletPayment::new("john_wallet", "password")
}

mod settlement {
    use super::*;

    #[test]
    fn each_method_settles_and_earns_points_independently() {
        let anbu = CustomerId::new("Anbu");

        for method in [
            PaymentMethod::CreditCard,
            PaymentMethod::DigitalWallet,
            PaymentMethod::CashOnDelivery,
        ] {
            let loyalty = Arc::new(SimpleLoyaltyProgram::new());
            let settlement = match method {
                PaymentMethod::CreditCard => PaymentProcessor::new(card(), loyalty.clone())
                    .process_payment(&anbu, 1000.0),
                PaymentMethod::DigitalWallet => PaymentProcessor::new(wallet(), loyalty.clone())
                    .process_payment(&anbu, 1000.0),
                PaymentMethod::CashOnDelivery => {
                    PaymentProcessor::new(CashOnDelivery, loyalty.clone())
                        .process_payment(&anbu, 1000.0)
                }
            }
            .unwrap();

            assert_eq!(settlement.method, method);
            assert_eq!(settlement.description(), format!("Paid 1000 with {method}"));
            assert_eq!(loyalty.earned_points(&anbu), 10.0);
        }
    }

    #[test]
    fn shared_loyalty_accumulates_across_processors() {
        let anbu = CustomerId::new("Anbu");
        let loyalty = Arc::new(SimpleLoyaltyProgram::new());

        let mut by_card = PaymentProcessor::new(card(), loyalty.clone());
        let mut by_wallet = PaymentProcessor::new(wallet(), loyalty.clone());
        let mut by_cash = PaymentProcessor::new(CashOnDelivery, loyalty.clone());

        by_card.process_payment(&anbu, 252.0).unwrap();
        by_wallet.process_payment(&anbu, 252.0).unwrap();
        by_cash.process_payment(&anbu, 252.0).unwrap();

        for points in [
            by_card.earned_points(&anbu),
            by_wallet.earned_points(&anbu),
            by_cash.earned_points(&anbu),
        ] {
            assert!((points - 7.56).abs() < 1e-9);
        }
    }

    #[test]
    fn negative_and_nan_amounts_are_rejected_everywhere() {
        let anbu = CustomerId::new("Anbu");
        let loyalty = Arc::new(SimpleLoyaltyProgram::new());
        let mut processor = PaymentProcessor::new(CashOnDelivery, loyalty.clone());

        for bad in [-0.01, f64::NAN, f64::NEG_INFINITY] {
            assert!(matches!(
                processor.process_payment(&anbu, bad),
                Err(PaymentError::InvalidAmount(_))
            ));
            assert!(matches!(
                loyalty.earn_points(&anbu, bad),
                Err(PaymentError::InvalidAmount(_))
            ));
        }
        assert_eq!(loyalty.earned_points(&anbu), 0.0);
    }

    #[test]
    fn zero_amount_settles_without_points() {
        let anbu = CustomerId::new("Anbu");
        let mut processor =
            PaymentProcessor::new(CashOnDelivery, Arc::new(SimpleLoyaltyProgram::new()));

        let settlement = processor.process_payment(&anbu, 0.0).unwrap();
        assert!(settlement.amount.is_zero());
        assert_eq!(processor.earned_points(&anbu), 0.0);
    }
}

mod commands {
    use super::*;

    #[test]
    fn two_feedback_commands_run_fifo_exactly_once() {
        let anbu = CustomerId::new("Anbu");
        let loyalty = Arc::new(SimpleLoyaltyProgram::new());
        let log = FeedbackLog::new();
        let mut processor = PaymentProcessor::new(CashOnDelivery, loyalty.clone());

        processor.process_payment(&anbu, 500.0).unwrap();
        processor.queue_command(
            FeedbackCommand::new(loyalty.clone(), anbu.clone(), "first", log.clone()).unwrap(),
        );
        processor.queue_command(
            FeedbackCommand::new(loyalty.clone(), anbu.clone(), "second", log.clone()).unwrap(),
        );

        assert_eq!(processor.execute_commands().unwrap(), 2);
        assert_eq!(processor.execute_commands().unwrap(), 0);

        let messages: Vec<String> = log.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["first", "second"]);
        assert_eq!(loyalty.earned_points(&anbu), 5.0);
    }

    #[test]
    fn feedback_sees_points_at_execution_time() {
        let anbu = CustomerId::new("Anbu");
        let loyalty = Arc::new(SimpleLoyaltyProgram::new());
        let log = FeedbackLog::new();
        let mut processor = PaymentProcessor::new(card(), loyalty.clone());

        processor.queue_command(
            FeedbackCommand::new(loyalty.clone(), anbu.clone(), "yummmy :)", log.clone()).unwrap(),
        );
        processor.process_payment(&anbu, 300.0).unwrap();
        processor.execute_commands().unwrap();

        assert_eq!(log.entries()[0].points_at_submission, 3.0);
    }
}
