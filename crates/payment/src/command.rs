//! Deferred payment commands.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use common::CustomerId;
use serde::{Deserialize, Serialize};

use crate::error::{PaymentError, Result};
use crate::loyalty::LoyaltyProgram;

/// A unit of work queued on a [`PaymentProcessor`](crate::PaymentProcessor)
/// and run later by `execute_commands`.
pub trait PaymentCommand: Send {
    /// Returns a short name used in logs and failure reports.
    fn name(&self) -> &str;

    /// Runs the command.
    fn execute(&self) -> Result<()>;
}

/// One piece of customer feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// Who left the feedback.
    pub customer: CustomerId,

    /// What they said.
    pub message: String,

    /// The customer's loyalty balance when the feedback was recorded.
    pub points_at_submission: f64,

    /// When the feedback was recorded.
    pub submitted_at: DateTime<Utc>,
}

/// Shared store of recorded feedback.
#[derive(Debug, Clone, Default)]
pub struct FeedbackLog {
    entries: Arc<RwLock<Vec<FeedbackEntry>>>,
}

impl FeedbackLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all entries, oldest first.
    pub fn entries(&self) -> Vec<FeedbackEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if no feedback has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record(&self, entry: FeedbackEntry) -> Result<()> {
        self.entries
            .write()
            .map_err(|_| PaymentError::Command {
                name: FeedbackCommand::NAME.to_string(),
                reason: "feedback log lock poisoned".to_string(),
            })?
            .push(entry);
        Ok(())
    }
}

/// Records a customer's feedback alongside their current loyalty balance.
///
/// Reads the loyalty program but never credits or debits points.
pub struct FeedbackCommand {
    loyalty: Arc<dyn LoyaltyProgram>,
    customer: CustomerId,
    message: String,
    log: FeedbackLog,
}

impl FeedbackCommand {
    const NAME: &'static str = "feedback";

    /// Creates a feedback command. Blank messages are rejected.
    pub fn new(
        loyalty: Arc<dyn LoyaltyProgram>,
        customer: CustomerId,
        message: impl Into<String>,
        log: FeedbackLog,
    ) -> Result<Self> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(PaymentError::EmptyFeedback);
        }

        Ok(Self {
            loyalty,
            customer,
            message,
            log,
        })
    }

    /// Returns the feedback text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the customer leaving the feedback.
    pub fn customer(&self) -> &CustomerId {
        &self.customer
    }
}

impl std::fmt::Debug for FeedbackCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackCommand")
            .field("customer", &self.customer)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl PaymentCommand for FeedbackCommand {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn execute(&self) -> Result<()> {
        let points = self.loyalty.earned_points(&self.customer);
        tracing::info!(
            customer = %self.customer,
            message = %self.message,
            points,
            "feedback received"
        );

        self.log.record(FeedbackEntry {
            customer: self.customer.clone(),
            message: self.message.clone(),
            points_at_submission: points,
            submitted_at: Utc::now(),
        })
    }
}
