//! Payment processor tying a strategy, a loyalty program and a command queue
//! together.

use std::collections::VecDeque;
use std::sync::Arc;

use common::{Amount, CustomerId};

use crate::command::PaymentCommand;
use crate::error::{PaymentError, Result};
use crate::loyalty::LoyaltyProgram;
use crate::strategy::{PaymentStrategy, Settlement};

/// Settles payments with one strategy and credits a shared loyalty program.
///
/// Commands queued with [`queue_command`](Self::queue_command) run in
/// enqueue order on the next [`execute_commands`](Self::execute_commands).
pub struct PaymentProcessor<S: PaymentStrategy> {
    strategy: S,
    loyalty: Arc<dyn LoyaltyProgram>,
    queue: VecDeque<Box<dyn PaymentCommand>>,
    settlements: Vec<Settlement>,
}

impl<S: PaymentStrategy> PaymentProcessor<S> {
    /// Creates a processor with an empty command queue.
    pub fn new(strategy: S, loyalty: Arc<dyn LoyaltyProgram>) -> Self {
        Self {
            strategy,
            loyalty,
            queue: VecDeque::new(),
            settlements: Vec::new(),
        }
    }

    /// Returns the strategy this processor settles with.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Settles `amount` for `customer` and credits loyalty points for it.
    ///
    /// If the strategy declines, no points are credited and nothing is
    /// recorded. Once the strategy has settled, the settlement is recorded
    /// even if crediting points then fails.
    #[tracing::instrument(skip(self), fields(method = %self.strategy.method()))]
    pub fn process_payment(&mut self, customer: &CustomerId, amount: f64) -> Result<Settlement> {
        let amount = Amount::new(amount)?;

        let settlement = self.strategy.pay(amount)?;
        self.settlements.push(settlement.clone());
        metrics::counter!(
            "payments_processed_total",
            "method" => settlement.method.as_str()
        )
        .increment(1);

        let points = self
            .loyalty
            .earn_points(customer, amount.value())
            .inspect_err(|err| {
                tracing::warn!(
                    %customer,
                    receipt = %settlement.description(),
                    error = %err,
                    "payment settled but loyalty points were not credited"
                );
            })?;

        tracing::info!(
            %customer,
            receipt = %settlement.description(),
            points,
            "payment processed"
        );
        Ok(settlement)
    }

    /// Appends a command to the queue.
    pub fn queue_command<C: PaymentCommand + 'static>(&mut self, command: C) {
        tracing::debug!(command = command.name(), "command queued");
        self.queue.push_back(Box::new(command));
    }

    /// Returns the number of commands waiting to run.
    pub fn pending_commands(&self) -> usize {
        self.queue.len()
    }

    /// Runs every queued command once, oldest first, and empties the queue.
    ///
    /// A failing command does not stop the ones behind it. Returns the number
    /// of commands run, or [`PaymentError::CommandsFailed`] naming each
    /// command that failed.
    #[tracing::instrument(skip(self), fields(queued = self.queue.len()))]
    pub fn execute_commands(&mut self) -> Result<usize> {
        let queue = std::mem::take(&mut self.queue);
        let total = queue.len();
        let mut failed = Vec::new();

        for command in queue {
            match command.execute() {
                Ok(()) => {
                    metrics::counter!("payment_commands_executed_total").increment(1);
                }
                Err(err) => {
                    metrics::counter!("payment_command_failures_total").increment(1);
                    tracing::warn!(command = command.name(), error = %err, "command failed");
                    failed.push(command.name().to_string());
                }
            }
        }

        if failed.is_empty() {
            Ok(total)
        } else {
            Err(PaymentError::CommandsFailed { failed, total })
        }
    }

    /// Returns the loyalty points accrued by `customer`.
    pub fn earned_points(&self, customer: &CustomerId) -> f64 {
        self.loyalty.earned_points(customer)
    }

    /// Returns the settlements made by this processor, oldest first.
    pub fn settlements(&self) -> &[Settlement] {
        &self.settlements
    }

    /// Returns the sum of all settled amounts, failing if it overflows.
    pub fn total_settled(&self) -> Result<Amount> {
        Ok(Amount::checked_sum(self.settlements.iter().map(|s| s.amount))?)
    }
}

impl<S: PaymentStrategy + std::fmt::Debug> std::fmt::Debug for PaymentProcessor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pending: Vec<&str> = self.queue.iter().map(|c| c.name()).collect();
        f.debug_struct("PaymentProcessor")
            .field("strategy", &self.strategy)
            .field("pending", &pending)
            .field("settlements", &self.settlements.len())
            .finish()
    }
}
