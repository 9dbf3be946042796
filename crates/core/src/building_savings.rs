//! Bausparkonto - building-savings account

use crate::account::{Account, AccountKind, AccountState};
use crate::config::{RateDefaults, DEFAULT_CREDIT_RATE};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Building-savings account (Bausparkonto).
///
/// Credit interest only accrues while the balance is below the
/// allocation threshold (Zuteilungsbetrag). No overdraft.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingSavings {
    #[serde(flatten)]
    state: AccountState,
    allocation_threshold: Decimal,
    credit_rate: Decimal,
}

impl BuildingSavings {
    pub fn new(owner: impl Into<String>, number: i64, allocation_threshold: Decimal) -> Self {
        Self::with_credit_rate(owner, number, allocation_threshold, None)
    }

    /// `None` falls back to [`DEFAULT_CREDIT_RATE`]; `Some(Decimal::ZERO)` stays zero.
    pub fn with_credit_rate(
        owner: impl Into<String>,
        number: i64,
        allocation_threshold: Decimal,
        credit_rate: Option<Decimal>,
    ) -> Self {
        Self {
            state: AccountState::new(owner, number),
            allocation_threshold,
            credit_rate: credit_rate.unwrap_or(DEFAULT_CREDIT_RATE),
        }
    }

    pub fn from_defaults(
        owner: impl Into<String>,
        number: i64,
        allocation_threshold: Decimal,
        credit_rate: Option<Decimal>,
        defaults: &RateDefaults,
    ) -> Self {
        Self::with_credit_rate(
            owner,
            number,
            allocation_threshold,
            Some(credit_rate.unwrap_or(defaults.building_savings_credit_rate)),
        )
    }

    pub fn allocation_threshold(&self) -> Decimal {
        self.allocation_threshold
    }

    pub fn credit_rate(&self) -> Decimal {
        self.credit_rate
    }

    pub fn set_credit_rate(&mut self, rate: Decimal) {
        self.credit_rate = rate;
    }
}

impl Account for BuildingSavings {
    fn state(&self) -> &AccountState {
        &self.state
    }

    fn kind(&self) -> AccountKind {
        AccountKind::BuildingSavings
    }

    fn deposit(&mut self, amount: Decimal) {
        self.state.deposit(amount);
    }

    fn withdraw(&mut self, amount: Decimal) -> bool {
        self.state.withdraw_down_to(amount, Decimal::ZERO)
    }

    fn compute_interest(&mut self) -> bool {
        if self.state.balance() < self.allocation_threshold {
            self.state.apply_credit_interest(self.credit_rate)
        } else {
            tracing::info!(
                account = self.state.number(),
                balance = %self.state.balance(),
                threshold = %self.allocation_threshold,
                "Allocation threshold reached, no interest"
            );
            false
        }
    }
}

impl fmt::Display for BuildingSavings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
