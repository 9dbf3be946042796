//! Sparbuch - savings account without overdraft

use crate::account::{Account, AccountKind, AccountState};
use crate::config::{RateDefaults, DEFAULT_CREDIT_RATE};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Savings account (Sparbuch).
///
/// Withdrawals may not take the balance below zero. Credit interest is
/// applied on every `compute_interest` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Savings {
    #[serde(flatten)]
    state: AccountState,
    credit_rate: Decimal,
}

impl Savings {
    /// Opens a savings account with the default credit rate.
    pub fn new(owner: impl Into<String>, number: i64) -> Self {
        Self::with_credit_rate(owner, number, None)
    }

    /// Opens a savings account; `None` falls back to [`DEFAULT_CREDIT_RATE`].
    ///
    /// `Some(Decimal::ZERO)` is kept as a zero rate, it does not fall back.
    pub fn with_credit_rate(
        owner: impl Into<String>,
        number: i64,
        credit_rate: Option<Decimal>,
    ) -> Self {
        Self {
            state: AccountState::new(owner, number),
            credit_rate: credit_rate.unwrap_or(DEFAULT_CREDIT_RATE),
        }
    }

    /// Opens a savings account with the fallback rate taken from `defaults`.
    pub fn from_defaults(
        owner: impl Into<String>,
        number: i64,
        credit_rate: Option<Decimal>,
        defaults: &RateDefaults,
    ) -> Self {
        Self::with_credit_rate(
            owner,
            number,
            Some(credit_rate.unwrap_or(defaults.savings_credit_rate)),
        )
    }

    pub fn credit_rate(&self) -> Decimal {
        self.credit_rate
    }

    pub fn set_credit_rate(&mut self, rate: Decimal) {
        self.credit_rate = rate;
    }
}

impl Account for Savings {
    fn state(&self) -> &AccountState {
        &self.state
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Savings
    }

    fn deposit(&mut self, amount: Decimal) {
        self.state.deposit(amount);
    }

    fn withdraw(&mut self, amount: Decimal) -> bool {
        self.state.withdraw_down_to(amount, Decimal::ZERO)
    }

    fn compute_interest(&mut self) -> bool {
        self.state.apply_credit_interest(self.credit_rate)
    }
}

impl fmt::Display for Savings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
