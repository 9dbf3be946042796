//! Girokonto - checking account with an overdraft limit

use crate::account::{Account, AccountKind, AccountState};
use crate::config::{RateDefaults, DEFAULT_CREDIT_RATE, DEFAULT_DEBIT_RATE};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Checking account (Girokonto).
///
/// The balance may go down to `-overdraft_limit`. A negative balance is
/// charged debit interest, a non-negative one earns credit interest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Checking {
    #[serde(flatten)]
    state: AccountState,
    overdraft_limit: Decimal,
    debit_rate: Decimal,
    credit_rate: Decimal,
}

impl Checking {
    /// Opens a checking account with the default debit and credit rates.
    pub fn new(owner: impl Into<String>, number: i64, overdraft_limit: Decimal) -> Self {
        Self::with_rates(owner, number, overdraft_limit, None, None)
    }

    /// Opens a checking account; missing rates fall back to
    /// [`DEFAULT_DEBIT_RATE`] and [`DEFAULT_CREDIT_RATE`].
    ///
    /// An explicit zero rate is kept, only `None` falls back.
    pub fn with_rates(
        owner: impl Into<String>,
        number: i64,
        overdraft_limit: Decimal,
        debit_rate: Option<Decimal>,
        credit_rate: Option<Decimal>,
    ) -> Self {
        Self {
            state: AccountState::new(owner, number),
            overdraft_limit,
            debit_rate: debit_rate.unwrap_or(DEFAULT_DEBIT_RATE),
            credit_rate: credit_rate.unwrap_or(DEFAULT_CREDIT_RATE),
        }
    }

    /// Opens a checking account with fallback rates taken from `defaults`.
    pub fn from_defaults(
        owner: impl Into<String>,
        number: i64,
        overdraft_limit: Decimal,
        debit_rate: Option<Decimal>,
        credit_rate: Option<Decimal>,
        defaults: &RateDefaults,
    ) -> Self {
        Self::with_rates(
            owner,
            number,
            overdraft_limit,
            Some(debit_rate.unwrap_or(defaults.checking_debit_rate)),
            Some(credit_rate.unwrap_or(defaults.checking_credit_rate)),
        )
    }

    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }

    pub fn debit_rate(&self) -> Decimal {
        self.debit_rate
    }

    pub fn credit_rate(&self) -> Decimal {
        self.credit_rate
    }

    pub fn set_debit_rate(&mut self, rate: Decimal) {
        self.debit_rate = rate;
    }

    pub fn set_credit_rate(&mut self, rate: Decimal) {
        self.credit_rate = rate;
    }
}

impl Account for Checking {
    fn state(&self) -> &AccountState {
        &self.state
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Checking
    }

    fn deposit(&mut self, amount: Decimal) {
        self.state.deposit(amount);
    }

    fn withdraw(&mut self, amount: Decimal) -> bool {
        self.state.withdraw_down_to(amount, -self.overdraft_limit)
    }

    fn compute_interest(&mut self) -> bool {
        if self.state.balance() < Decimal::ZERO {
            self.state.apply_debit_interest(self.debit_rate)
        } else {
            self.state.apply_credit_interest(self.credit_rate)
        }
    }
}

impl fmt::Display for Checking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
