//! # Account Module
//!
//! Defines the `Account` trait shared by every account type, the state
//! each type embeds, and the interest/withdrawal rules they reuse.
//!
//! There is no constructor for a bare account: only `Savings`,
//! `Checking` and `BuildingSavings` can be created.

use crate::config::BANK_NAME;
use crate::money::format_amount;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Kind of an account, displayed with its German product name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    /// Sparbuch
    Savings,
    /// Girokonto
    Checking,
    /// Bausparkonto
    BuildingSavings,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Savings => "Sparbuch",
            AccountKind::Checking => "Girokonto",
            AccountKind::BuildingSavings => "Bausparkonto",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity and balance common to every account.
///
/// `balance` can only be changed from inside the crate, through the
/// account operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountState {
    owner: String,
    number: i64,
    balance: Decimal,
}

impl AccountState {
    pub(crate) fn new(owner: impl Into<String>, number: i64) -> Self {
        Self {
            owner: owner.into(),
            number,
            balance: Decimal::ZERO,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Adds `amount` to the balance. Negative amounts are not rejected.
    ///
    /// Returns `false` and leaves the balance unchanged if the sum overflows.
    pub(crate) fn deposit(&mut self, amount: Decimal) -> bool {
        let Some(balance) = self.balance.checked_add(amount) else {
            self.warn_overflow("deposit", amount);
            return false;
        };
        self.balance = balance;
        tracing::debug!(
            account = self.number,
            amount = %amount,
            balance = %self.balance,
            "Deposit applied"
        );
        true
    }

    /// Withdraws `amount` if the resulting balance stays at or above `floor`.
    pub(crate) fn withdraw_down_to(&mut self, amount: Decimal, floor: Decimal) -> bool {
        let Some(balance) = self.balance.checked_sub(amount) else {
            self.warn_overflow("withdrawal", amount);
            return false;
        };
        if balance >= floor {
            self.balance = balance;
            tracing::debug!(
                account = self.number,
                amount = %amount,
                balance = %self.balance,
                "Withdrawal applied"
            );
            true
        } else {
            tracing::info!(
                account = self.number,
                amount = %amount,
                balance = %self.balance,
                floor = %floor,
                "Withdrawal rejected"
            );
            false
        }
    }

    /// Credit interest: `balance += balance * rate`.
    ///
    /// Applied regardless of sign, so a negative balance grows further
    /// below zero. Returns `false` and leaves the balance unchanged on overflow.
    pub(crate) fn apply_credit_interest(&mut self, rate: Decimal) -> bool {
        let Some((interest, balance)) = self
            .balance
            .checked_mul(rate)
            .and_then(|interest| Some((interest, self.balance.checked_add(interest)?)))
        else {
            self.warn_overflow("credit interest", rate);
            return false;
        };
        self.balance = balance;
        tracing::debug!(
            account = self.number,
            rate = %rate,
            interest = %interest,
            balance = %self.balance,
            "Credit interest applied"
        );
        true
    }

    /// Debit interest: `balance -= |balance| * rate`.
    ///
    /// Returns `false` and leaves the balance unchanged on overflow.
    pub(crate) fn apply_debit_interest(&mut self, rate: Decimal) -> bool {
        let Some((charge, balance)) = self
            .balance
            .abs()
            .checked_mul(rate)
            .and_then(|charge| Some((charge, self.balance.checked_sub(charge)?)))
        else {
            self.warn_overflow("debit interest", rate);
            return false;
        };
        self.balance = balance;
        tracing::debug!(
            account = self.number,
            rate = %rate,
            charge = %charge,
            balance = %self.balance,
            "Debit interest charged"
        );
        true
    }

    fn warn_overflow(&self, operation: &str, operand: Decimal) {
        tracing::warn!(
            account = self.number,
            operation,
            operand = %operand,
            balance = %self.balance,
            "Balance overflow, operation not applied"
        );
    }

    /// Renders the statement line for an account of the given kind.
    pub(crate) fn describe(&self, kind: AccountKind) -> String {
        format!(
            "{} (Inhaber {}, Kontonr. {}, Bank {}) mit Kontostand {}",
            kind,
            self.owner,
            self.number,
            BANK_NAME,
            format_amount(self.balance)
        )
    }
}

/// Behaviour shared by all account types.
///
/// # Examples
/// ```
/// use konto_core::{Account, Savings};
/// use rust_decimal::Decimal;
///
/// let mut account: Box<dyn Account> = Box::new(Savings::new("Küppers", 12345));
/// account.deposit(Decimal::new(1000, 0));
/// assert!(account.compute_interest());
/// assert_eq!(account.balance(), Decimal::new(1010, 0));
/// ```
pub trait Account {
    /// Shared identity and balance
    fn state(&self) -> &AccountState;

    fn kind(&self) -> AccountKind;

    /// Increases the balance by `amount`.
    fn deposit(&mut self, amount: Decimal);

    /// Decreases the balance by `amount` if the account allows it.
    ///
    /// Returns `false` and leaves the balance unchanged otherwise.
    fn withdraw(&mut self, amount: Decimal) -> bool;

    /// Applies interest for one period. Returns whether interest was applied.
    fn compute_interest(&mut self) -> bool;

    fn owner(&self) -> &str {
        self.state().owner()
    }

    fn number(&self) -> i64 {
        self.state().number()
    }

    fn balance(&self) -> Decimal {
        self.state().balance()
    }

    /// `"<Kind> (Inhaber <owner>, Kontonr. <number>, Bank SPK) mit Kontostand <balance>"`
    fn describe(&self) -> String {
        self.state().describe(self.kind())
    }
}

impl fmt::Display for dyn Account + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
