//! Tagged account value for collections of mixed account types

use crate::account::{Account, AccountKind, AccountState};
use crate::building_savings::BuildingSavings;
use crate::checking::Checking;
use crate::savings::Savings;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// One of the three account types.
///
/// Every `Account` operation is forwarded to the wrapped account.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnyAccount {
    Sparbuch(Savings),
    Girokonto(Checking),
    Bausparkonto(BuildingSavings),
}

impl AnyAccount {
    fn inner(&self) -> &dyn Account {
        match self {
            AnyAccount::Sparbuch(a) => a,
            AnyAccount::Girokonto(a) => a,
            AnyAccount::Bausparkonto(a) => a,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Account {
        match self {
            AnyAccount::Sparbuch(a) => a,
            AnyAccount::Girokonto(a) => a,
            AnyAccount::Bausparkonto(a) => a,
        }
    }

    pub fn as_savings(&self) -> Option<&Savings> {
        match self {
            AnyAccount::Sparbuch(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_checking(&self) -> Option<&Checking> {
        match self {
            AnyAccount::Girokonto(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_building_savings(&self) -> Option<&BuildingSavings> {
        match self {
            AnyAccount::Bausparkonto(a) => Some(a),
            _ => None,
        }
    }
}

impl Account for AnyAccount {
    fn state(&self) -> &AccountState {
        self.inner().state()
    }

    fn kind(&self) -> AccountKind {
        self.inner().kind()
    }

    fn deposit(&mut self, amount: Decimal) {
        self.inner_mut().deposit(amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> bool {
        self.inner_mut().withdraw(amount)
    }

    fn compute_interest(&mut self) -> bool {
        self.inner_mut().compute_interest()
    }
}

impl From<Savings> for AnyAccount {
    fn from(account: Savings) -> Self {
        AnyAccount::Sparbuch(account)
    }
}

impl From<Checking> for AnyAccount {
    fn from(account: Checking) -> Self {
        AnyAccount::Girokonto(account)
    }
}

impl From<BuildingSavings> for AnyAccount {
    fn from(account: BuildingSavings) -> Self {
        AnyAccount::Bausparkonto(account)
    }
}

impl fmt::Display for AnyAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
