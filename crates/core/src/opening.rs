//! # Opening Requests
//!
//! Describes accounts to open as data, e.g. loaded from a JSON file:
//!
//! ```json
//! [
//!   { "kind": "sparbuch", "owner": "Küppers", "number": 12345 },
//!   { "kind": "girokonto", "owner": "Mustermann", "number": 56789, "overdraft_limit": "500.0" },
//!   { "kind": "bausparkonto", "owner": "Meier", "number": 98765, "allocation_threshold": "2000.0" }
//! ]
//! ```
//!
//! Rates left out of a request fall back to the given [`RateDefaults`].

use crate::any_account::AnyAccount;
use crate::building_savings::BuildingSavings;
use crate::checking::Checking;
use crate::config::RateDefaults;
use crate::error::{KontoError, KontoResult};
use crate::savings::Savings;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A request to open one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OpeningRequest {
    Sparbuch {
        owner: String,
        number: i64,
        #[serde(default)]
        credit_rate: Option<Decimal>,
    },
    Girokonto {
        owner: String,
        number: i64,
        overdraft_limit: Decimal,
        #[serde(default)]
        debit_rate: Option<Decimal>,
        #[serde(default)]
        credit_rate: Option<Decimal>,
    },
    Bausparkonto {
        owner: String,
        number: i64,
        allocation_threshold: Decimal,
        #[serde(default)]
        credit_rate: Option<Decimal>,
    },
}

impl OpeningRequest {
    /// Opens the requested account with a zero balance.
    pub fn open(&self, defaults: &RateDefaults) -> AnyAccount {
        let account: AnyAccount = match self {
            OpeningRequest::Sparbuch {
                owner,
                number,
                credit_rate,
            } => Savings::from_defaults(owner.as_str(), *number, *credit_rate, defaults).into(),
            OpeningRequest::Girokonto {
                owner,
                number,
                overdraft_limit,
                debit_rate,
                credit_rate,
            } => Checking::from_defaults(
                owner.as_str(),
                *number,
                *overdraft_limit,
                *debit_rate,
                *credit_rate,
                defaults,
            )
            .into(),
            OpeningRequest::Bausparkonto {
                owner,
                number,
                allocation_threshold,
                credit_rate,
            } => BuildingSavings::from_defaults(
                owner.as_str(),
                *number,
                *allocation_threshold,
                *credit_rate,
                defaults,
            )
            .into(),
        };
        tracing::debug!(account = %account, "Account opened");
        account
    }

    /// Parses a JSON array of opening requests.
    pub fn parse_all(json: &str) -> KontoResult<Vec<OpeningRequest>> {
        serde_json::from_str(json).map_err(|e| KontoError::InvalidRequest(e.to_string()))
    }
}

/// Parses a JSON array of opening requests and opens every account.
pub fn open_all_from_json(json: &str, defaults: &RateDefaults) -> KontoResult<Vec<AnyAccount>> {
    let requests = OpeningRequest::parse_all(json)?;
    Ok(requests.iter().map(|r| r.open(defaults)).collect())
}
