//! Rate defaults with configurable fallbacks
//!
//! Each account type falls back to a default rate when none is passed at
//! construction. The built-in defaults are the constants below; a
//! `RateDefaults` value read from JSON can replace them.

use crate::error::{KontoError, KontoResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Name of the bank shared by every account.
pub const BANK_NAME: &str = "SPK";

/// Default credit interest rate (Habenzinsen), 1%.
pub const DEFAULT_CREDIT_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Default debit interest rate for overdrawn checking accounts (Sollzinsen), 12%.
pub const DEFAULT_DEBIT_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// Fallback rates used when an account is opened without explicit rates.
///
/// Missing fields in the JSON form take the built-in constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateDefaults {
    /// Credit rate for Sparbuch accounts
    #[serde(default = "default_credit_rate")]
    pub savings_credit_rate: Decimal,

    /// Credit rate for Girokonto accounts with a non-negative balance
    #[serde(default = "default_credit_rate")]
    pub checking_credit_rate: Decimal,

    /// Debit rate for overdrawn Girokonto accounts
    #[serde(default = "default_debit_rate")]
    pub checking_debit_rate: Decimal,

    /// Credit rate for Bausparkonto accounts below their allocation threshold
    #[serde(default = "default_credit_rate")]
    pub building_savings_credit_rate: Decimal,
}

fn default_credit_rate() -> Decimal {
    DEFAULT_CREDIT_RATE
}

fn default_debit_rate() -> Decimal {
    DEFAULT_DEBIT_RATE
}

impl Default for RateDefaults {
    fn default() -> Self {
        Self {
            savings_credit_rate: default_credit_rate(),
            checking_credit_rate: default_credit_rate(),
            checking_debit_rate: default_debit_rate(),
            building_savings_credit_rate: default_credit_rate(),
        }
    }
}

impl RateDefaults {
    /// Parse rate defaults from a JSON object.
    ///
    /// Rates may be given as strings (`"0.02"`) or numbers.
    pub fn from_json_str(json: &str) -> KontoResult<Self> {
        serde_json::from_str(json).map_err(|e| KontoError::InvalidConfig(e.to_string()))
    }
}
