//! # Konto Core
//!
//! Account types of a savings bank:
//!
//! - [`Savings`] (Sparbuch): no overdraft, credit interest
//! - [`Checking`] (Girokonto): overdraft up to a limit, debit interest while overdrawn
//! - [`BuildingSavings`] (Bausparkonto): credit interest only below the allocation threshold
//!
//! All three implement the [`Account`] trait. [`AnyAccount`] holds any of
//! them in one collection, and [`OpeningRequest`] opens accounts from JSON.
//!
//! ## Example
//!
//! ```
//! use konto_core::{Account, Checking};
//! use rust_decimal::Decimal;
//!
//! let mut gk = Checking::new("Mustermann", 56789, Decimal::new(500, 0));
//! assert!(gk.withdraw(Decimal::new(100, 0)));
//! gk.compute_interest();
//! assert_eq!(
//!     gk.to_string(),
//!     "Girokonto (Inhaber Mustermann, Kontonr. 56789, Bank SPK) mit Kontostand -112.0"
//! );
//! ```

pub mod account;
pub mod any_account;
pub mod building_savings;
pub mod checking;
pub mod config;
pub mod error;
pub mod money;
pub mod opening;
pub mod savings;

pub use account::{Account, AccountKind, AccountState};
pub use any_account::AnyAccount;
pub use building_savings::BuildingSavings;
pub use checking::Checking;
pub use config::{RateDefaults, BANK_NAME, DEFAULT_CREDIT_RATE, DEFAULT_DEBIT_RATE};
pub use error::{KontoError, KontoResult};
pub use money::format_amount;
pub use opening::{open_all_from_json, OpeningRequest};
pub use savings::Savings;
