//! Konto demo - opens one account of each type and prints how the
//! balance moves through deposits, withdrawals and interest.
//!
//! Usage:
//! ```bash
//! cargo run -p konto-demo
//! RUST_LOG=debug cargo run -p konto-demo
//! ```

use anyhow::Result;
use konto_core::{format_amount, Account, AnyAccount, BuildingSavings, Checking, Savings};
use rust_decimal_macros::dec;

fn print_balance(account: &dyn Account) {
    println!("   Kontostand: {}", format_amount(account.balance()));
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== Sparbuch ===");
    let mut sb = Savings::new("Küppers", 12345);
    println!("{}", sb);
    sb.deposit(dec!(1000.0));
    print_balance(&sb);
    sb.compute_interest();
    print_balance(&sb);

    println!("\n=== Girokonto ===");
    let mut gk = Checking::new("Mustermann", 56789, dec!(500.0));
    println!("{}", gk);
    gk.withdraw(dec!(100.0));
    print_balance(&gk);
    gk.compute_interest();
    print_balance(&gk);

    println!("\n=== Bausparkonto ===");
    let mut bk = BuildingSavings::new("Meier", 98765, dec!(2000.0));
    println!("{}", bk);
    bk.deposit(dec!(1500.0));
    print_balance(&bk);
    bk.compute_interest();
    print_balance(&bk);
    bk.withdraw(dec!(1000.0));
    print_balance(&bk);

    println!("\n=== Endstand ===");
    let accounts: Vec<AnyAccount> = vec![sb.into(), gk.into(), bk.into()];
    println!("{}", serde_json::to_string_pretty(&accounts)?);

    tracing::info!("Demo finished");
    Ok(())
}
