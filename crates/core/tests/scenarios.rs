//! Integration tests for the three account types and their shared behaviour

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use konto_core::{
    open_all_from_json, Account, AnyAccount, BuildingSavings, Checking, RateDefaults, Savings,
};

fn all_kinds() -> Vec<Box<dyn Account>> {
    vec![
        Box::new(Savings::new("Küppers", 12345)),
        Box::new(Checking::new("Mustermann", 56789, dec!(500.0))),
        Box::new(BuildingSavings::new("Meier", 98765, dec!(2000.0))),
    ]
}

#[test]
fn scenario_savings() {
    let mut sb = Savings::new("Küppers", 12345);
    assert_eq!(
        sb.to_string(),
        "Sparbuch (Inhaber Küppers, Kontonr. 12345, Bank SPK) mit Kontostand 0.0"
    );

    sb.deposit(dec!(1000.0));
    assert_eq!(sb.balance(), dec!(1000.0));

    assert!(sb.compute_interest());
    assert_eq!(sb.balance(), dec!(1010.0));
}

#[test]
fn scenario_checking() {
    let mut gk = Checking::new("Mustermann", 56789, dec!(500.0));
    assert_eq!(
        gk.to_string(),
        "Girokonto (Inhaber Mustermann, Kontonr. 56789, Bank SPK) mit Kontostand 0.0"
    );

    assert!(gk.withdraw(dec!(100.0)));
    assert_eq!(gk.balance(), dec!(-100.0));

    assert!(gk.compute_interest());
    assert_eq!(gk.balance(), dec!(-112.0));
}

#[test]
fn scenario_building_savings() {
    let mut bk = BuildingSavings::new("Meier", 98765, dec!(2000.0));
    assert_eq!(
        bk.to_string(),
        "Bausparkonto (Inhaber Meier, Kontonr. 98765, Bank SPK) mit Kontostand 0.0"
    );

    bk.deposit(dec!(1500.0));
    assert_eq!(bk.balance(), dec!(1500.0));

    assert!(bk.compute_interest());
    assert_eq!(bk.balance(), dec!(1515.0));

    assert!(bk.withdraw(dec!(1000.0)));
    assert_eq!(bk.balance(), dec!(515.0));
    assert!(bk.to_string().ends_with("mit Kontostand 515.0"));
}

#[test]
fn every_account_starts_at_zero() {
    for account in all_kinds() {
        assert_eq!(account.balance(), Decimal::ZERO);
    }
}

#[test]
fn deposit_adds_exactly_for_any_sign() {
    for mut account in all_kinds() {
        account.deposit(dec!(250.75));
        assert_eq!(account.balance(), dec!(250.75));
        account.deposit(dec!(-300));
        assert_eq!(account.balance(), dec!(-49.25));
    }
}

#[test]
fn failed_withdrawal_leaves_balance_unchanged() {
    for mut account in all_kinds() {
        account.deposit(dec!(100));
        assert!(!account.withdraw(dec!(700)));
        assert_eq!(account.balance(), dec!(100));
    }
}

#[test]
fn withdrawal_bound_depends_on_kind() {
    let results: Vec<bool> = all_kinds()
        .into_iter()
        .map(|mut account| account.withdraw(dec!(0.01)))
        .collect();
    assert_eq!(results, vec![false, true, false]);
}

#[test]
fn interest_outcome_by_kind() {
    let mut accounts = all_kinds();
    for account in accounts.iter_mut() {
        account.deposit(dec!(3000));
    }

    let applied: Vec<bool> = accounts.iter_mut().map(|a| a.compute_interest()).collect();
    assert_eq!(applied, vec![true, true, false]);

    let balances: Vec<Decimal> = accounts.iter().map(|a| a.balance()).collect();
    assert_eq!(balances, vec![dec!(3030), dec!(3030), dec!(3000)]);
}

#[test]
fn negative_savings_balance_grows_with_credit_rate() {
    let mut sb = Savings::new("Test", 1);
    let mut bk = BuildingSavings::new("Test", 2, dec!(2000));
    sb.deposit(dec!(-100));
    bk.deposit(dec!(-100));

    assert!(sb.compute_interest());
    assert!(bk.compute_interest());
    assert_eq!(sb.balance(), dec!(-101));
    assert_eq!(bk.balance(), dec!(-101));
}

#[test]
fn trait_object_display() {
    let account: Box<dyn Account> = Box::new(Savings::new("Küppers", 12345));
    assert_eq!(
        format!("{}", account.as_ref()),
        "Sparbuch (Inhaber Küppers, Kontonr. 12345, Bank SPK) mit Kontostand 0.0"
    );
}

#[test]
fn opening_requests_replay_scenarios() {
    let json = r#"[
        { "kind": "sparbuch", "owner": "Küppers", "number": 12345 },
        { "kind": "girokonto", "owner": "Mustermann", "number": 56789, "overdraft_limit": "500.0" },
        { "kind": "bausparkonto", "owner": "Meier", "number": 98765, "allocation_threshold": "2000.0" }
    ]"#;
    let mut accounts: Vec<AnyAccount> = open_all_from_json(json, &RateDefaults::default()).unwrap();

    accounts[0].deposit(dec!(1000.0));
    accounts[0].compute_interest();
    accounts[1].withdraw(dec!(100.0));
    accounts[1].compute_interest();
    accounts[2].deposit(dec!(1500.0));
    accounts[2].compute_interest();
    accounts[2].withdraw(dec!(1000.0));

    let lines: Vec<String> = accounts.iter().map(|a| a.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "Sparbuch (Inhaber Küppers, Kontonr. 12345, Bank SPK) mit Kontostand 1010.0",
            "Girokonto (Inhaber Mustermann, Kontonr. 56789, Bank SPK) mit Kontostand -112.0",
            "Bausparkonto (Inhaber Meier, Kontonr. 98765, Bank SPK) mit Kontostand 515.0",
        ]
    );
}

#[test]
fn repeated_interest_stops_at_overflow_without_panicking() {
    let mut sb = Savings::new("Küppers", 12345);
    sb.deposit(dec!(1000));
    let applied = (0..10_000).filter(|_| sb.compute_interest()).count();
    assert!(applied < 10_000);
    assert!(sb.balance() > dec!(1000));
}

#[test]
fn negative_account_numbers_are_accepted() {
    let accounts = open_all_from_json(
        r#"[{ "kind": "sparbuch", "owner": "X", "number": -5 }]"#,
        &RateDefaults::default(),
    )
    .unwrap();
    assert_eq!(accounts[0].number(), -5);
    assert_eq!(
        accounts[0].to_string(),
        "Sparbuch (Inhaber X, Kontonr. -5, Bank SPK) mit Kontostand 0.0"
    );
}
