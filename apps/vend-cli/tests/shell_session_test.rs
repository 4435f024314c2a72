use std::io::Cursor;

use vend_cli::{Shell, VendConfig};
use vend_core::{Catalog, CreditPolicy, Denomination, Money, VendingService};

fn run_script(config: &VendConfig, script: &str) -> (String, vend_core::ChangeReport) {
    let mut out = Vec::new();
    let change = vend_cli::run(config, Cursor::new(script.to_string()), &mut out).unwrap();
    (String::from_utf8(out).unwrap(), change)
}

#[test]
fn test_hundred_note_session_end_to_end() {
    let script = "T1\n100\nT1\n1\nT1\n5\nexit\n";
    let (output, change) = run_script(&VendConfig::default(), script);

    assert!(output.contains("Available Products:"));
    assert!(output.contains("Id: D1, Name: Soda, Cost: 20 kr"));
    assert!(output.contains("Available Denominations: 1kr, 5kr, 10kr, 20kr, 50kr, 100kr, 500kr, 1000kr"));

    assert_eq!(output.matches("Purchased: Robot").count(), 2);
    assert_eq!(output.matches("Play with your Electronic toy!").count(), 2);
    assert!(output.contains("Insufficient funds for T1: costs 50 kr, available 0 kr"));

    assert!(output.ends_with("Change:\n5 kr: 1 notes\n1 kr: 1 notes\n"));
    assert_eq!(change.count(Denomination::HundredKr), 0);
    assert_eq!(change.total(), Money::from_kr(6));
}

#[test]
fn test_invalid_denomination_inserts_nothing() {
    let (output, change) = run_script(&VendConfig::default(), "D1\nseven\nD1\n7\nexit\n");

    assert_eq!(output.matches("Invalid denomination.").count(), 2);
    assert!(!output.contains("Purchased"));
    assert!(change.is_empty());
    assert!(output.ends_with("Change:\nNo change.\n"));
}

#[test]
fn test_unknown_product_still_keeps_the_money() {
    let (output, change) = run_script(&VendConfig::default(), "X9\n100\nEXIT\n");

    assert!(output.contains("Product not found: X9"));
    assert_eq!(change.count(Denomination::HundredKr), 1);
}

#[test]
fn test_details_command() {
    let (output, change) = run_script(&VendConfig::default(), "details D1\ndetails Z\nexit\n");

    assert!(output.contains("Drink: Soda, Flavor: Cola, Cost: 20 kr"));
    assert!(output.contains("Product not found."));
    assert!(!output.contains("Enter the denomination"));
    assert!(change.is_empty());
}

#[test]
fn test_end_of_input_settles_the_session() {
    let (output, change) = run_script(&VendConfig::default(), "S1\n100\nS1\n");

    assert!(output.contains("Purchased: Chips"));
    assert!(output.contains("Enjoy your Potato snack!"));
    assert_eq!(
        change.lines(),
        vec!["50 kr: 1 notes", "20 kr: 1 notes", "10 kr: 1 notes", "5 kr: 1 notes"]
    );
    assert_eq!(change.total(), Money::from_kr(85));
}

#[test]
fn test_total_inserted_policy_accepts_small_notes() {
    let config = VendConfig {
        credit_policy: CreditPolicy::TotalInserted,
        ..VendConfig::default()
    };
    let (output, _) = run_script(&config, "D1\n20\nexit\n");

    assert!(output.contains("Purchased: Soda"));
    assert!(output.contains("Enjoy your Cola drink!"));
}

#[test]
fn test_hundred_notes_policy_refuses_small_notes() {
    let (output, _) = run_script(&VendConfig::default(), "D1\n20\nexit\n");

    assert!(output.contains("Insufficient funds for D1: costs 20 kr, available 0 kr"));
}

#[test]
fn test_json_receipt() {
    let config = VendConfig {
        json_change: true,
        ..VendConfig::default()
    };
    let (output, _) = run_script(&config, "D1\n100\nD1\n50\nexit\n");

    let (_, json) = output.rsplit_once("to end): ").unwrap();
    let receipt: serde_json::Value = serde_json::from_str(json).unwrap();

    assert_eq!(receipt["credit_policy"], "hundred-notes");
    assert_eq!(receipt["total"], 110);
    assert_eq!(
        receipt["change"]["entries"],
        serde_json::json!([
            { "denomination": 50, "count": 2 },
            { "denomination": 10, "count": 1 }
        ])
    );
    assert!(receipt["session_id"].is_string());
}

#[test]
fn test_shell_leaves_machine_idle() {
    let mut out = Vec::new();
    let mut shell = Shell::new(
        VendingService::default(),
        Cursor::new("T1\n100\nexit\n"),
        &mut out,
    );
    shell.run().unwrap();

    let machine = shell.into_vending();
    assert!(machine.pool().is_empty());
    assert_eq!(machine.available_credit(), Money::zero());
}

#[test]
fn test_receipt_reports_the_machine_policy() {
    let mut out = Vec::new();
    let machine = VendingService::new(Catalog::reference(), CreditPolicy::TotalInserted);
    Shell::new(machine, Cursor::new("exit\n"), &mut out)
        .json_change(true)
        .run()
        .unwrap();

    let output = String::from_utf8(out).unwrap();
    let (_, json) = output.rsplit_once("to end): ").unwrap();
    let receipt: serde_json::Value = serde_json::from_str(json).unwrap();

    assert_eq!(receipt["credit_policy"], "total-inserted");
    assert_eq!(receipt["total"], 0);
}
