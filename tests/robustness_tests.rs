mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_malformed_csv_handling() {
    let file = common::command_file(&[
        "pay, Coffee, 5,",
        "refund, Coffee, 5,",     // Unknown command type
        "pay, Tea, not_a_number,", // Text in amount field
        "cancel, , , abc",         // Non-integer id
        "pay, Book, 25,",
    ]);

    let mut cmd = Command::new(cargo_bin!("paytrack"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading command"))
        .stdout(predicate::str::contains("1,Coffee,5,false"))
        .stdout(predicate::str::contains("2,Book,25,false"))
        .stdout(predicate::str::contains("Tea").not());
}

#[test]
fn test_invalid_payments_are_skipped() {
    let file = common::command_file(&[
        "pay, Coffee, 0,",
        "pay, Coffee, -3,",
        "pay, Coffee, 100001,",
        "pay, , 5,",
        "pay, Coffee, ,",
        "pay, Coffee, 100000,",
    ]);

    let mut cmd = Command::new(cargo_bin!("paytrack"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("invalid amount 0"))
        .stderr(predicate::str::contains("invalid amount -3"))
        .stderr(predicate::str::contains("exceeds maximum limit of 100000"))
        .stderr(predicate::str::contains("description cannot be empty"))
        .stderr(predicate::str::contains("pay requires an amount"))
        .stdout(predicate::str::diff(
            "id,description,amount,cancelled\n1,Coffee,100000,false\n",
        ));
}

#[test]
fn test_gateway_failures_are_reported() {
    let file = common::command_file(&["pay, Coffee, 5,", "cancel, , , 1"]);

    let mut cmd = Command::new(cargo_bin!("paytrack"));
    cmd.arg(file.path()).arg("--gateway").arg("card").arg("--max-amount").arg("100000");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,Coffee,5,true"));

    let file = common::command_file(&["pay, Laptop, 60000,"]);
    let mut cmd = Command::new(cargo_bin!("paytrack"));
    cmd.arg(file.path()).arg("--gateway").arg("card");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("payment processing failed: declined"))
        .stdout(predicate::str::diff("id,description,amount,cancelled\n"));
}
