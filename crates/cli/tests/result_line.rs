//! End-to-end checks of the benchmark binary's output contract.

use std::process::Command;

#[test]
fn test_prints_exactly_one_result_line() {
    let output = Command::new(env!("CARGO_BIN_EXE_primecount"))
        .output()
        .expect("failed to run primecount");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout was not UTF-8");
    // 78498 primes in [2, 1000000]
    assert_eq!(stdout, "RESULT:78498\n");
}

#[test]
fn test_rejects_stray_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_primecount"))
        .arg("2000000")
        .output()
        .expect("failed to run primecount");

    assert!(!output.status.success());
}
