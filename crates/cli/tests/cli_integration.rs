//! CLI integration tests for all implemented subcommands.
//!
//! Uses `assert_cmd` to spawn the `accord` binary and verify
//! exit codes, stdout content, and stderr content.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper: create a Command for the `accord` binary.
fn accord() -> Command {
    cargo_bin_cmd!("accord")
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    accord()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Accord vendor supply agreement generator",
        ));
}

#[test]
fn version_exits_0() {
    accord()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("accord"));
}

#[test]
fn generate_help_shows_options() {
    accord()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--prompt"))
        .stdout(predicate::str::contains("--refine"))
        .stdout(predicate::str::contains("--date"));
}

#[test]
fn serve_help_shows_port() {
    accord()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"));
}

// ──────────────────────────────────────────────
// 2. Generate subcommand
// ──────────────────────────────────────────────

#[test]
fn generate_text_output_contains_all_sections() {
    accord()
        .args([
            "generate",
            "--prompt",
            "Buyer: Acme Foods, Supplier: FreshCo Traders, price: 50000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vendor Supply Agreement"))
        .stdout(predicate::str::contains("1. Scope of Agreement"))
        .stdout(predicate::str::contains("6. Confidentiality"))
        .stdout(predicate::str::contains("Acme Foods"))
        .stdout(predicate::str::contains("FreshCo Traders"));
}

#[test]
fn generate_json_output_has_eleven_keys() {
    let output = accord()
        .args([
            "--output",
            "json",
            "generate",
            "--prompt",
            "supplier: FreshCo Traders",
        ])
        .output()
        .expect("generate failed");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("invalid UTF-8");
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let agreement = json.as_object().expect("object output");
    assert_eq!(agreement.len(), 11);
    assert!(agreement.contains_key("title"));
    assert!(agreement.contains_key("confidentiality"));
}

#[test]
fn generate_with_fixed_date_is_deterministic() {
    let args = [
        "generate",
        "--prompt",
        "supplier: FreshCo Traders",
        "--date",
        "2026-08-25",
    ];

    let out1 = accord().args(args).output().expect("first run failed");
    let out2 = accord().args(args).output().expect("second run failed");

    assert!(out1.status.success());
    assert_eq!(out1.stdout, out2.stdout);

    let stdout = String::from_utf8(out1.stdout).expect("invalid UTF-8");
    assert!(stdout.contains("Contract ID: CTR-2026-0825"));
    assert!(stdout.contains("Effective Date: August 25, 2026"));
    assert!(stdout.contains("End Date: August 25, 2027"));
}

#[test]
fn generate_from_file() {
    let tmp = TempDir::new().unwrap();
    let prompt_path = tmp.path().join("requirements.txt");
    fs::write(&prompt_path, "Buyer: Metro Retail & Co\nvendor: Gupta Mills").unwrap();

    accord()
        .args(["generate", "--file", prompt_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Metro Retail & Co"))
        .stdout(predicate::str::contains("Gupta Mills"));
}

#[test]
fn generate_missing_prompt_exits_1() {
    accord()
        .arg("generate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "either --prompt or --file is required",
        ));
}

#[test]
fn generate_nonexistent_file_exits_1() {
    accord()
        .args(["generate", "--file", "nonexistent_prompt_xyz.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error reading file"));
}

#[test]
fn generate_prompt_and_file_conflict_exits_with_clap_error() {
    accord()
        .args(["generate", "--prompt", "x", "--file", "y.txt"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--file"));
}

#[test]
fn generate_invalid_date_exits_1() {
    accord()
        .args(["generate", "--prompt", "x", "--date", "25/08/2026"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn generate_date_without_representable_end_date_exits_1() {
    // A valid date this close to the calendar maximum cannot carry a
    // 365-day term; it must fail like any other bad input.
    accord()
        .args(["generate", "--prompt", "Buyer: Acme", "--date", "9999-12-31"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("end date out of range"));
}

#[test]
fn generate_refine_without_api_key_exits_1() {
    let tmp = TempDir::new().unwrap();
    accord()
        .current_dir(tmp.path())
        .env_remove("GROQ_API_KEY")
        .args(["generate", "--prompt", "x", "--refine"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("GROQ_API_KEY"));
}

// ──────────────────────────────────────────────
// 3. Extract subcommand
// ──────────────────────────────────────────────

#[test]
fn extract_text_lists_fields() {
    accord()
        .args([
            "extract",
            "--prompt",
            "Buyer: Acme Foods, Supplier: FreshCo Traders, price: ₹50,000, payment: Net 30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("buyer_name: Acme Foods"))
        .stdout(predicate::str::contains("supplier_name: FreshCo Traders"))
        .stdout(predicate::str::contains("price: 50,000"))
        .stdout(predicate::str::contains("payment_terms: Net 30"));
}

#[test]
fn extract_empty_prompt_reports_fallbacks() {
    accord()
        .args(["extract", "--prompt", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("[BUYER NAME]"))
        .stdout(predicate::str::contains("[PO REFERENCE]"))
        .stdout(predicate::str::contains("ISO 22000"));
}

#[test]
fn extract_json_output() {
    accord()
        .args([
            "--output",
            "json",
            "extract",
            "--prompt",
            "vendor: Gupta Mills",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"supplier_name\": \"Gupta Mills\""));
}

// ──────────────────────────────────────────────
// 4. Global flags
// ──────────────────────────────────────────────

#[test]
fn quiet_suppresses_error_output() {
    accord()
        .args(["--quiet", "generate"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::is_empty());
}

#[test]
fn json_output_wraps_errors_in_envelope() {
    accord()
        .args(["--output", "json", "generate"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("\"error\""))
        .stderr(predicate::str::contains("either --prompt or --file"));
}
