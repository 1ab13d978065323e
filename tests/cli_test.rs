use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn courseplan() -> Command {
    Command::cargo_bin("courseplan").unwrap()
}

#[test]
fn test_demo_prints_order_then_none() {
    courseplan()
        .arg("demo")
        .assert()
        .success()
        .stdout("[Ohpe, Jym, Ohja, Tira]\nNone\n");
}

#[test]
fn test_order_from_flags() {
    courseplan()
        .args([
            "order", "-c", "Ohpe", "-c", "Ohja", "-c", "Tira", "-c", "Jym", "-r", "Ohpe:Ohja",
            "-r", "Ohja:Tira", "-r", "Jym:Tira",
        ])
        .assert()
        .success()
        .stdout("[Ohpe, Jym, Ohja, Tira]\n");
}

#[test]
fn test_order_without_courses_is_empty() {
    courseplan().arg("order").assert().success().stdout("[]\n");
}

#[test]
fn test_order_cycle_prints_none() {
    courseplan()
        .args(["order", "-c", "A", "-r", "A:A"])
        .assert()
        .success()
        .stdout("None\n");
}

#[test]
fn test_order_fail_on_cycle_with_explain() {
    courseplan()
        .args([
            "order",
            "-c",
            "A",
            "-c",
            "B",
            "-c",
            "C",
            "-r",
            "A:B",
            "-r",
            "B:C",
            "-r",
            "C:A",
            "--explain",
            "--fail-on-cycle",
        ])
        .assert()
        .code(2)
        .stdout("None\n")
        .stderr(predicate::str::contains("Cycle: A -> B -> C -> A"))
        .stderr(predicate::str::contains("Unresolved: A, B, C"));
}

#[test]
fn test_order_unknown_course_fails() {
    courseplan()
        .args(["order", "-c", "Ohpe", "-r", "Ohpe:Lama"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Course `Lama` is not registered"));
}

#[test]
fn test_order_invalid_requisite_rejected() {
    courseplan()
        .args(["order", "-c", "Ohpe", "-r", "Ohpe"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected BEFORE:AFTER"));
}

#[test]
fn test_check_usage_error_distinct_from_cycle() {
    courseplan()
        .args(["check", "-c", "A", "-r", "A"])
        .assert()
        .code(1);

    courseplan()
        .args(["check", "-c", "A", "-r", "A:A"])
        .assert()
        .code(2)
        .stdout("cycle: A -> A\n");

    courseplan().args(["check", "--bogus"]).assert().code(1);
}

#[test]
fn test_help_exits_zero() {
    courseplan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_check_long_chain() {
    let temp = TempDir::new().unwrap();
    let plan = temp.path().join("chain.json");
    let n = 150_000;
    let courses: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
    let requisites: Vec<serde_json::Value> = (1..n)
        .map(|i| serde_json::json!({ "before": format!("c{}", i - 1), "after": format!("c{i}") }))
        .collect();
    fs::write(
        &plan,
        serde_json::json!({ "courses": courses, "requisites": requisites }).to_string(),
    )
    .unwrap();

    courseplan()
        .args(["check", "--file"])
        .arg(&plan)
        .assert()
        .success()
        .stdout("ok\n");

    courseplan()
        .args(["order", "--explain", "--json", "--file"])
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\":\"ordered\""));
}

#[test]
fn test_order_from_file_as_json() {
    let temp = TempDir::new().unwrap();
    let plan = temp.path().join("plan.json");
    fs::write(
        &plan,
        r#"{
            "courses": ["Ohpe", "Ohja", "Tira", "Jym"],
            "requisites": [
                { "before": "Ohpe", "after": "Ohja" },
                { "before": "Ohja", "after": "Tira" },
                { "before": "Jym", "after": "Tira" }
            ]
        }"#,
    )
    .unwrap();

    let output = courseplan()
        .args(["order", "--json", "--file"])
        .arg(&plan)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "ordered");
    assert_eq!(
        value["order"],
        serde_json::json!(["Ohpe", "Jym", "Ohja", "Tira"])
    );
}

#[test]
fn test_order_file_then_flags() {
    let temp = TempDir::new().unwrap();
    let plan = temp.path().join("plan.json");
    fs::write(&plan, r#"{ "courses": ["Tira", "Tira"] }"#).unwrap();

    courseplan()
        .args(["order", "-c", "Ohja", "-r", "Ohja:Tira", "--file"])
        .arg(&plan)
        .assert()
        .success()
        .stdout("[Ohja, Tira]\n");
}

#[test]
fn test_order_missing_file() {
    let temp = TempDir::new().unwrap();

    courseplan()
        .args(["order", "--file"])
        .arg(temp.path().join("missing.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load plan file"));
}

#[test]
fn test_check_ok_and_cycle() {
    courseplan()
        .args(["check", "-c", "X", "-c", "Y", "-r", "X:Y"])
        .assert()
        .success()
        .stdout("ok\n");

    courseplan()
        .args(["check", "-c", "X", "-c", "Y", "-r", "X:Y", "-r", "Y:X"])
        .assert()
        .code(2)
        .stdout("cycle: X -> Y -> X\n");
}
