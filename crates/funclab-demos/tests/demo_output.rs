//! Runs both demo binaries and checks what they print.

use std::process::Command;

fn run_demo(binary: &str) -> String {
    let output = Command::new(binary)
        .env("FUNCLAB_RESOURCE_DELAY_MS", "0")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run demo binary");

    assert!(output.status.success(), "demo exited with {:?}", output.status);
    String::from_utf8(output.stdout).expect("demo output is not UTF-8")
}

fn basic_output() -> String {
    run_demo(env!("CARGO_BIN_EXE_basic_functions"))
}

fn variadic_output() -> String {
    run_demo(env!("CARGO_BIN_EXE_variadic_functions"))
}

#[test]
fn basic_demo_prints_every_section() {
    let out = basic_output();

    for marker in ["1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣", "🔟"] {
        assert!(out.contains(marker), "missing section {}", marker);
    }
    assert!(out.contains("🎯 CONCEPTS DEMONSTRATED:"));
}

#[test]
fn basic_demo_results() {
    let out = basic_output();

    assert!(out.contains("Hello, Ana!"));
    assert!(out.contains("15 + 25 = 40"));
    assert!(out.contains("User: María, Age: 28, Status: active"));
    assert!(out.contains("10 / 3 = 3.33"));
    assert!(out.contains("❌ Expected error: division by zero is not allowed"));
    assert!(out.contains("Analyzed text: 9 words, 48 characters, 3 lines"));
    assert!(out.contains("Age -5: ❌ age cannot be negative"));
    assert!(out.contains("Age 70: senior"));
}

#[test]
fn basic_demo_discounts_and_validation() {
    let out = basic_output();

    assert!(out.contains("Product 1: $100.00 → $76.00 (Premium 20% + Member 5%)"));
    assert!(out.contains("Product 2: $50.00 → $45.00 (Regular 10%)"));
    assert!(out.contains("Product 3: $25.00 → $22.56 (Basic 5% + Member 5%)"));
    assert!(out.contains("Product 4: $200.00 → $200.00 (No discount)"));
    assert!(out.contains("Product 5: ❌ Validation error: price must be positive"));

    assert!(out.contains("User 1: ✅ Valid - Juan Pérez"));
    assert!(out.contains("User 2: ❌ name is required"));
    assert!(out.contains("User 3: ❌ age must be between 0 and 120"));
    assert!(out.contains("User 4: ✅ Valid - Pedro López"));
}

#[test]
fn basic_demo_closes_every_resource() {
    let out = basic_output();

    for file in ["datos.txt", "config.json", "error.txt", "backup.sql"] {
        assert!(
            out.contains(&format!("🔒 Closing file: {}", file)),
            "{} was not closed",
            file
        );
    }

    // The failing file is closed before its error is reported.
    let closed = out.find("🔒 Closing file: error.txt").unwrap();
    let reported = out.find("❌ Error: failed to process error.txt").unwrap();
    assert!(closed < reported);
    assert!(!out.contains("✅ File processed successfully: error.txt"));
}

#[test]
fn variadic_demo_results() {
    let out = variadic_output();

    assert!(out.contains("No numbers: 0"));
    assert!(out.contains("One number: 5"));
    assert!(out.contains("Several numbers: 15"));
    assert!(out.contains("From a vector: 150"));

    assert!(out.contains("(No additional messages)"));
    assert!(out.contains("   2. Have a great day"));
    assert!(out.contains("[WARNING] 2 attempts left for user ana.garcia"));

    assert!(out.contains("Count: 7, Min: 1.50, Max: 4.10, Average: 2.79"));
    assert!(out.contains("No data: Count: 0, Min: 0.00, Max: 0.00, Average: 0.00"));

    assert!(out.contains("With commas: apple, banana, orange"));
    assert!(out.contains("No elements: ''"));
    assert!(out.contains("Fields 2 valid: false, errors: [\"field 2 is empty\"]"));
}

#[test]
fn variadic_demo_sql_operations_and_pipeline() {
    let out = variadic_output();

    assert!(out.contains("SELECT * FROM users;"));
    assert!(out.contains("SELECT * FROM users WHERE age > 18 AND active = true;"));
    assert!(out.contains("DELETE FROM products WHERE stock = 0;"));
    assert!(out.contains("❌ Error: operation 'MERGE' is not supported"));

    assert!(out.contains("= 75.00"));
    assert!(out.contains("= 375000.00"));
    assert!(out.contains("modulo: ❌ operation 'modulo' is not supported"));
    assert!(out.contains("sum of []: ❌ at least one number is required"));

    assert!(out.contains("After doubling: [2, 4, 6, 8, 10]"));
    assert!(out.contains("Double → +1: [3, 5, 7, 9, 11]"));
    assert!(out.contains("Double → +1 → ²: [9, 25, 49, 81, 121]"));
}

#[test]
fn variadic_demo_report() {
    let out = variadic_output();

    assert!(out.contains("================\n| Daily Report |\n================"));
    assert!(out.contains("--- Section 3 ---\nAverage session time: 12 min"));
    assert!(out.contains("Daily sales: $15789.50"));
    assert!(out.contains("Generated: "));
    assert!(out.contains("🎯 CONCEPTS DEMONSTRATED:"));
}
