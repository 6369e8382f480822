//! # Basic Functions Demo
//!
//! Walks through function declaration variants, simple business rules and
//! the scoped-resource pattern, printing each result as it goes.
//!
//! ## Usage
//! ```bash
//! cargo run -p funclab-demos --bin basic_functions
//!
//! # Skip the simulated processing pause
//! FUNCLAB_RESOURCE_DELAY_MS=0 cargo run -p funclab-demos --bin basic_functions
//! ```

use std::io;

use funclab_core::{
    add, analyze_text, classify_age, describe_user, divide, greet_person, greeting,
    process_resource, Money, Product, User,
};
use funclab_demos::console::{banner, concepts, error_line, section};
use funclab_demos::{init_tracing, DemoSettings};
use tracing::info;

fn main() {
    init_tracing();
    let settings = DemoSettings::from_env();
    info!(?settings, "Starting basic functions demo");

    println!("{}", banner("🚀 BASIC FUNCTION EXAMPLES"));

    println!("{}", section(1, "Simple function"));
    println!("{}", greeting());

    println!("{}", section(2, "Function with parameters"));
    for name in ["Ana", "Carlos"] {
        println!("{}", greet_person(name));
    }

    println!("{}", section(3, "Function with a return value"));
    println!("15 + 25 = {}", add(15, 25));

    println!("{}", section(4, "Function with several parameter types"));
    println!("{}", describe_user("María", 28, true));

    println!("{}", section(5, "Function with multiple returns"));
    match divide(10.0, 3.0) {
        Ok(quotient) => println!("10 / 3 = {:.2}", quotient),
        Err(e) => println!("{}", error_line(&e)),
    }
    if let Err(e) = divide(10.0, 0.0) {
        println!("❌ Expected error: {}", e);
    }

    println!("{}", section(6, "Named return values"));
    let summary = analyze_text("Hello world\nThis is an example\nOf multiple lines");
    println!(
        "Analyzed text: {} words, {} characters, {} lines",
        summary.words, summary.characters, summary.lines
    );

    println!("{}", section(7, "Function with validation"));
    for age in [-5, 10, 25, 70] {
        match classify_age(age) {
            Ok(group) => println!("Age {}: {}", age, group),
            Err(e) => println!("Age {}: ❌ {}", age, e),
        }
    }

    println!("{}", section(8, "Discount calculation"));
    let products = [
        Product::new(Money::from_major_minor(100, 0), "premium", true),
        Product::new(Money::from_major_minor(50, 0), "regular", false),
        Product::new(Money::from_major_minor(25, 0), "basico", true),
        Product::new(Money::from_major_minor(200, 0), "vip", false),
        Product::new(Money::zero(), "premium", false),
    ];
    for (i, product) in products.iter().enumerate() {
        match product.quote() {
            Ok(quote) => println!(
                "Product {}: {} → {} ({})",
                i + 1,
                quote.original_price,
                quote.final_price,
                quote.reason
            ),
            Err(e) => println!("Product {}: ❌ {}", i + 1, e),
        }
    }

    println!("{}", section(9, "User validation"));
    let users = [
        User::new("Juan Pérez", "juan@email.com", 30),
        User::new("", "invalid@", 25),
        User::new("María García", "maria@company.com", -5),
        User::new("Pedro López", "pedro@test.com.ar", 45),
    ];
    for (i, user) in users.iter().enumerate() {
        match user.validate() {
            Ok(()) => println!("User {}: ✅ Valid - {}", i + 1, user.name),
            Err(e) => println!("User {}: ❌ {}", i + 1, e),
        }
    }

    println!("{}", section(10, "Guaranteed cleanup (resource handling)"));
    let stdout = io::stdout();
    for file in ["datos.txt", "config.json", "error.txt", "backup.sql"] {
        println!("\n📋 Processing: {}", file);
        let result = process_resource(file, settings.resource_delay, &mut stdout.lock());
        if let Err(e) = result {
            info!(file, error = %e, "Resource processing failed");
            println!("{}", error_line(&e));
        }
    }

    println!(
        "{}",
        concepts(&[
            "Function declarations with different signatures",
            "Multiple parameters of the same and different types",
            "Single and multiple return values",
            "Named return values for clarity",
            "Explicit error handling with Result",
            "Validation and business logic",
            "Guaranteed cleanup with Drop",
        ])
    );
}
