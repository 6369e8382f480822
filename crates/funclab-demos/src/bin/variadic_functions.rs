//! # Variadic Functions Demo
//!
//! Helpers that accept zero or more values: sums, greetings, log lines,
//! statistics, joins, field checks, SQL strings, folds, pipelines and a
//! report built from section callbacks.
//!
//! ## Usage
//! ```bash
//! cargo run -p funclab-demos --bin variadic_functions
//! ```

use funclab_core::{
    apply_pipeline, build_sql, check_fields, generate_report, greet_with_messages, join,
    log_line, operate, statistics, sum, CoreResult, SqlOperation,
};
use funclab_demos::console::{banner, concepts, error_line, section};
use funclab_demos::init_tracing;
use tracing::{debug, info};

fn main() {
    init_tracing();
    info!("Starting variadic functions demo");

    println!("{}", banner("🔢 VARIADIC FUNCTION EXAMPLES"));

    println!("{}", section(1, "Variadic sum"));
    println!("No numbers: {}", sum(&[]));
    println!("One number: {}", sum(&[5]));
    println!("Several numbers: {}", sum(&[1, 2, 3, 4, 5]));
    let numbers = vec![10, 20, 30, 40, 50];
    println!("From a vector: {}", sum(&numbers));

    println!("{}", section(2, "Greetings with messages"));
    println!("{}", greet_with_messages("Ana", &[]));
    println!("{}", greet_with_messages("Carlos", &["Welcome!"]));
    println!(
        "{}",
        greet_with_messages("María", &["Happy birthday", "Have a great day", "🎉"])
    );

    println!("{}", section(3, "Logging"));
    println!("{}", log_line("info", format_args!("User {} logged in", "juan.perez")));
    println!(
        "{}",
        log_line("warning", format_args!("{} attempts left for user {}", 2, "ana.garcia"))
    );
    println!(
        "{}",
        log_line("error", format_args!("Database connection failed: {}", "timeout"))
    );

    println!("{}", section(4, "Statistics"));
    let data = [1.5, 2.8, 3.2, 1.9, 4.1, 2.3, 3.7];
    println!("Data: {:?}", data);
    println!("{}", statistics(&data));
    println!("No data: {}", statistics(&[]));

    println!("{}", section(5, "Joining"));
    println!("With commas: {}", join(", ", &["apple", "banana", "orange"]));
    println!("With dashes: {}", join(" - ", &["One", "Two", "Three"]));
    println!("No elements: '{}'", join(", ", &[]));

    println!("{}", section(6, "Field validation"));
    for (i, fields) in [
        ["Juan", "juan@email.com", "123456789"],
        ["María", "", "987654321"],
    ]
    .iter()
    .enumerate()
    {
        let check = check_fields(fields);
        println!(
            "Fields {} valid: {}, errors: {:?}",
            i + 1,
            check.valid,
            check.empty_fields
        );
    }

    println!("{}", section(7, "SQL query builder"));
    let queries: [(&str, &str, &[&str]); 4] = [
        ("users", "SELECT", &[]),
        ("users", "SELECT", &["age > 18", "active = true"]),
        ("products", "DELETE", &["stock = 0"]),
        ("products", "MERGE", &[]),
    ];
    for (table, verb, conditions) in queries {
        let query: CoreResult<String> = verb
            .parse::<SqlOperation>()
            .map(|operation| build_sql(table, operation, conditions));
        match query {
            Ok(sql) => println!("{}", sql),
            Err(e) => println!("{}", error_line(&e)),
        }
    }

    println!("{}", section(8, "Math operations"));
    let values = [5.0, 10.0, 15.0, 20.0, 25.0];
    for operation in ["sum", "multiplication", "maximum", "minimum", "modulo"] {
        match operate(operation, &values) {
            Ok(result) => println!("{} of {:?} = {:.2}", operation, values, result),
            Err(e) => println!("{}: ❌ {}", operation, e),
        }
    }
    if let Err(e) = operate("sum", &[]) {
        println!("sum of []: ❌ {}", e);
    }

    println!("{}", section(9, "Processing pipeline"));
    let original = [1, 2, 3, 4, 5];
    let double = |x: i64| x * 2;
    let add_one = |x: i64| x + 1;
    let square = |x: i64| x * x;

    println!("Original data: {:?}", original);
    println!("After doubling: {:?}", apply_pipeline(&original, &[&double]));
    println!("Double → +1: {:?}", apply_pipeline(&original, &[&double, &add_one]));
    println!(
        "Double → +1 → ²: {:?}",
        apply_pipeline(&original, &[&double, &add_one, &square])
    );

    println!("{}", section(10, "Report generator"));
    let users_section = || "Active users: 1,234\nNew users today: 56".to_string();
    let sales_section = || format!("Daily sales: ${:.2}\nTransactions: {}", 15789.50, 89);
    let stats_section =
        || "Average session time: 12 min\nMost visited pages: /home, /products".to_string();

    let report = generate_report("Daily Report", &[&users_section, &sales_section, &stats_section]);
    debug!(bytes = report.len(), "Report generated");
    println!("{}", report);

    println!(
        "{}",
        concepts(&[
            "Slice parameters in place of variadic arguments",
            "Fixed parameters combined with a variable tail",
            "Passing an existing vector as the variable tail",
            "Variable arguments of different kinds (format_args!)",
            "Practical uses: logging, validation, SQL",
            "Data processing with pipelines",
            "Dynamic content generation",
        ])
    );
}
