//! # Text Builders
//!
//! String assembly helpers taking a variable number of fragments.
//!
//! ## SQL Builder Limitation
//! `build_sql` pastes the table name and conditions verbatim. There is no
//! parameterization and no escaping; it produces display strings for the
//! demo and must never be fed untrusted input.

use chrono::{Local, NaiveDateTime, NaiveTime};
use std::fmt;

use crate::types::SqlOperation;

// =============================================================================
// Joining & Greeting
// =============================================================================

/// Joins fragments with a separator. No fragments → empty string.
///
/// ## Example
/// ```rust
/// use funclab_core::text::join;
///
/// assert_eq!(join(", ", &[]), "");
/// assert_eq!(join(", ", &["a", "b"]), "a, b");
/// ```
pub fn join(separator: &str, parts: &[&str]) -> String {
    parts.join(separator)
}

/// Greets `name` and lists any extra messages, numbered from 1.
pub fn greet_with_messages(name: &str, messages: &[&str]) -> String {
    let mut out = format!("👋 Hello {}!\n", name);

    if messages.is_empty() {
        out.push_str("   (No additional messages)");
        return out;
    }

    out.push_str("   Messages:");
    for (i, message) in messages.iter().enumerate() {
        out.push_str(&format!("\n   {}. {}", i + 1, message));
    }

    out
}

// =============================================================================
// Log Lines
// =============================================================================

/// Formats `[HH:MM:SS] [LEVEL] message`.
pub fn format_log_line(at: NaiveTime, level: &str, message: &str) -> String {
    format!("[{}] [{}] {}", at.format("%H:%M:%S"), level.to_uppercase(), message)
}

/// Formats a log line stamped with the current local time.
///
/// ```rust
/// use funclab_core::text::log_line;
///
/// let line = log_line("warning", format_args!("{} attempts left for {}", 2, "ana"));
/// assert!(line.ends_with("[WARNING] 2 attempts left for ana"));
/// ```
pub fn log_line(level: &str, message: fmt::Arguments<'_>) -> String {
    format_log_line(Local::now().time(), level, &message.to_string())
}

// =============================================================================
// SQL
// =============================================================================

/// Builds a SQL statement string, AND-joining any conditions.
///
/// ## Example
/// ```rust
/// use funclab_core::text::build_sql;
/// use funclab_core::types::SqlOperation;
///
/// assert_eq!(
///     build_sql("users", SqlOperation::Select, &["age > 18", "active = true"]),
///     "SELECT * FROM users WHERE age > 18 AND active = true;"
/// );
/// ```
pub fn build_sql(table: &str, operation: SqlOperation, conditions: &[&str]) -> String {
    let mut query = match operation {
        SqlOperation::Select => format!("SELECT * FROM {}", table),
        SqlOperation::Delete => format!("DELETE FROM {}", table),
        SqlOperation::Update => format!("UPDATE {} SET ", table),
    };

    if !conditions.is_empty() {
        query.push_str(" WHERE ");
        query.push_str(&conditions.join(" AND "));
    }

    query.push(';');
    query
}

// =============================================================================
// Reports
// =============================================================================

/// A report section body, produced on demand.
pub type Section<'a> = &'a dyn Fn() -> String;

/// Builds a report stamped with the current local time.
pub fn generate_report(title: &str, sections: &[Section<'_>]) -> String {
    generate_report_at(title, sections, Local::now().naive_local())
}

/// Builds a report with a boxed title, one block per section and a
/// `Generated:` footer.
///
/// ```text
/// ==================
/// | Daily Report |
/// ==================
///
/// --- Section 1 ---
/// <section text>
///
/// Generated: 19/10/2026 09:30:00
/// ```
pub fn generate_report_at(
    title: &str,
    sections: &[Section<'_>],
    generated_at: NaiveDateTime,
) -> String {
    let rule = "=".repeat(title.chars().count() + 4);
    let mut report = format!("{rule}\n| {title} |\n{rule}\n\n");

    for (i, section) in sections.iter().enumerate() {
        report.push_str(&format!("--- Section {} ---\n{}\n\n", i + 1, section()));
    }

    report.push_str(&format!(
        "Generated: {}",
        generated_at.format("%d/%m/%Y %H:%M:%S")
    ));
    report
}
