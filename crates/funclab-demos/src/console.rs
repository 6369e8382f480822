//! Console formatting shared by both demo binaries.

use std::fmt::Display;

const SECTION_MARKERS: [&str; 10] = [
    "1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣", "🔟",
];

/// Title line followed by a rule of `=`.
pub fn banner(title: &str) -> String {
    format!("{}\n{}", title, "=".repeat(46))
}

/// Numbered section header, preceded by a blank line.
///
/// Sections past ten fall back to a plain `N.` marker.
pub fn section(number: usize, title: &str) -> String {
    let marker = number
        .checked_sub(1)
        .and_then(|i| SECTION_MARKERS.get(i))
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("{}.", number));
    format!("\n{} {}:", marker, title)
}

/// Failure line for an error caught at the call site.
pub fn error_line(err: &impl Display) -> String {
    format!("❌ Error: {}", err)
}

/// Closing bullet list.
pub fn concepts(items: &[&str]) -> String {
    let mut out = String::from("\n🎯 CONCEPTS DEMONSTRATED:");
    for item in items {
        out.push_str("\n✅ ");
        out.push_str(item);
    }
    out
}
