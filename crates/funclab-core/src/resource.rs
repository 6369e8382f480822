//! # Scoped Resource
//!
//! Simulated file handle whose close is guaranteed by `Drop`.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ScopedResource::open("datos.txt")   → "📂 Opening file: datos.txt"    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  process(delay)                      → "📝 Processing contents of: ..." │
//! │       │                                                                 │
//! │       ├── name == "error.txt" → Err(ProcessingFailed) ──┐               │
//! │       │                                                 │               │
//! │       ▼                                                 │               │
//! │  "✅ File processed successfully: ..."                   │               │
//! │       │                                                 │               │
//! │       ▼                                                 ▼               │
//! │  drop                                → "🔒 Closing file: ..."           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Output is written to any `io::Write`, so tests can capture it in a
//! `Vec<u8>` while the demo passes stdout.

use std::io::Write;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};

/// File name that makes `process` fail.
pub const FAILING_RESOURCE: &str = "error.txt";

/// An open simulated resource. Closing happens in `Drop`.
pub struct ScopedResource<'a, W: Write> {
    name: String,
    out: &'a mut W,
}

impl<'a, W: Write> ScopedResource<'a, W> {
    /// Opens the resource and announces it.
    pub fn open(name: &str, out: &'a mut W) -> CoreResult<Self> {
        writeln!(out, "📂 Opening file: {}", name)?;
        debug!(resource = name, "Resource opened");

        Ok(ScopedResource {
            name: name.to_string(),
            out,
        })
    }

    /// Processes the contents, sleeping for `delay` to simulate work.
    pub fn process(&mut self, delay: Duration) -> CoreResult<()> {
        writeln!(self.out, "📝 Processing contents of: {}", self.name)?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }

        if self.name == FAILING_RESOURCE {
            return Err(CoreError::ProcessingFailed {
                name: self.name.clone(),
            });
        }

        writeln!(self.out, "✅ File processed successfully: {}", self.name)?;
        Ok(())
    }
}

impl<W: Write> Drop for ScopedResource<'_, W> {
    fn drop(&mut self) {
        if let Err(e) = writeln!(self.out, "🔒 Closing file: {}", self.name) {
            warn!(resource = %self.name, error = %e, "Failed to report resource close");
        }
        debug!(resource = %self.name, "Resource closed");
    }
}

/// Opens, processes and (always) closes a resource.
pub fn process_resource<W: Write>(name: &str, delay: Duration, out: &mut W) -> CoreResult<()> {
    let mut resource = ScopedResource::open(name, out)?;
    resource.process(delay)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(name: &str) -> (CoreResult<()>, String) {
        let mut out = Vec::new();
        let result = process_resource(name, Duration::ZERO, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_success_path_closes() {
        let (result, output) = run("datos.txt");
        assert!(result.is_ok());
        assert_eq!(
            output,
            "📂 Opening file: datos.txt\n\
             📝 Processing contents of: datos.txt\n\
             ✅ File processed successfully: datos.txt\n\
             🔒 Closing file: datos.txt\n"
        );
    }

    #[test]
    fn test_failure_path_still_closes() {
        let (result, output) = run("error.txt");
        assert!(matches!(
            result,
            Err(CoreError::ProcessingFailed { ref name }) if name == "error.txt"
        ));
        assert!(!output.contains("✅"));
        assert!(output.ends_with("🔒 Closing file: error.txt\n"));
    }

    #[test]
    fn test_close_happens_once_when_scope_ends() {
        let mut out = Vec::new();
        {
            let _resource = ScopedResource::open("config.json", &mut out).unwrap();
        }
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.matches("🔒 Closing file: config.json").count(), 1);
    }
}
