//! # funclab-demos
//!
//! Support code for the two demonstration binaries.
//!
//! ## Startup Sequence (both binaries)
//! 1. Initialize tracing (diagnostics on stderr)
//! 2. Load [`DemoSettings`] from the environment
//! 3. Run the numbered demonstrations, printing to stdout
//! 4. Print the concepts summary

pub mod console;
pub mod settings;

pub use settings::DemoSettings;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter used when `RUST_LOG` is unset.
pub const LOG_FILTER_VAR: &str = "FUNCLAB_LOG";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages from the helpers
/// - `RUST_LOG=funclab_core=trace` - Trace the core crate only
/// - `FUNCLAB_LOG=info` - Fallback filter when `RUST_LOG` is unset
/// - Default: `warn`
///
/// Events go to stderr so they never interleave with the demo output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_FILTER_VAR))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
