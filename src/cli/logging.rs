//! Diagnostic logging for the binary.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for a `-v` count.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "folio=warn",
        1 => "folio=debug",
        _ => "folio=trace",
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides `-v`.
///
/// Logs go to stderr so `--stdout` and JSON output stay parseable.
pub fn init_logger(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A subscriber may already be installed when run() is called twice in one process.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_directive() {
        assert_eq!(default_directive(0), "folio=warn");
        assert_eq!(default_directive(1), "folio=debug");
        assert_eq!(default_directive(2), "folio=trace");
        assert_eq!(default_directive(7), "folio=trace");
    }
}
