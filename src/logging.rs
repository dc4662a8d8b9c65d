//! Tracing setup
//!
//! CLI commands log to stderr. The TUI owns the terminal, so it logs to a file
//! instead. `RUST_LOG` overrides the verbosity flags.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Filter directive for a `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "finorden_cli=warn",
        1 => "finorden_cli=info",
        _ => "finorden_cli=debug",
    }
}

/// Install the global subscriber; later calls are no-ops
pub fn init_tracing(verbosity: u8, target: LogTarget) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        let result = match target {
            LogTarget::Stderr => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            LogTarget::File(path) => {
                match OpenOptions::new().create(true).append(true).open(&path) {
                    Ok(file) => fmt()
                        .with_env_filter(filter)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .try_init(),
                    // Nowhere safe to write; stay silent rather than draw over the UI
                    Err(_) => return,
                }
            }
        };

        if let Err(e) = result {
            eprintln!("Warning: could not initialize logging: {}", e);
        }
    });
}
