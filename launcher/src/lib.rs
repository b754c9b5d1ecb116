//! Launcher for the servertools `clearSubmitRelease.sh` script.
//!
//! Builds a fixed four-variable environment and execs `/bin/bash` on the
//! script, forwarding the caller's arguments untouched.

// Process image replacement is unix-only; other targets report it unsupported.
#[cfg(unix)]
#[path = "unix.rs"]
mod platform;

#[cfg(not(unix))]
#[path = "other.rs"]
mod platform;

pub mod argv;
pub mod config;
pub mod environ;
pub mod error;
mod launcher;

pub use argv::CommandLine;
pub use config::LauncherConfig;
pub use environ::Environment;
pub use error::LaunchError;
pub use launcher::{failure_line, Launch, Launcher};

use tracing_subscriber::EnvFilter;

/// Variable in the caller's environment that enables launcher tracing.
pub const LOG_ENV: &str = "CLEAR_SUBMIT_RELEASE_LOG";

/// Install a stderr subscriber. Silent unless [`LOG_ENV`] is set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
