//! Test harness: the launcher with a substitutable shell and install dir
//!
//! Usage: LAUNCH_PROBE_SHELL=<path> LAUNCH_PROBE_INSTALL_DIR=<dir> launch-probe [args...]
//!
//! Every argument is forwarded exactly as the real launcher forwards it; only
//! the configuration comes from the two variables above.

use std::env;
use std::ffi::OsString;
use std::process::ExitCode;

use servertools_launcher::{init_tracing, Launcher, LauncherConfig};

fn main() -> ExitCode {
    init_tracing();

    let mut config = LauncherConfig::default();
    if let Ok(shell) = env::var("LAUNCH_PROBE_SHELL") {
        config.shell_path = shell;
    }
    if let Ok(dir) = env::var("LAUNCH_PROBE_INSTALL_DIR") {
        config.install_dir = dir;
    }

    let args: Vec<OsString> = env::args_os().collect();
    Launcher::new(config).run(&args)
}
