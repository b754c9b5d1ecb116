use std::env;
use std::ffi::OsString;
use std::process::ExitCode;

use servertools_launcher::{init_tracing, Launcher};

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<OsString> = env::args_os().collect();
    Launcher::default().run(&args)
}
