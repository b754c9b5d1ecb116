use std::borrow::Cow;
use std::convert::Infallible;
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::process::ExitCode;

use tracing::{debug, warn};

use crate::argv::{program_name, CommandLine};
use crate::config::LauncherConfig;
use crate::environ::Environment;
use crate::error::LaunchError;
use crate::platform;

/// Everything `execve` needs, computed before the call.
///
/// A pure function of the configuration and the caller's argv.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    pub shell: String,
    pub command_line: CommandLine,
    pub environment: Environment,
}

#[derive(Debug, Clone)]
pub struct Launcher {
    config: LauncherConfig,
}

impl Launcher {
    pub fn new(config: LauncherConfig) -> Self {
        Self { config }
    }

    pub fn environment(&self) -> Environment {
        Environment::sanitized(&self.config)
    }

    pub fn command_line(&self, args: &[OsString]) -> CommandLine {
        CommandLine::new(args, &self.config.script_path())
    }

    pub fn prepare(&self, args: &[OsString]) -> Launch {
        Launch {
            shell: self.config.shell_path.clone(),
            command_line: self.command_line(args),
            environment: self.environment(),
        }
    }

    /// Hand the process over to the shell. Returns only on failure.
    pub fn exec(&self, args: &[OsString]) -> Result<Infallible, LaunchError> {
        let launch = self.prepare(args);
        debug!(
            shell = %launch.shell,
            script = %launch.command_line.script().to_string_lossy(),
            forwarded = launch.command_line.forwarded().len(),
            "replacing process image"
        );
        platform::exec(
            &launch.shell,
            launch.command_line.as_slice(),
            &launch.environment.entries(),
        )
    }

    /// Exec the shell; on failure print the diagnostic to stdout.
    ///
    /// A failed exec still exits 0.
    pub fn run(&self, args: &[OsString]) -> ExitCode {
        let err = match self.exec(args) {
            Ok(never) => match never {},
            Err(err) => err,
        };
        warn!(shell = %self.config.shell_path, error = %err, "exec failed");

        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(&failure_line(program_name(args), &err));
        let _ = stdout.flush();
        ExitCode::SUCCESS
    }
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new(LauncherConfig::default())
    }
}

/// `<argv0>: exec failed: <reason>\n`. argv[0] is copied byte for byte.
pub fn failure_line(program: &OsStr, err: &LaunchError) -> Vec<u8> {
    let mut line = program_bytes(program).into_owned();
    line.extend_from_slice(format!(": exec failed: {}\n", err).as_bytes());
    line
}

#[cfg(unix)]
fn program_bytes(program: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(program.as_bytes())
}

#[cfg(not(unix))]
fn program_bytes(program: &OsStr) -> Cow<'_, [u8]> {
    match program.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}
