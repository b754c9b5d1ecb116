use std::convert::Infallible;
use std::ffi::OsString;

use crate::error::LaunchError;

/// No process image replacement outside unix.
pub fn exec(_shell: &str, _argv: &[OsString], _envp: &[String]) -> Result<Infallible, LaunchError> {
    Err(LaunchError::Unsupported)
}
