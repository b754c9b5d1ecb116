use std::convert::Infallible;
use std::ffi::{CString, OsString};
use std::os::unix::ffi::OsStrExt;

use nix::unistd::execve;

use crate::error::LaunchError;

/// Replace the current process image.
///
/// `argv` and `envp` are converted to C strings here; nix appends the NULL
/// terminators. Returns only if the kernel refused the exec.
pub fn exec(shell: &str, argv: &[OsString], envp: &[String]) -> Result<Infallible, LaunchError> {
    let path = CString::new(shell)?;
    let argv = argv
        .iter()
        .map(|arg| CString::new(arg.as_bytes()))
        .collect::<Result<Vec<_>, _>>()?;
    let envp = envp
        .iter()
        .map(|var| CString::new(var.as_bytes()))
        .collect::<Result<Vec<_>, _>>()?;

    execve(&path, &argv, &envp).map_err(LaunchError::Exec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nix::errno::Errno;

    #[test]
    fn interior_nul_is_rejected_before_exec() {
        let argv = [OsString::from("csr"), OsString::from("a\0b")];
        assert_eq!(exec("/bin/sh", &argv, &[]), Err(LaunchError::Nul));
    }

    #[test]
    fn missing_interpreter_reports_enoent() {
        let argv = [OsString::from("csr")];
        let err = exec("/nonexistent/servertools/bash", &argv, &[]).unwrap_err();
        assert_eq!(err, LaunchError::Exec(Errno::ENOENT));
    }
}
