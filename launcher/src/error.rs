use std::error::Error;
use std::ffi::NulError;
use std::fmt::{self, Display};
#[cfg(unix)]
use std::io;

#[cfg(unix)]
pub use nix::errno::Errno;

/// Why the process image could not be replaced.
///
/// Every variant ends up in the same `<argv0>: exec failed: <reason>` line,
/// so `Display` renders the bare libc `strerror` text only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    /// `execve` returned.
    #[cfg(unix)]
    Exec(Errno),
    /// An argument or environment entry carried an interior NUL byte.
    Nul,
    /// No process image replacement on this platform.
    Unsupported,
}

impl LaunchError {
    /// The errno this failure corresponds to, if the platform has one.
    #[cfg(unix)]
    pub fn errno(&self) -> Errno {
        match self {
            LaunchError::Exec(errno) => *errno,
            LaunchError::Nul => Errno::EINVAL,
            LaunchError::Unsupported => Errno::ENOSYS,
        }
    }
}

impl Display for LaunchError {
    #[cfg(unix)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&strerror(self.errno()))
    }

    #[cfg(not(unix))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::Nul => f.write_str("Invalid argument"),
            LaunchError::Unsupported => f.write_str("Function not implemented"),
        }
    }
}

impl Error for LaunchError {}

/// libc's description of `errno`. nix's own table wording differs for some
/// values (ELOOP among them).
#[cfg(unix)]
fn strerror(errno: Errno) -> String {
    let code = errno as i32;
    let text = io::Error::from_raw_os_error(code).to_string();
    match text.strip_suffix(&format!(" (os error {})", code)) {
        Some(reason) => reason.to_string(),
        None => text,
    }
}

impl From<NulError> for LaunchError {
    fn from(_: NulError) -> Self {
        LaunchError::Nul
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn exec_failure_renders_strerror_text() {
        assert_eq!(
            LaunchError::Exec(Errno::ENOENT).to_string(),
            "No such file or directory"
        );
        assert_eq!(
            LaunchError::Exec(Errno::EACCES).to_string(),
            "Permission denied"
        );
    }

    // nix's table says "Too many symbolic links encountered" here
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn symlink_loop_uses_libc_wording() {
        assert_eq!(
            LaunchError::Exec(Errno::ELOOP).to_string(),
            "Too many levels of symbolic links"
        );
    }

    #[cfg(unix)]
    #[test]
    fn reason_has_no_os_error_suffix() {
        for errno in [Errno::ENOENT, Errno::ELOOP, Errno::ENOEXEC, Errno::E2BIG] {
            let reason = LaunchError::Exec(errno).to_string();
            assert!(!reason.contains("os error"), "{reason}");
            assert!(!reason.is_empty());
        }
    }

    #[test]
    fn nul_error_maps_to_invalid_argument() {
        let err: LaunchError = std::ffi::CString::new("a\0b").unwrap_err().into();
        assert_eq!(err, LaunchError::Nul);
        assert_eq!(err.to_string(), "Invalid argument");
    }
}
