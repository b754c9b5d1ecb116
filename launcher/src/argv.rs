use std::ffi::{OsStr, OsString};

/// Argument vector for the shell: `[argv0, script, argv1, ..., argvN-1]`.
///
/// The program name stays the launcher's own argv[0] rather than the
/// shell's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    args: Vec<OsString>,
}

impl CommandLine {
    /// `original` is the launcher's full argv, argv[0] included.
    pub fn new(original: &[OsString], script_path: &str) -> Self {
        let mut args = Vec::with_capacity(original.len() + 1);
        args.push(program_name(original).to_os_string());
        args.push(OsString::from(script_path));
        args.extend(original.iter().skip(1).cloned());
        Self { args }
    }

    pub fn program(&self) -> &OsStr {
        &self.args[0]
    }

    pub fn script(&self) -> &OsStr {
        &self.args[1]
    }

    /// Caller arguments forwarded after the script path.
    pub fn forwarded(&self) -> &[OsString] {
        &self.args[2..]
    }

    pub fn as_slice(&self) -> &[OsString] {
        &self.args
    }
}

/// argv[0], or an empty name when the launcher was started with no argv.
///
/// With argc == 0 the shell still gets `["", script]`; the C launcher passed
/// a NULL argv[0] there, leaving bash with an empty argv.
pub fn program_name(original: &[OsString]) -> &OsStr {
    original.first().map(OsString::as_os_str).unwrap_or_default()
}
