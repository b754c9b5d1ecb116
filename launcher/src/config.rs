//! Build-time launcher configuration.
//!
//! The shipped binary only ever uses [`LauncherConfig::default`], which is
//! assembled from compile-time constants. Set `DST_INSTALL_DIR` in the build
//! environment to point the launcher at a different servertools checkout.

/// Installation directory baked in at compile time.
pub const INSTALL_DIR: &str = match option_env!("DST_INSTALL_DIR") {
    Some(dir) => dir,
    None => "/lsst/home/rplante/git/devenv_servertools",
};

/// Variable that tells the script where servertools is installed.
pub const INSTALL_DIR_VAR: &str = "DEVENV_SERVERTOOLS_DIR";

/// Script to run, relative to [`INSTALL_DIR`].
pub const SCRIPT_RELATIVE_PATH: &str = "bin/clearSubmitRelease.sh";

/// Interpreter the script is handed to.
pub const SHELL_PATH: &str = "/bin/bash";

/// Fixed variables placed ahead of the install-dir marker, in order.
pub const ENV_TEMPLATE: [(&str, &str); 3] = [
    ("PATH", "/bin:/usr/bin"),
    ("USER", "lsstsw"),
    ("SHELL", "bash"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub install_dir: String,
    pub install_dir_var: String,
    pub script_relative_path: String,
    pub shell_path: String,
    pub env_template: Vec<(String, String)>,
}

impl LauncherConfig {
    /// Default configuration with a different installation directory.
    pub fn with_install_dir(install_dir: impl Into<String>) -> Self {
        Self {
            install_dir: install_dir.into(),
            ..Self::default()
        }
    }

    /// `<install_dir>/<script_relative_path>`, joined verbatim.
    ///
    /// Duplicate or trailing slashes are left alone.
    pub fn script_path(&self) -> String {
        format!("{}/{}", self.install_dir, self.script_relative_path)
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            install_dir: INSTALL_DIR.to_string(),
            install_dir_var: INSTALL_DIR_VAR.to_string(),
            script_relative_path: SCRIPT_RELATIVE_PATH.to_string(),
            shell_path: SHELL_PATH.to_string(),
            env_template: ENV_TEMPLATE
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_compile_time_constants() {
        let config = LauncherConfig::default();
        assert_eq!(config.install_dir, INSTALL_DIR);
        assert_eq!(config.install_dir_var, "DEVENV_SERVERTOOLS_DIR");
        assert_eq!(config.shell_path, "/bin/bash");
        assert_eq!(
            config.script_path(),
            format!("{}/bin/clearSubmitRelease.sh", INSTALL_DIR)
        );
    }

    #[test]
    fn script_path_is_not_normalized() {
        let config = LauncherConfig::with_install_dir("/opt/servertools/");
        assert_eq!(config.script_path(), "/opt/servertools//bin/clearSubmitRelease.sh");

        let config = LauncherConfig::with_install_dir("");
        assert_eq!(config.script_path(), "/bin/clearSubmitRelease.sh");
    }
}
