use crate::config::LauncherConfig;

/// The complete environment handed to the shell. Nothing inherited survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    vars: Vec<(String, String)>,
}

impl Environment {
    /// Template variables in order, then `<install_dir_var>=<install_dir>`.
    ///
    /// The marker carries the installation directory, not the script path.
    pub fn sanitized(config: &LauncherConfig) -> Self {
        let mut vars = config.env_template.clone();
        vars.push((config.install_dir_var.clone(), config.install_dir.clone()));
        Self { vars }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// `NAME=VALUE` entries in order, ready for `envp`.
    pub fn entries(&self) -> Vec<String> {
        self.vars
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_env_has_exactly_four_entries_in_order() {
        let config = LauncherConfig::with_install_dir("/opt/dst");
        let env = Environment::sanitized(&config);

        assert_eq!(
            env.entries(),
            vec![
                "PATH=/bin:/usr/bin",
                "USER=lsstsw",
                "SHELL=bash",
                "DEVENV_SERVERTOOLS_DIR=/opt/dst",
            ]
        );
    }

    #[test]
    fn marker_is_install_dir_not_script_path() {
        let config = LauncherConfig::with_install_dir("/opt/dst");
        let env = Environment::sanitized(&config);

        assert_eq!(env.get("DEVENV_SERVERTOOLS_DIR"), Some("/opt/dst"));
        assert_ne!(
            env.get("DEVENV_SERVERTOOLS_DIR"),
            Some(config.script_path().as_str())
        );
    }
}
