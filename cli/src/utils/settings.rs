use anyhow::{Context, Result};
use authz::config::{AuthorizerConfig, ENV_PRINCIPAL_ID, ENV_REFERENCE_TOKEN, ENV_ROLES};
use std::path::{Path, PathBuf};

const OVERRIDE_VARS: [&str; 3] = [ENV_REFERENCE_TOKEN, ENV_PRINCIPAL_ID, ENV_ROLES];

/// Effective authorizer configuration and where it came from
#[derive(Debug, Clone)]
pub struct Settings {
    pub config_path: Option<PathBuf>,
    /// `AUTHORIZER_*` variables that replaced file or default values
    pub env_overrides: Vec<&'static str>,
    pub config: AuthorizerConfig,
}

impl Settings {
    /// Load the configuration file (if any) and apply `AUTHORIZER_*` overrides
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = AuthorizerConfig::load(config_path).with_context(|| match config_path {
            Some(path) => format!("Failed to load authorizer configuration from {:?}", path),
            None => "Failed to load authorizer configuration".to_string(),
        })?;

        let env_overrides = OVERRIDE_VARS
            .into_iter()
            .filter(|name| std::env::var_os(name).is_some())
            .collect();

        Ok(Self {
            config_path: config_path.map(Path::to_path_buf),
            env_overrides,
            config,
        })
    }

    /// Human readable description of the configuration source
    pub fn source_label(&self) -> String {
        let base = match &self.config_path {
            Some(path) => path.display().to_string(),
            None => "built-in defaults".to_string(),
        };

        if self.env_overrides.is_empty() {
            base
        } else {
            format!(
                "{} + environment overrides ({})",
                base,
                self.env_overrides.join(", ")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(config_path: Option<&str>, env_overrides: Vec<&'static str>) -> Settings {
        Settings {
            config_path: config_path.map(PathBuf::from),
            env_overrides,
            config: AuthorizerConfig::default(),
        }
    }

    #[test]
    fn test_source_label_defaults() {
        assert_eq!(settings(None, vec![]).source_label(), "built-in defaults");
    }

    #[test]
    fn test_source_label_file() {
        assert_eq!(
            settings(Some("/etc/fyora/authorizer.yaml"), vec![]).source_label(),
            "/etc/fyora/authorizer.yaml"
        );
    }

    #[test]
    fn test_source_label_lists_env_overrides() {
        assert_eq!(
            settings(None, vec![ENV_REFERENCE_TOKEN]).source_label(),
            "built-in defaults + environment overrides (AUTHORIZER_REFERENCE_TOKEN)"
        );
        assert_eq!(
            settings(
                Some("authorizer.yaml"),
                vec![ENV_PRINCIPAL_ID, ENV_ROLES]
            )
            .source_label(),
            "authorizer.yaml + environment overrides (AUTHORIZER_PRINCIPAL_ID, AUTHORIZER_ROLES)"
        );
    }
}
