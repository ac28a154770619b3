//! Configuration module for the Findus gateway
//!
//! Server configuration is assembled from several sources: .env files, a YAML
//! file and environment variables. Priority: YAML > ENV vars > .env values > defaults.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//! - `merge`: Merging YAML and environment configurations
//! - `validation`: Configuration validation logic
//!
//! # Example
//! ```rust,no_run
//! use findus_gateway::config::ServerConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ServerConfig::from_env()?;
//!
//! // Load from YAML file with environment variable overrides
//! let config_path = PathBuf::from("config.yaml");
//! let config = ServerConfig::from_file(&config_path)?;
//!
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::time::Duration;

mod env;
mod merge;
mod validation;
mod yaml;

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listener port, used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3000;

/// Question-answering endpoint the skill forwards questions to
pub const DEFAULT_ANSWER_API_URL: &str =
    "https://bot108.heimat24.de/apps/bot_findus-main/api/email/";

/// Outbound timeout in seconds. Alexa drops a skill response after 8 seconds,
/// so the fallback text has to be ready before that.
pub const DEFAULT_ANSWER_TIMEOUT_SECONDS: u64 = 7;

/// TLS configuration for HTTPS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsConfig {
    /// Path to the TLS certificate file (PEM format)
    pub cert_path: PathBuf,
    /// Path to the TLS private key file (PEM format)
    pub key_path: PathBuf,
}

/// Server configuration
///
/// Everything the process needs at startup: listener settings, optional TLS
/// and the question-answering endpoint. Built once and handed to
/// [`crate::server::start_server`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // TLS configuration (optional)
    pub tls: Option<TlsConfig>,

    // Answer API settings
    /// URL the `QuestionIntent` question is POSTed to
    pub answer_api_url: String,
    /// Per-request timeout for the answer API call
    pub answer_timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            tls: None,
            answer_api_url: DEFAULT_ANSWER_API_URL.to_string(),
            answer_timeout_seconds: DEFAULT_ANSWER_TIMEOUT_SECONDS,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables only
    ///
    /// The .env file is loaded in main.rs at application startup, so its values
    /// are already visible here as environment variables.
    ///
    /// # Errors
    /// Returns an error if a variable has an invalid format or validation fails.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let config = merge::merge_config(None)?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a YAML file with environment variable base
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. .env file values
    /// 4. Default values
    ///
    /// # Errors
    /// Returns an error if:
    /// - The YAML file cannot be read or is malformed
    /// - Environment variables have invalid formats
    /// - Configuration validation fails
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let yaml_config = yaml::YamlConfig::from_file(path)?;
        let config = merge::merge_config(Some(yaml_config))?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Get the server address as a string
    ///
    /// Returns the address in the format "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if TLS is enabled
    pub fn is_tls_enabled(&self) -> bool {
        self.tls.is_some()
    }

    pub fn answer_timeout(&self) -> Duration {
        Duration::from_secs(self.answer_timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    // Helper to clean up environment variables
    fn cleanup_env_vars() {
        unsafe {
            env::remove_var("HOST");
            env::remove_var("PORT");
            env::remove_var("ANSWER_API_URL");
            env::remove_var("ANSWER_TIMEOUT_SECONDS");
            env::remove_var("TLS_CERT_PATH");
            env::remove_var("TLS_KEY_PATH");
        }
    }

    #[test]
    fn test_address() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Default::default()
        };
        assert_eq!(config.address(), "127.0.0.1:8080");
        assert!(!config.is_tls_enabled());
    }

    #[test]
    fn test_answer_timeout() {
        let config = ServerConfig::default();
        assert_eq!(config.answer_timeout(), Duration::from_secs(7));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        cleanup_env_vars();

        let config = ServerConfig::from_env().unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.answer_api_url, DEFAULT_ANSWER_API_URL);
        assert_eq!(config.answer_timeout_seconds, 7);
        assert!(config.tls.is_none());

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_env_port_override() {
        cleanup_env_vars();
        unsafe {
            env::set_var("PORT", "8443");
            env::set_var("ANSWER_TIMEOUT_SECONDS", "3");
        }

        let config = ServerConfig::from_env().unwrap();

        assert_eq!(config.port, 8443);
        assert_eq!(config.answer_timeout_seconds, 3);

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        cleanup_env_vars();
        unsafe {
            env::set_var("PORT", "not-a-port");
        }

        let result = ServerConfig::from_env();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid PORT"));

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_invalid_answer_url() {
        cleanup_env_vars();
        unsafe {
            env::set_var("ANSWER_API_URL", "not a url");
        }

        let result = ServerConfig::from_env();

        assert!(result.is_err());

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_file_yaml_overrides_env() {
        cleanup_env_vars();

        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let yaml_content = r#"
server:
  host: "127.0.0.1"
  port: 8080

answer_api:
  url: "https://qa.example.com/ask"
"#;

        fs::write(&config_path, yaml_content).unwrap();

        unsafe {
            env::set_var("HOST", "10.0.0.5");
            env::set_var("ANSWER_API_URL", "https://env.example.com/ask");
            env::set_var("ANSWER_TIMEOUT_SECONDS", "4");
        }

        let config = ServerConfig::from_file(&config_path).unwrap();

        // YAML overrides ENV
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.answer_api_url, "https://qa.example.com/ask");
        // ENV value kept where YAML is silent
        assert_eq!(config.answer_timeout_seconds, 4);

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_file_missing_file() {
        cleanup_env_vars();

        let config_path = PathBuf::from("/nonexistent/config.yaml");
        let result = ServerConfig::from_file(&config_path);

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_file_with_tls() {
        cleanup_env_vars();

        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        let cert_path = temp_dir.path().join("cert.pem");
        let key_path = temp_dir.path().join("key.pem");
        fs::write(&cert_path, "fake cert").unwrap();
        fs::write(&key_path, "fake key").unwrap();

        let yaml_content = format!(
            r#"
server:
  tls:
    enabled: true
    cert_path: "{}"
    key_path: "{}"
"#,
            cert_path.display(),
            key_path.display()
        );

        fs::write(&config_path, yaml_content).unwrap();

        let config = ServerConfig::from_file(&config_path).unwrap();

        assert!(config.is_tls_enabled());
        let tls = config.tls.unwrap();
        assert_eq!(tls.cert_path, cert_path);
        assert_eq!(tls.key_path, key_path);

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_file_zero_timeout_rejected() {
        cleanup_env_vars();

        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(
            &config_path,
            r#"
answer_api:
  timeout_seconds: 0
"#,
        )
        .unwrap();

        let result = ServerConfig::from_file(&config_path);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));

        cleanup_env_vars();
    }
}
