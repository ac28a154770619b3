use std::path::PathBuf;

use super::env::EnvConfig;
use super::yaml::YamlConfig;
use super::{ServerConfig, TlsConfig};

/// Build the final configuration: defaults, then environment, then YAML.
pub fn merge_config(yaml: Option<YamlConfig>) -> Result<ServerConfig, Box<dyn std::error::Error>> {
    let env = EnvConfig::load()?;
    let mut config = ServerConfig::default();

    // Environment layer
    if let Some(host) = env.host {
        config.host = host;
    }
    if let Some(port) = env.port {
        config.port = port;
    }
    if let Some(url) = env.answer_api_url {
        config.answer_api_url = url;
    }
    if let Some(timeout) = env.answer_timeout_seconds {
        config.answer_timeout_seconds = timeout;
    }
    config.tls = match (env.tls_cert_path, env.tls_key_path) {
        (Some(cert_path), Some(key_path)) => Some(TlsConfig {
            cert_path,
            key_path,
        }),
        (None, None) => None,
        _ => return Err("TLS_CERT_PATH and TLS_KEY_PATH must be set together".into()),
    };

    let Some(yaml) = yaml else {
        return Ok(config);
    };

    // YAML layer
    if let Some(server) = yaml.server {
        if let Some(host) = server.host {
            config.host = host;
        }
        if let Some(port) = server.port {
            config.port = port;
        }
        if let Some(tls) = server.tls {
            match tls.enabled {
                Some(false) => config.tls = None,
                _ => {
                    if let (Some(cert), Some(key)) = (tls.cert_path, tls.key_path) {
                        config.tls = Some(TlsConfig {
                            cert_path: PathBuf::from(cert),
                            key_path: PathBuf::from(key),
                        });
                    } else if tls.enabled == Some(true) {
                        return Err(
                            "server.tls.enabled requires both cert_path and key_path".into()
                        );
                    }
                }
            }
        }
    }

    if let Some(answer_api) = yaml.answer_api {
        if let Some(url) = answer_api.url {
            config.answer_api_url = url;
        }
        if let Some(timeout) = answer_api.timeout_seconds {
            config.answer_timeout_seconds = timeout;
        }
    }

    Ok(config)
}
