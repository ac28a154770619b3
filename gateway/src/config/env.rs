use std::path::PathBuf;

/// Raw values read from the process environment
///
/// Empty variables are treated as unset so that `PORT=` in a .env file falls
/// back to the default instead of failing to parse.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub tls_cert_path: Option<PathBuf>,
    pub tls_key_path: Option<PathBuf>,
    pub answer_api_url: Option<String>,
    pub answer_timeout_seconds: Option<u64>,
}

impl EnvConfig {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            host: read_var("HOST"),
            port: read_var("PORT")
                .map(|value| {
                    value
                        .parse::<u16>()
                        .map_err(|e| format!("Invalid PORT value '{value}': {e}"))
                })
                .transpose()?,
            tls_cert_path: read_var("TLS_CERT_PATH").map(PathBuf::from),
            tls_key_path: read_var("TLS_KEY_PATH").map(PathBuf::from),
            answer_api_url: read_var("ANSWER_API_URL"),
            answer_timeout_seconds: read_var("ANSWER_TIMEOUT_SECONDS")
                .map(|value| {
                    value.parse::<u64>().map_err(|e| {
                        format!("Invalid ANSWER_TIMEOUT_SECONDS value '{value}': {e}")
                    })
                })
                .transpose()?,
        })
    }
}

fn read_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
