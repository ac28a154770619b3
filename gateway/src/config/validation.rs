use super::ServerConfig;

/// Validate the merged configuration before the server starts.
pub fn validate(config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    validate_answer_api_url(&config.answer_api_url)?;
    validate_answer_timeout(config.answer_timeout_seconds)?;
    if let Some(tls) = &config.tls {
        if !tls.cert_path.exists() {
            return Err(format!(
                "TLS certificate file not found: {}",
                tls.cert_path.display()
            )
            .into());
        }
        if !tls.key_path.exists() {
            return Err(format!("TLS key file not found: {}", tls.key_path.display()).into());
        }
    }
    Ok(())
}

pub fn validate_answer_api_url(raw: &str) -> Result<(), Box<dyn std::error::Error>> {
    let url = url::Url::parse(raw).map_err(|e| format!("Invalid answer API URL '{raw}': {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("Answer API URL scheme must be http or https, got: {other}").into()),
    }
}

pub fn validate_answer_timeout(seconds: u64) -> Result<(), Box<dyn std::error::Error>> {
    if seconds == 0 {
        return Err("Answer API timeout must be at least 1 second".into());
    }
    Ok(())
}
