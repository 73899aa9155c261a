use std::env;

/// Longest accepted token lifetime (one year).
pub const MAX_TOKEN_EXPIRY_SECONDS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Public key identifier handed to clients as `apiKey`.
    pub api_key: String,
    /// HS256 secret shared with the video provider.
    pub api_secret: String,
    /// `None` issues tokens without an `exp` claim.
    pub token_expiry_seconds: Option<u64>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str, err: ConfigError| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(err)
        };

        let api_key = required("STREAM_API_KEY", ConfigError::MissingApiKey)?;
        let api_secret = required("STREAM_API_SECRET", ConfigError::MissingApiSecret)?;

        let server_port = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .unwrap_or_else(|| "5000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let token_expiry_seconds = match lookup("TOKEN_EXPIRY_SECONDS")
            .unwrap_or_else(|| "3600".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTokenExpiry)?
        {
            0 => None,
            secs if secs > MAX_TOKEN_EXPIRY_SECONDS => {
                return Err(ConfigError::InvalidTokenExpiry)
            }
            secs => Some(secs),
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Config {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port,
            api_key,
            api_secret,
            token_expiry_seconds,
            log_format,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid server port")]
    InvalidPort,
    #[error("TOKEN_EXPIRY_SECONDS must be an integer between 0 and 31536000")]
    InvalidTokenExpiry,
    #[error("STREAM_API_KEY environment variable is required")]
    MissingApiKey,
    #[error("STREAM_API_SECRET environment variable is required")]
    MissingApiSecret,
}
