use std::env;
use std::str::FromStr;

/// Default backend REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.daily.co/v1";

/// Longest default token lifetime accepted (one year)
pub const MAX_TOKEN_TTL_SECONDS: i64 = 365 * 24 * 3600;

/// Where a token's domain identifier comes from when the payload does not carry one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainSource {
    /// Caller passes the resolved domain id in `TokenOptions::domain_id`
    #[default]
    FromOption,
    /// Taken from the first label of a three-label room URL host
    FromSubdomain,
}

impl FromStr for DomainSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "option" | "from_option" => Ok(DomainSource::FromOption),
            "subdomain" | "from_subdomain" => Ok(DomainSource::FromSubdomain),
            other => Err(ConfigError::InvalidDomainSource(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub api_key: String,
    pub domain_source: DomainSource,
    pub default_token_ttl_seconds: i64,
    pub request_timeout_secs: u64,
}

impl Config {
    /// Library defaults; nothing is read from the environment
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            domain_source: DomainSource::default(),
            default_token_ttl_seconds: 3600,
            request_timeout_secs: 10,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let default_token_ttl_seconds = validate_token_ttl(
            env::var("TOKEN_TTL_SECONDS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidTokenTtl)?,
        )?;
        let request_timeout_secs = validate_request_timeout(
            env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidRequestTimeout)?,
        )?;

        Ok(Config {
            api_base_url: env::var("BACKEND_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            api_key: env::var("BACKEND_API_KEY").map_err(|_| ConfigError::MissingApiKey)?,
            domain_source: env::var("DOMAIN_SOURCE")
                .map(|v| v.parse())
                .unwrap_or(Ok(DomainSource::FromOption))?,
            default_token_ttl_seconds,
            request_timeout_secs,
        })
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_domain_source(mut self, source: DomainSource) -> Self {
        self.domain_source = source;
        self
    }

    pub fn with_token_ttl(mut self, seconds: i64) -> Result<Self, ConfigError> {
        self.default_token_ttl_seconds = validate_token_ttl(seconds)?;
        Ok(self)
    }
}

/// Token lifetime must be in `1..=MAX_TOKEN_TTL_SECONDS`
pub fn validate_token_ttl(seconds: i64) -> Result<i64, ConfigError> {
    if (1..=MAX_TOKEN_TTL_SECONDS).contains(&seconds) {
        Ok(seconds)
    } else {
        Err(ConfigError::InvalidTokenTtl)
    }
}

pub fn validate_request_timeout(secs: u64) -> Result<u64, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::InvalidRequestTimeout);
    }
    Ok(secs)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BACKEND_API_KEY environment variable is required")]
    MissingApiKey,
    #[error("TOKEN_TTL_SECONDS must be positive and at most one year")]
    InvalidTokenTtl,
    #[error("REQUEST_TIMEOUT_SECS must be a positive number of seconds")]
    InvalidRequestTimeout,
    #[error("Invalid DOMAIN_SOURCE: {0} (expected \"option\" or \"subdomain\")")]
    InvalidDomainSource(String),
}
