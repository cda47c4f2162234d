use crate::config::ConfigError;
use crate::models::LegacyOperation;

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("failed to create room: {0}")]
    RoomCreation(String),

    #[error("failed to get domain ID: {0}")]
    DomainResolution(String),

    #[error("malformed room URL: {0}")]
    MalformedRoomUrl(String),

    #[error("token options or a precomputed payload must supply a domain identifier")]
    MissingDomainIdentifier,

    #[error("invalid expire time provided, expiry must be a UNIX timestamp: {0}")]
    InvalidExpiration(i64),

    #[error("token data must have a maximum length of {max}, got {len}")]
    DataTooLarge { len: usize, max: usize },

    #[error("failed to create self-signed token: {0}")]
    TokenSigning(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("{0} is not supported")]
    NotSupported(LegacyOperation),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl BridgeError {
    /// True for the distinguished "legacy method not implemented" outcome
    pub fn is_not_supported(&self) -> bool {
        matches!(self, BridgeError::NotSupported(_))
    }
}

impl From<jsonwebtoken::errors::Error> for BridgeError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        BridgeError::TokenSigning(err.to_string())
    }
}

impl From<url::ParseError> for BridgeError {
    fn from(err: url::ParseError) -> Self {
        BridgeError::MalformedRoomUrl(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
