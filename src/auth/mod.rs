pub mod data;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use url::Url;

use crate::config::{validate_token_ttl, Config, ConfigError, DomainSource};
use crate::error::{BridgeError, Result};
use crate::models::{DomainId, Role, TokenOptions, TokenPayload};

pub use data::{parse_identity, DataIdentity, MAX_DATA_LEN};

/// Self-signed meeting token minter.
///
/// No network I/O: the output depends only on the inputs and the clock.
#[derive(Debug, Clone)]
pub struct TokenMinter {
    domain_source: DomainSource,
    default_ttl_seconds: i64,
}

impl TokenMinter {
    pub fn new(config: &Config) -> std::result::Result<Self, ConfigError> {
        Self::with_policy(config.domain_source, config.default_token_ttl_seconds)
    }

    /// Fails unless `default_ttl_seconds` is positive and at most one year
    pub fn with_policy(
        domain_source: DomainSource,
        default_ttl_seconds: i64,
    ) -> std::result::Result<Self, ConfigError> {
        Ok(Self {
            domain_source,
            default_ttl_seconds: validate_token_ttl(default_ttl_seconds)?,
        })
    }

    /// Build and sign a meeting token for `room_url`
    pub fn mint(
        &self,
        api_key: &str,
        room_url: &str,
        options: Option<&TokenOptions>,
        precomputed: Option<TokenPayload>,
    ) -> Result<String> {
        self.mint_at(api_key, room_url, options, precomputed, Utc::now().timestamp())
    }

    /// Same as [`mint`](Self::mint) with an explicit clock
    pub fn mint_at(
        &self,
        api_key: &str,
        room_url: &str,
        options: Option<&TokenOptions>,
        precomputed: Option<TokenPayload>,
        now: i64,
    ) -> Result<String> {
        let payload = self.build_payload(room_url, options, precomputed, now)?;
        sign(&payload, api_key)
    }

    /// Fill in whatever `precomputed` leaves unset.
    ///
    /// Fields already set in `precomputed` are never replaced by values
    /// derived from `options`.
    pub fn build_payload(
        &self,
        room_url: &str,
        options: Option<&TokenOptions>,
        precomputed: Option<TokenPayload>,
        now: i64,
    ) -> Result<TokenPayload> {
        let mut payload = precomputed.unwrap_or_default();

        if payload.r.is_empty() {
            payload.r = room_name_from_url(room_url)?;
        }

        if payload.d.is_empty() {
            payload.d = match self.domain_source {
                DomainSource::FromOption => options
                    .and_then(|o| o.domain_id.clone())
                    .map(DomainId::into_inner)
                    .filter(|d| !d.is_empty())
                    .ok_or(BridgeError::MissingDomainIdentifier)?,
                DomainSource::FromSubdomain => domain_from_subdomain(room_url)?,
            };
        }

        if payload.exp == 0 {
            payload.exp = match options.and_then(|o| o.expire_time) {
                Some(exp) => exp,
                None => now
                    .checked_add(self.default_ttl_seconds)
                    .ok_or(BridgeError::InvalidExpiration(now))?,
            };
        }
        if payload.exp <= 0 {
            return Err(BridgeError::InvalidExpiration(payload.exp));
        }

        if options.and_then(|o| o.role) == Some(Role::Moderator) {
            payload.o = true;
        }

        if payload.iat == 0 {
            payload.iat = now;
        }

        if let Some(data) = options.and_then(|o| o.data.as_deref()) {
            let len = data.chars().count();
            if len > MAX_DATA_LEN {
                return Err(BridgeError::DataTooLarge {
                    len,
                    max: MAX_DATA_LEN,
                });
            }

            let identity = parse_identity(data);
            payload.otcd.get_or_insert_with(|| data.to_string());
            if let Some(username) = identity.username {
                payload.u.get_or_insert(username);
            }
            if let Some(user_id) = identity.user_id {
                payload.ud.get_or_insert(user_id);
            }
        }

        Ok(payload)
    }
}

/// Sign `payload` as an HS256 JWT with `secret`
pub fn sign(payload: &TokenPayload, secret: &str) -> Result<String> {
    if secret.is_empty() {
        return Err(BridgeError::TokenSigning(
            "signing secret must not be empty".to_string(),
        ));
    }

    let token = encode(
        &Header::default(),
        payload,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

/// Verify the signature with `secret` and return the claims.
/// Expiry is not checked.
pub fn decode_payload(token: &str, secret: &str) -> Result<TokenPayload> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data = decode::<TokenPayload>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| BridgeError::InvalidToken(e.to_string()))?;

    Ok(data.claims)
}

/// Read the claims without verifying the signature
pub fn peek_payload(token: &str) -> Result<TokenPayload> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data = decode::<TokenPayload>(token, &DecodingKey::from_secret(&[]), &validation)
        .map_err(|e| BridgeError::InvalidToken(e.to_string()))?;

    Ok(data.claims)
}

/// URL path with the leading separator stripped
pub fn room_name_from_url(room_url: &str) -> Result<String> {
    let url = Url::parse(room_url)?;
    let path = url.path();
    let name = path.strip_prefix('/').unwrap_or(path);

    if name.is_empty() {
        return Err(BridgeError::MalformedRoomUrl(format!(
            "{} has no room name",
            room_url
        )));
    }
    Ok(name.to_string())
}

/// First label of a `<domain>.<provider>.<tld>` host
pub fn domain_from_subdomain(room_url: &str) -> Result<String> {
    let url = Url::parse(room_url)?;
    let host = url.host_str().unwrap_or_default();

    match host.split('.').collect::<Vec<_>>().as_slice() {
        [domain, _, _] if !domain.is_empty() => Ok(domain.to_string()),
        _ => Err(BridgeError::MalformedRoomUrl(format!(
            "expected a host with exactly three labels, got {:?}",
            host
        ))),
    }
}
