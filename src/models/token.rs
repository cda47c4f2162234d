use std::fmt;

use serde::{Deserialize, Serialize};

/// Legacy participant role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Subscriber,
    Publisher,
    Moderator,
}

/// Account-scoped domain identifier required in every claim set
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainId(String);

impl DomainId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DomainId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DomainId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Token options in the legacy API's shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenOptions {
    #[serde(default)]
    pub role: Option<Role>,
    /// `key=value` pairs joined by `&` or `;`
    #[serde(default)]
    pub data: Option<String>,
    /// Unix seconds
    #[serde(default)]
    pub expire_time: Option<i64>,
    #[serde(default, rename = "domainID")]
    pub domain_id: Option<DomainId>,
}

impl TokenOptions {
    pub fn for_domain(domain_id: impl Into<DomainId>) -> Self {
        Self {
            domain_id: Some(domain_id.into()),
            ..Default::default()
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_expire_time(mut self, exp: i64) -> Self {
        self.expire_time = Some(exp);
        self
    }
}

/// Self-signed meeting token claims.
///
/// Empty strings, zero timestamps and `false` count as "not set" when a
/// partially filled payload is handed to the minter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Room name
    #[serde(default)]
    pub r: String,
    /// Domain identifier
    #[serde(default)]
    pub d: String,
    #[serde(default)]
    pub exp: i64,
    /// Room owner
    #[serde(default)]
    pub o: bool,
    #[serde(default)]
    pub iat: i64,
    /// User name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u: Option<String>,
    /// User id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ud: Option<String>,
    /// Legacy connection data, echoed verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otcd: Option<String>,
}
