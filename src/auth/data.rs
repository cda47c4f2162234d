//! Identity fields carried in legacy connection data.

/// Longest connection data string accepted, in characters
pub const MAX_DATA_LEN: usize = 1024;

/// Identity recovered from `username=...&uuid=...` style data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataIdentity {
    pub username: Option<String>,
    pub user_id: Option<String>,
}

/// Parse `key=value` pairs separated by `&` or `;`.
///
/// Pairs without `=` or with undecodable values are skipped.
/// The first occurrence of a key wins.
pub fn parse_identity(data: &str) -> DataIdentity {
    let mut identity = DataIdentity::default();

    for (key, value) in data
        .split(['&', ';'])
        .filter_map(|pair| pair.split_once('='))
    {
        let slot = match key.trim() {
            "username" => &mut identity.username,
            "uuid" => &mut identity.user_id,
            _ => continue,
        };
        if slot.is_some() {
            continue;
        }
        if let Ok(decoded) = urlencoding::decode(value) {
            *slot = Some(decoded.into_owned());
        }
    }

    identity
}
