//! Authentication modes for generated clients.
//!
//! The auth mode selects which configuration attributes the generated
//! client exposes and how credentials are attached to outgoing requests.

use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};

/// Authentication mode of the target API.
///
/// Parsed case-insensitively from the `auth_type` configuration key. Any
/// unrecognised value (and an explicit `null`) falls back to [`AuthType::None`]
/// so that a typo produces an unauthenticated client rather than a failed run.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use clientsmith_define::AuthType;
///
/// assert_eq!(AuthType::from_str("api_key").unwrap(), AuthType::ApiKey);
/// assert_eq!(AuthType::Oauth.to_string(), "oauth");
/// assert_eq!(AuthType::from(Some("bearer-ish".to_string())), AuthType::None);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(from = "Option<String>")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AuthType {
    /// No credentials are attached.
    #[default]
    None,
    /// HTTP Basic authentication (`username` / `password`).
    Basic,
    /// A static key sent in a configurable header.
    ApiKey,
    /// OAuth client-credentials flow with a bearer token.
    Oauth,
}

impl AuthType {
    /// Returns `true` when the generated client attaches credentials.
    pub fn is_authenticated(self) -> bool {
        self != AuthType::None
    }
}

impl From<Option<String>> for AuthType {
    fn from(value: Option<String>) -> Self {
        let Some(raw) = value else {
            return AuthType::None;
        };

        raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(auth_type = %raw, "unknown auth_type, generating an unauthenticated client");
            AuthType::None
        })
    }
}
