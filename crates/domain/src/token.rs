//! Access tokens issued by an OAuth provider

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Grant presented to a provider's token endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenGrant {
    /// Authorization code returned to the redirect URI.
    AuthorizationCode {
        /// The code.
        code: String,
    },
    /// Refresh token from an earlier exchange.
    RefreshToken {
        /// The refresh token.
        refresh_token: String,
    },
}

impl TokenGrant {
    /// Value of the `grant_type` parameter.
    #[must_use]
    pub const fn grant_type(&self) -> &'static str {
        match self {
            Self::AuthorizationCode { .. } => "authorization_code",
            Self::RefreshToken { .. } => "refresh_token",
        }
    }
}

/// Access token with metadata for expiry tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// The access token string
    pub access_token: String,
    /// Token type (GitHub answers "bearer")
    pub token_type: String,
    /// When the token expires (if known)
    pub expires_at: Option<DateTime<Utc>>,
    /// Refresh token for obtaining new access tokens
    pub refresh_token: Option<String>,
    /// Scopes granted by this token
    #[serde(default)]
    pub scopes: Vec<String>,
    /// When this token was obtained
    pub obtained_at: DateTime<Utc>,
}

impl AccessToken {
    /// Create a new token with current timestamp.
    ///
    /// An `expires_in_secs` too large to represent as a timestamp leaves
    /// `expires_at` unset.
    #[must_use]
    pub fn new(
        access_token: String,
        token_type: String,
        expires_in_secs: Option<u64>,
        refresh_token: Option<String>,
        scopes: Vec<String>,
    ) -> Self {
        let now = Utc::now();
        let expires_at = expires_in_secs
            .and_then(|secs| i64::try_from(secs).ok())
            .and_then(TimeDelta::try_seconds)
            .and_then(|delta| now.checked_add_signed(delta));

        Self {
            access_token,
            token_type,
            expires_at,
            refresh_token,
            scopes,
            obtained_at: now,
        }
    }

    /// Check if the token can be refreshed.
    #[must_use]
    pub const fn can_refresh(&self) -> bool {
        self.refresh_token.is_some()
    }

    /// Value for an `Authorization` header in GitHub's `token` scheme.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("token {}", self.access_token)
    }
}
