use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SignInError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Google,
}

impl Provider {
    /// Identifier the auth server knows the provider by.
    pub fn id(&self) -> &'static str {
        match self {
            Provider::Google => "google",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Google => "Google",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Provider {
    type Err = SignInError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(Provider::Google),
            other => Err(SignInError::UnknownProvider(other.to_string())),
        }
    }
}

/// One entry of the `/api/auth/providers` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub signin_url: String,
    pub callback_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_provider_ids_case_insensitively() {
        assert_eq!("google".parse::<Provider>().ok(), Some(Provider::Google));
        assert_eq!(" Google ".parse::<Provider>().ok(), Some(Provider::Google));
        assert!(matches!(
            "github".parse::<Provider>(),
            Err(SignInError::UnknownProvider(id)) if id == "github"
        ));
    }

    #[test]
    fn provider_listing_deserializes() {
        let raw = r#"{
            "id": "google",
            "name": "Google",
            "type": "oauth",
            "signinUrl": "http://localhost:3000/api/auth/signin/google",
            "callbackUrl": "http://localhost:3000/api/auth/callback/google"
        }"#;
        let info: ProviderInfo = serde_json::from_str(raw).expect("provider info");
        assert_eq!(info.id, Provider::Google.id());
        assert_eq!(info.kind, "oauth");
    }
}
