use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Property name -> value. Entry order carries no meaning on the wire.
pub type PropertyMap = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextureModel {
    #[default]
    Default,
    Slim,
}

impl TextureModel {
    pub fn as_str(self) -> &'static str {
        match self {
            TextureModel::Default => "default",
            TextureModel::Slim => "slim",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Skin,
    Cape,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Texture {
    #[serde(default)]
    pub skin: Option<String>,
    #[serde(default)]
    pub cape: Option<String>,
    #[serde(default)]
    pub model: TextureModel,
}

impl Texture {
    pub fn url(&self, kind: TextureKind) -> Option<&str> {
        match kind {
            TextureKind::Skin => self.skin.as_deref(),
            TextureKind::Cape => self.cape.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub texture: Option<Texture>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationResult {
    pub access_token: Uuid,
    #[serde(default)]
    pub selected_profile: Option<Profile>,
    #[serde(default)]
    pub profiles: Option<Vec<Profile>>,
    #[serde(default, alias = "userid")]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub properties: Option<PropertyMap>,
}

#[derive(Debug, thiserror::Error)]
pub enum YggError {
    #[error("signing error: {0}")]
    Signing(String),
    #[error("signature verification failed: {0}")]
    Verification(String),
    #[error("key error: {0}")]
    Key(String),
    #[error("encoding error: {0}")]
    Encoding(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

/// Produces signatures over raw bytes. Implementations are shared across
/// request handlers and must tolerate concurrent calls.
pub trait SignatureService: Send + Sync {
    fn algorithm(&self) -> &str;
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, YggError>;
}

pub trait SignatureVerifier: Send + Sync {
    fn verify(&self, data: &[u8], signature: &[u8]) -> Result<(), YggError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texture_model_wire_names() {
        assert_eq!(TextureModel::Default.as_str(), "default");
        assert_eq!(TextureModel::Slim.as_str(), "slim");
        let model: TextureModel = serde_json::from_str("\"slim\"").unwrap();
        assert_eq!(model, TextureModel::Slim);
    }

    #[test]
    fn auth_result_fixture_accepts_legacy_userid() {
        let raw = serde_json::json!({
            "accessToken": "00000000-0000-0000-0000-00000000000a",
            "userid": "0000000000000000000000000000000b",
        });
        let auth: AuthenticationResult = serde_json::from_value(raw).unwrap();
        assert_eq!(auth.user_id, Some(Uuid::from_u128(0xb)));
        assert!(auth.profiles.is_none());
        assert!(auth.selected_profile.is_none());
    }

    #[test]
    fn texture_defaults_when_fields_missing() {
        let texture: Texture = serde_json::from_str("{}").unwrap();
        assert_eq!(texture, Texture::default());
        assert_eq!(texture.url(TextureKind::Skin), None);
    }
}
