//! JSON shapes sent to game clients. Field names are fixed by the protocol.

use serde::{Deserialize, Serialize};

/// One `{name, value, signature?}` element of a property array.
///
/// `signature` is left out entirely for unsigned properties; clients treat a
/// present-but-empty signature as a failed verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyEntry {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureEntry {
    pub url: String,
    pub metadata: Vec<PropertyEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Textures {
    #[serde(rename = "SKIN", default, skip_serializing_if = "Option::is_none")]
    pub skin: Option<TextureEntry>,
    #[serde(rename = "CAPE", default, skip_serializing_if = "Option::is_none")]
    pub cape: Option<TextureEntry>,
}

/// Decoded value of the `textures` property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TexturePayload {
    /// Milliseconds since the Unix epoch when the payload was built.
    pub timestamp: i64,
    pub profile_id: String,
    pub profile_name: String,
    pub is_public: bool,
    pub textures: Textures,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<PropertyEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<PropertyEntry>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub client_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_profile: Option<ProfileResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_profiles: Option<Vec<ProfileResponse>>,
    pub user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unsigned_entry_has_no_signature_key() {
        let entry = PropertyEntry {
            name: "model".to_string(),
            value: String::new(),
            signature: None,
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"name": "model", "value": ""})
        );
    }

    #[test]
    fn empty_textures_serialize_as_empty_object() {
        assert_eq!(serde_json::to_value(Textures::default()).unwrap(), json!({}));
    }

    #[test]
    fn auth_response_field_names() {
        let resp = AuthResponse {
            access_token: "a".to_string(),
            client_token: "b".to_string(),
            selected_profile: None,
            available_profiles: Some(Vec::new()),
            user: UserResponse::default(),
        };
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "accessToken": "a",
                "clientToken": "b",
                "availableProfiles": [],
                "user": {},
            })
        );
    }
}
