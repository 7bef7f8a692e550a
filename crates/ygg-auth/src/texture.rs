//! Texture payload carried in the signed `textures` property.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use ygg_api::{Profile, PropertyMap, Texture, TextureKind};

use crate::id::unsign;
use crate::property::unsigned_entries;
use crate::wire::{PropertyEntry, TextureEntry, TexturePayload, Textures};
use crate::{Error, Result};

/// Name of the profile property holding the encoded texture payload.
pub const TEXTURES_PROPERTY: &str = "textures";

/// What the CAPE entry advertises as metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapeMetadata {
    /// No metadata; the skin model only describes the skin.
    #[default]
    Empty,
    /// Copy the skin's model metadata onto the cape, as older servers did.
    MirrorSkin,
}

/// Knobs for texture payload construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureOptions {
    #[serde(default)]
    pub cape_metadata: CapeMetadata,
}

/// Metadata attached to one texture entry.
pub fn texture_metadata(
    kind: TextureKind,
    texture: &Texture,
    opts: &TextureOptions,
) -> PropertyMap {
    let mut metadata = PropertyMap::new();
    let wants_model = match kind {
        TextureKind::Skin => true,
        TextureKind::Cape => opts.cape_metadata == CapeMetadata::MirrorSkin,
    };
    if wants_model {
        metadata.insert("model".to_string(), texture.model.as_str().to_string());
    }
    metadata
}

/// Build the texture payload for `profile`, stamped with the current time.
pub fn build_texture_payload(profile: &Profile, opts: &TextureOptions) -> TexturePayload {
    let empty = Texture::default();
    let texture = profile.texture.as_ref().unwrap_or(&empty);

    TexturePayload {
        timestamp: now_epoch_ms(),
        profile_id: unsign(&profile.id),
        profile_name: profile.name.clone(),
        is_public: true,
        textures: Textures {
            skin: texture_entry(TextureKind::Skin, texture, opts),
            cape: texture_entry(TextureKind::Cape, texture, opts),
        },
    }
}

fn texture_entry(
    kind: TextureKind,
    texture: &Texture,
    opts: &TextureOptions,
) -> Option<TextureEntry> {
    let url = texture.url(kind)?;
    Some(TextureEntry {
        url: url.to_string(),
        metadata: unsigned_entries(&texture_metadata(kind, texture, opts)),
    })
}

/// Serialize the payload to JSON text and base64 the UTF-8 bytes.
pub fn encode_texture_payload(payload: &TexturePayload) -> Result<String> {
    let json = serde_json::to_string(payload)?;
    Ok(STANDARD.encode(json.as_bytes()))
}

/// Reverse of [`encode_texture_payload`] applied to a `textures` property entry.
pub fn decode_texture_payload(entry: &PropertyEntry) -> Result<TexturePayload> {
    if entry.name != TEXTURES_PROPERTY {
        return Err(Error::InvalidPayload(format!(
            "expected property {TEXTURES_PROPERTY}, got {}",
            entry.name
        )));
    }
    let bytes = STANDARD.decode(entry.value.as_bytes())?;
    let text = String::from_utf8(bytes)
        .map_err(|e| Error::InvalidPayload(format!("value is not UTF-8: {e}")))?;
    Ok(serde_json::from_str(&text)?)
}

fn now_epoch_ms() -> i64 {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::from_secs(0));
    i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;
    use ygg_api::TextureModel;

    fn profile(skin: Option<&str>, cape: Option<&str>, model: TextureModel) -> Profile {
        Profile {
            id: Uuid::from_u128(0x1234),
            name: "Steve".to_string(),
            texture: Some(Texture {
                skin: skin.map(str::to_string),
                cape: cape.map(str::to_string),
                model,
            }),
        }
    }

    #[test]
    fn payload_header_fields() {
        let before = now_epoch_ms();
        let payload = build_texture_payload(
            &profile(None, None, TextureModel::Default),
            &TextureOptions::default(),
        );
        assert!(payload.timestamp >= before);
        assert_eq!(payload.profile_id, "00000000000000000000000000001234");
        assert_eq!(payload.profile_name, "Steve");
        assert!(payload.is_public);
        assert_eq!(payload.textures, Textures::default());
    }

    #[test]
    fn missing_texture_yields_empty_textures() {
        let mut p = profile(None, None, TextureModel::Default);
        p.texture = None;
        let payload = build_texture_payload(&p, &TextureOptions::default());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["textures"], serde_json::json!({}));
    }

    #[test]
    fn skin_and_cape_presence_follow_urls() {
        let opts = TextureOptions::default();
        let cases = [
            (Some("http://x/skin.png"), None),
            (None, Some("http://x/cape.png")),
            (Some("http://x/skin.png"), Some("http://x/cape.png")),
        ];
        for (skin, cape) in cases {
            let payload = build_texture_payload(&profile(skin, cape, TextureModel::Slim), &opts);
            assert_eq!(payload.textures.skin.as_ref().map(|e| e.url.as_str()), skin);
            assert_eq!(payload.textures.cape.as_ref().map(|e| e.url.as_str()), cape);
        }
    }

    #[test]
    fn skin_metadata_carries_model_cape_does_not() {
        let payload = build_texture_payload(
            &profile(Some("s"), Some("c"), TextureModel::Slim),
            &TextureOptions::default(),
        );
        let skin = payload.textures.skin.unwrap();
        assert_eq!(
            skin.metadata,
            vec![PropertyEntry {
                name: "model".to_string(),
                value: "slim".to_string(),
                signature: None,
            }]
        );
        assert!(payload.textures.cape.unwrap().metadata.is_empty());
    }

    #[test]
    fn mirror_skin_copies_model_onto_cape() {
        let opts = TextureOptions {
            cape_metadata: CapeMetadata::MirrorSkin,
        };
        let payload =
            build_texture_payload(&profile(None, Some("c"), TextureModel::Default), &opts);
        let cape = payload.textures.cape.unwrap();
        assert_eq!(cape.metadata.len(), 1);
        assert_eq!(cape.metadata[0].value, "default");
    }

    #[test]
    fn encoded_payload_decodes_back() {
        let payload = build_texture_payload(
            &profile(Some("http://x/skin.png"), None, TextureModel::Slim),
            &TextureOptions::default(),
        );
        let entry = PropertyEntry {
            name: TEXTURES_PROPERTY.to_string(),
            value: encode_texture_payload(&payload).unwrap(),
            signature: None,
        };
        assert_eq!(decode_texture_payload(&entry).unwrap(), payload);
    }

    #[test]
    fn decode_rejects_garbage() {
        let mut entry = PropertyEntry {
            name: TEXTURES_PROPERTY.to_string(),
            value: "!!!".to_string(),
            signature: None,
        };
        assert!(matches!(decode_texture_payload(&entry), Err(Error::Base64(_))));

        entry.value = STANDARD.encode([0xff, 0xfe]);
        assert!(matches!(
            decode_texture_payload(&entry),
            Err(Error::InvalidPayload(_))
        ));

        entry.name = "other".to_string();
        assert!(decode_texture_payload(&entry).is_err());
    }
}
