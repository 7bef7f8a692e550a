//! ygg-auth
//!
//! Builds the signed profile responses served by a Yggdrasil-compatible
//! authentication server. Game clients check these payloads offline, so the
//! JSON shape has to match the Mojang wire format exactly and every signed
//! property has to verify against the server's published key.
//!
//! - **Property maps** become `[{name, value, signature?}]` arrays, optionally signed per entry.
//! - **Texture payloads** describe skin/cape URLs and are embedded base64-encoded in the
//!   signed `textures` property.
//! - **Profile and authentication responses** assemble the above around unsigned
//!   (dash-free) identifiers.
//!
//! Signing is delegated to a [`SignatureService`]; this crate ships an RSA/SHA-1
//! implementation (feature `rsa-sha1`, what vanilla clients expect) and an Ed25519
//! one (feature `ed25519`).
//!
//! ## Quick start
//! ```no_run
//! use std::sync::Arc;
//! use ygg_auth::{Profile, ResponseSerializer, RsaSha1Signer, Texture, TextureModel};
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let signer = RsaSha1Signer::generate(2048)?;
//! let serializer = ResponseSerializer::new(Arc::new(signer));
//! let profile = Profile {
//!     id: uuid::Uuid::new_v4(),
//!     name: "Alice".to_string(),
//!     texture: Some(Texture {
//!         skin: Some("https://textures.example/alice.png".to_string()),
//!         cape: None,
//!         model: TextureModel::Slim,
//!     }),
//! };
//! let json = serializer.encode_profile_json(&profile, true)?;
//! println!("{json}");
//! # Ok(()) }
//! ```

#![forbid(unsafe_code)]

mod error;
mod id;
mod property;
mod response;
mod signer;
mod texture;
mod wire;

#[cfg(test)]
mod test_support;

pub use error::{Error, Result};
pub use id::{parse_unsigned, unsign};
pub use property::{encode_properties, verify_properties};
pub use response::ResponseSerializer;
#[cfg(feature = "ed25519")]
pub use signer::{ED25519, Ed25519Signer, Ed25519Verifier};
#[cfg(feature = "rsa-sha1")]
pub use signer::{RSA_SHA1, RsaSha1Signer, RsaSha1Verifier};
pub use texture::{
    CapeMetadata, TEXTURES_PROPERTY, TextureOptions, build_texture_payload,
    decode_texture_payload, encode_texture_payload, texture_metadata,
};
pub use wire::{
    AuthResponse, ProfileResponse, PropertyEntry, TextureEntry, TexturePayload, Textures,
    UserResponse,
};

pub use ygg_api::{
    AuthenticationResult, Profile, PropertyMap, SignatureService, SignatureVerifier, Texture,
    TextureKind, TextureModel, YggError,
};
