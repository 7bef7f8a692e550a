//! Profile and authentication response assembly.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;
use ygg_api::{AuthenticationResult, Profile, PropertyMap, SignatureService};

use crate::Result;
use crate::id::unsign;
use crate::property::{encode_properties, unsigned_entries};
use crate::texture::{
    TEXTURES_PROPERTY, TextureOptions, build_texture_payload, encode_texture_payload,
};
use crate::wire::{AuthResponse, ProfileResponse, PropertyEntry, TexturePayload, UserResponse};

/// Builds wire responses, signing through a shared [`SignatureService`].
///
/// Holds no per-request state, so one instance can serve concurrent requests.
#[derive(Clone)]
pub struct ResponseSerializer {
    signer: Arc<dyn SignatureService>,
    textures: TextureOptions,
}

impl fmt::Debug for ResponseSerializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseSerializer")
            .field("algorithm", &self.signer.algorithm())
            .field("textures", &self.textures)
            .finish()
    }
}

impl ResponseSerializer {
    pub fn new(signer: Arc<dyn SignatureService>) -> Self {
        Self {
            signer,
            textures: TextureOptions::default(),
        }
    }

    #[must_use]
    pub fn with_texture_options(mut self, textures: TextureOptions) -> Self {
        self.textures = textures;
        self
    }

    pub fn signer(&self) -> &dyn SignatureService {
        self.signer.as_ref()
    }

    /// Encode a property map, signing each value when `sign` is set.
    pub fn encode_properties(
        &self,
        properties: &PropertyMap,
        sign: bool,
    ) -> Result<Vec<PropertyEntry>> {
        if sign {
            encode_properties(properties, Some(self.signer.as_ref()))
        } else {
            Ok(unsigned_entries(properties))
        }
    }

    /// Texture payload for `profile`. Each call carries a fresh timestamp.
    pub fn texture_payload(&self, profile: &Profile) -> TexturePayload {
        build_texture_payload(profile, &self.textures)
    }

    /// `{id, name, properties?}`. The only property is the signed `textures` payload.
    pub fn encode_profile(
        &self,
        profile: &Profile,
        with_properties: bool,
    ) -> Result<ProfileResponse> {
        let properties = if with_properties {
            let mut map = PropertyMap::new();
            map.insert(
                TEXTURES_PROPERTY.to_string(),
                encode_texture_payload(&self.texture_payload(profile))?,
            );
            Some(self.encode_properties(&map, true)?)
        } else {
            None
        };

        Ok(ProfileResponse {
            id: unsign(&profile.id),
            name: profile.name.clone(),
            properties,
        })
    }

    /// Response to `authenticate`/`refresh`. `client_token` is echoed back as given
    /// by the caller, not taken from `auth`.
    pub fn encode_auth_response(
        &self,
        auth: &AuthenticationResult,
        client_token: &Uuid,
    ) -> Result<AuthResponse> {
        let selected_profile = auth
            .selected_profile
            .as_ref()
            .map(|p| self.encode_profile(p, false))
            .transpose()?;

        let available_profiles = auth
            .profiles
            .as_ref()
            .map(|profiles| {
                profiles
                    .iter()
                    .map(|p| self.encode_profile(p, false))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;

        let user = UserResponse {
            id: auth.user_id.as_ref().map(unsign),
            properties: auth.properties.as_ref().map(unsigned_entries),
        };

        tracing::debug!(
            selected = selected_profile.is_some(),
            available = available_profiles.as_ref().map_or(0, Vec::len),
            "assembled authentication response"
        );

        Ok(AuthResponse {
            access_token: unsign(&auth.access_token),
            client_token: unsign(client_token),
            selected_profile,
            available_profiles,
            user,
        })
    }

    pub fn encode_profile_json(&self, profile: &Profile, with_properties: bool) -> Result<Value> {
        Ok(serde_json::to_value(self.encode_profile(profile, with_properties)?)?)
    }

    pub fn encode_auth_response_json(
        &self,
        auth: &AuthenticationResult,
        client_token: &Uuid,
    ) -> Result<Value> {
        Ok(serde_json::to_value(self.encode_auth_response(auth, client_token)?)?)
    }
}
