use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use ygg_api::{AuthenticationResult, Profile};
use ygg_auth::{ProfileResponse, decode_texture_payload, parse_unsigned, verify_properties};
use ygg_core::{ServiceConfig, build_serializer, build_verifier};

use crate::pout;

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("invalid JSON in {}: {e}", path.display()))
}

pub fn profile(config: &ServiceConfig, input: &Path, with_properties: bool) -> anyhow::Result<()> {
    let profile: Profile = read_json(input)?;
    let serializer = build_serializer(config)?;
    let response = serializer.encode_profile_json(&profile, with_properties)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub fn authenticate(
    config: &ServiceConfig,
    input: &Path,
    client_token: &str,
) -> anyhow::Result<()> {
    let auth: AuthenticationResult = read_json(input)?;
    let client_token = parse_unsigned(client_token)?;
    let serializer = build_serializer(config)?;
    let response = serializer.encode_auth_response_json(&auth, &client_token)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub fn verify(config: &ServiceConfig, input: &Path, json: bool) -> anyhow::Result<()> {
    let response: ProfileResponse = read_json(input)?;
    let properties = response
        .properties
        .ok_or_else(|| anyhow::anyhow!("profile {} has no properties to verify", response.name))?;

    let verifier = build_verifier(&config.signing)?;
    verify_properties(&properties, verifier.as_ref())?;

    let textures = properties
        .iter()
        .find(|p| p.name == ygg_auth::TEXTURES_PROPERTY)
        .map(decode_texture_payload)
        .transpose()?;

    pout(
        json,
        serde_json::json!({
            "ok": true,
            "id": response.id,
            "name": response.name,
            "verified": properties.len(),
            "textures": textures,
        }),
        &format!(
            "{} signed properties verified for {} ({})",
            properties.len(),
            response.name,
            response.id
        ),
    )
}
