//! Ed25519 signing with hex-encoded key material.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use ygg_api::{SignatureService, SignatureVerifier, YggError};

use crate::{Error, Result};

pub const ED25519: &str = "Ed25519";

#[derive(Clone)]
pub struct Ed25519Signer {
    key: SigningKey,
}

impl Ed25519Signer {
    pub fn generate() -> Self {
        let mut rng = rand::rngs::OsRng;
        Self {
            key: SigningKey::generate(&mut rng),
        }
    }

    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            key: SigningKey::from_bytes(seed),
        }
    }

    /// Parse a 64-character hex seed. Surrounding whitespace is ignored.
    pub fn from_hex(hex_seed: &str) -> Result<Self> {
        Ok(Self::from_seed(&decode_32(hex_seed, "private key")?))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.key.to_bytes())
    }

    pub fn public_key_hex(&self) -> String {
        hex::encode(self.key.verifying_key().as_bytes())
    }

    pub fn verifier(&self) -> Ed25519Verifier {
        Ed25519Verifier {
            key: self.key.verifying_key(),
        }
    }
}

impl SignatureService for Ed25519Signer {
    fn algorithm(&self) -> &str {
        ED25519
    }

    fn sign(&self, data: &[u8]) -> std::result::Result<Vec<u8>, YggError> {
        Ok(self.key.sign(data).to_bytes().to_vec())
    }
}

#[derive(Clone)]
pub struct Ed25519Verifier {
    key: VerifyingKey,
}

impl Ed25519Verifier {
    pub fn from_hex(hex_key: &str) -> Result<Self> {
        let bytes = decode_32(hex_key, "public key")?;
        let key = VerifyingKey::from_bytes(&bytes)
            .map_err(|e| Error::Key(format!("invalid Ed25519 public key: {e}")))?;
        Ok(Self { key })
    }
}

impl SignatureVerifier for Ed25519Verifier {
    fn verify(&self, data: &[u8], signature: &[u8]) -> std::result::Result<(), YggError> {
        let signature = Signature::from_slice(signature)
            .map_err(|e| YggError::Verification(format!("malformed signature: {e}")))?;
        self.key
            .verify(data, &signature)
            .map_err(|e| YggError::Verification(e.to_string()))
    }
}

fn decode_32(raw: &str, what: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(raw.trim())
        .map_err(|e| Error::Key(format!("invalid Ed25519 {what} hex: {e}")))?;
    bytes
        .try_into()
        .map_err(|_| Error::Key(format!("Ed25519 {what} must be 32 bytes")))
}
