//! Property map encoding and verification.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use ygg_api::{PropertyMap, SignatureService, SignatureVerifier};

use crate::wire::PropertyEntry;
use crate::{Error, Result};

/// Encode a property map as a property array.
///
/// With a signer, every value is signed over its UTF-8 bytes and the signature
/// is attached base64-encoded. The first signing failure aborts the whole call;
/// no partially signed array is ever returned.
pub fn encode_properties(
    properties: &PropertyMap,
    signer: Option<&dyn SignatureService>,
) -> Result<Vec<PropertyEntry>> {
    let Some(signer) = signer else {
        return Ok(unsigned_entries(properties));
    };
    properties
        .iter()
        .map(|(name, value)| {
            Ok(PropertyEntry {
                name: name.clone(),
                value: value.clone(),
                signature: Some(sign_value(signer, name, value)?),
            })
        })
        .collect()
}

pub(crate) fn unsigned_entries(properties: &PropertyMap) -> Vec<PropertyEntry> {
    properties
        .iter()
        .map(|(name, value)| PropertyEntry {
            name: name.clone(),
            value: value.clone(),
            signature: None,
        })
        .collect()
}

fn sign_value(signer: &dyn SignatureService, name: &str, value: &str) -> Result<String> {
    let signature = signer.sign(value.as_bytes()).map_err(|source| Error::Signing {
        name: name.to_string(),
        source,
    })?;
    tracing::debug!(
        property = name,
        algorithm = signer.algorithm(),
        "signed property"
    );
    Ok(STANDARD.encode(signature))
}

/// Check that every entry carries a signature over its value that `verifier` accepts.
pub fn verify_properties(
    entries: &[PropertyEntry],
    verifier: &dyn SignatureVerifier,
) -> Result<()> {
    for entry in entries {
        let encoded = entry.signature.as_deref().ok_or_else(|| Error::Verification {
            name: entry.name.clone(),
            reason: "missing signature".to_string(),
        })?;
        let signature = STANDARD.decode(encoded).map_err(|e| Error::Verification {
            name: entry.name.clone(),
            reason: format!("signature is not base64: {e}"),
        })?;
        verifier
            .verify(entry.value.as_bytes(), &signature)
            .map_err(|e| Error::Verification {
                name: entry.name.clone(),
                reason: e.to_string(),
            })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingSigner, PrefixSigner};

    fn map(pairs: &[(&str, &str)]) -> PropertyMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn unsigned_entries_copy_name_and_value() {
        let props = map(&[("preferredLanguage", "en"), ("empty", ""), ("json", "{\"a\":1}")]);
        let entries = encode_properties(&props, None).unwrap();
        assert_eq!(entries.len(), 3);
        for entry in &entries {
            assert_eq!(props.get(&entry.name), Some(&entry.value));
            assert!(entry.signature.is_none());
        }
    }

    #[test]
    fn empty_map_encodes_to_empty_array() {
        let signer = PrefixSigner;
        assert!(encode_properties(&PropertyMap::new(), None).unwrap().is_empty());
        assert!(
            encode_properties(&PropertyMap::new(), Some(&signer))
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn signed_entries_verify() {
        let signer = PrefixSigner;
        let props = map(&[("textures", "e30="), ("name", "héllo ✓")]);
        let entries = encode_properties(&props, Some(&signer)).unwrap();
        for entry in &entries {
            let sig = STANDARD.decode(entry.signature.as_ref().unwrap()).unwrap();
            assert_eq!(sig, [b"sig:".as_slice(), entry.value.as_bytes()].concat());
        }
        verify_properties(&entries, &signer).unwrap();
    }

    #[test]
    fn signing_failure_aborts() {
        let props = map(&[("a", "1"), ("b", "2")]);
        let err = encode_properties(&props, Some(&FailingSigner)).unwrap_err();
        assert!(matches!(err, Error::Signing { ref name, .. } if name == "a"));
    }

    #[test]
    fn verification_rejects_unsigned_and_tampered() {
        let signer = PrefixSigner;
        let props = map(&[("textures", "abc")]);

        let unsigned = encode_properties(&props, None).unwrap();
        assert!(matches!(
            verify_properties(&unsigned, &signer),
            Err(Error::Verification { .. })
        ));

        let mut signed = encode_properties(&props, Some(&signer)).unwrap();
        signed[0].value = "abd".to_string();
        assert!(verify_properties(&signed, &signer).is_err());
    }
}
