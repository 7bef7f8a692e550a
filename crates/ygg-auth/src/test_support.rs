use ygg_api::{SignatureService, SignatureVerifier, YggError};

/// Deterministic stand-in: the "signature" is `sig:` followed by the data.
pub(crate) struct PrefixSigner;

impl SignatureService for PrefixSigner {
    fn algorithm(&self) -> &str {
        "prefix"
    }

    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, YggError> {
        Ok([b"sig:".as_slice(), data].concat())
    }
}

impl SignatureVerifier for PrefixSigner {
    fn verify(&self, data: &[u8], signature: &[u8]) -> Result<(), YggError> {
        if signature.strip_prefix(b"sig:") == Some(data) {
            Ok(())
        } else {
            Err(YggError::Verification("prefix mismatch".to_string()))
        }
    }
}

pub(crate) struct FailingSigner;

impl SignatureService for FailingSigner {
    fn algorithm(&self) -> &str {
        "failing"
    }

    fn sign(&self, _data: &[u8]) -> Result<Vec<u8>, YggError> {
        Err(YggError::Signing("key unavailable".to_string()))
    }
}
