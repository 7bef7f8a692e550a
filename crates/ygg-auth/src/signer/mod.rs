//! Concrete signature services.

#[cfg(feature = "ed25519")]
mod ed25519;
#[cfg(feature = "rsa-sha1")]
mod rsa_sha1;

#[cfg(feature = "ed25519")]
pub use ed25519::{ED25519, Ed25519Signer, Ed25519Verifier};
#[cfg(feature = "rsa-sha1")]
pub use rsa_sha1::{RSA_SHA1, RsaSha1Signer, RsaSha1Verifier};
