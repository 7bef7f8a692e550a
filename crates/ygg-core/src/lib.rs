use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ygg_api::{SignatureService, SignatureVerifier, YggError};
use ygg_auth::{
    Ed25519Signer, Ed25519Verifier, ResponseSerializer, RsaSha1Signer, RsaSha1Verifier,
    TextureOptions,
};

pub const CONFIG_FILE: &str = "ygg.toml";
pub const DEFAULT_RSA_BITS: usize = 4096;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SigningAlgorithm {
    #[default]
    RsaSha1,
    Ed25519,
}

impl SigningAlgorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            SigningAlgorithm::RsaSha1 => "rsa-sha1",
            SigningAlgorithm::Ed25519 => "ed25519",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningConfig {
    pub algorithm: SigningAlgorithm,
    pub key_path: PathBuf,
    pub public_key_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub signing: SigningConfig,
    pub textures: TextureOptions,
}

impl ServiceConfig {
    /// Configuration used when no file exists yet: keys live in `dir`.
    pub fn defaults_in(dir: &Path) -> Self {
        let algorithm = SigningAlgorithm::default();
        Self {
            signing: SigningConfig {
                algorithm,
                key_path: dir.join(default_key_file(algorithm)),
                public_key_path: dir.join(default_public_key_file(algorithm)),
            },
            textures: TextureOptions::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    signing: RawSigning,
    #[serde(default)]
    textures: TextureOptions,
}

#[derive(Debug, Default, Deserialize)]
struct RawSigning {
    #[serde(default)]
    algorithm: SigningAlgorithm,
    key_path: Option<PathBuf>,
    public_key_path: Option<PathBuf>,
}

fn default_key_file(algorithm: SigningAlgorithm) -> &'static str {
    match algorithm {
        SigningAlgorithm::RsaSha1 => "signing_key.pem",
        SigningAlgorithm::Ed25519 => "signing_key.hex",
    }
}

fn default_public_key_file(algorithm: SigningAlgorithm) -> &'static str {
    match algorithm {
        SigningAlgorithm::RsaSha1 => "signing_key.pub.pem",
        SigningAlgorithm::Ed25519 => "signing_key.pub.hex",
    }
}

pub fn default_config_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config").join("ygg")
    } else {
        PathBuf::from(".ygg")
    }
}

pub fn validate_config(cfg: &ServiceConfig) -> Result<(), YggError> {
    if cfg.signing.key_path.as_os_str().is_empty() {
        return Err(YggError::Validation("signing.key_path is empty".to_string()));
    }
    if cfg.signing.public_key_path.as_os_str().is_empty() {
        return Err(YggError::Validation(
            "signing.public_key_path is empty".to_string(),
        ));
    }
    if cfg.signing.key_path == cfg.signing.public_key_path {
        return Err(YggError::Validation(format!(
            "signing.key_path and signing.public_key_path both point to {}",
            cfg.signing.key_path.display()
        )));
    }
    Ok(())
}

pub fn load_config_from_dir(dir: &Path) -> Result<ServiceConfig, YggError> {
    load_config_from_file(&dir.join(CONFIG_FILE))
}

/// Relative key paths resolve against the directory holding the file.
pub fn load_config_from_file(path: &Path) -> Result<ServiceConfig, YggError> {
    let content = fs::read_to_string(path)
        .map_err(|e| YggError::NotFound(format!("failed to read {}: {e}", path.display())))?;
    let raw: RawConfig = toml::from_str(&content)
        .map_err(|e| YggError::Validation(format!("invalid TOML in {}: {e}", path.display())))?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let algorithm = raw.signing.algorithm;
    let key_path = raw
        .signing
        .key_path
        .unwrap_or_else(|| PathBuf::from(default_key_file(algorithm)));
    let public_key_path = raw
        .signing
        .public_key_path
        .unwrap_or_else(|| PathBuf::from(default_public_key_file(algorithm)));

    let cfg = ServiceConfig {
        signing: SigningConfig {
            algorithm,
            key_path: base.join(key_path),
            public_key_path: base.join(public_key_path),
        },
        textures: raw.textures,
    };
    validate_config(&cfg)?;
    tracing::info!(
        config = %path.display(),
        algorithm = algorithm.as_str(),
        "loaded configuration"
    );
    Ok(cfg)
}

pub fn write_default_config_files(dir: &Path, force: bool) -> Result<(), YggError> {
    fs::create_dir_all(dir)
        .map_err(|e| YggError::Internal(format!("failed to create {}: {e}", dir.display())))?;

    let path = dir.join(CONFIG_FILE);
    if force || !path.exists() {
        fs::write(
            &path,
            include_str!("../../../docs/ygg-cli/examples/ygg.toml.example"),
        )
        .map_err(|e| YggError::Internal(format!("failed to write {}: {e}", path.display())))?;
    }

    Ok(())
}

/// Create a key pair at the configured paths and return the public key text.
/// Existing keys are kept unless `force` is set.
pub fn generate_signing_key(
    cfg: &SigningConfig,
    rsa_bits: usize,
    force: bool,
) -> Result<String, YggError> {
    if !force && cfg.key_path.exists() {
        return Err(YggError::Validation(format!(
            "{} already exists (use --force to replace it)",
            cfg.key_path.display()
        )));
    }

    let (private, public) = match cfg.algorithm {
        SigningAlgorithm::RsaSha1 => {
            let signer = RsaSha1Signer::generate(rsa_bits)?;
            (signer.to_pkcs8_pem()?, signer.public_key_pem()?)
        }
        SigningAlgorithm::Ed25519 => {
            let signer = Ed25519Signer::generate();
            (
                format!("{}\n", signer.to_hex()),
                format!("{}\n", signer.public_key_hex()),
            )
        }
    };

    // Public key first: a private key on disk blocks regeneration without --force.
    write_public_key_file(&cfg.public_key_path, &public)?;
    write_private_key_file(&cfg.key_path, &private)?;
    tracing::info!(
        key = %cfg.key_path.display(),
        algorithm = cfg.algorithm.as_str(),
        "generated signing key"
    );
    Ok(public)
}

fn create_parent(path: &Path) -> Result<(), YggError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            YggError::Internal(format!("failed to create {}: {e}", parent.display()))
        })?;
    }
    Ok(())
}

fn write_public_key_file(path: &Path, body: &str) -> Result<(), YggError> {
    create_parent(path)?;
    fs::write(path, body)
        .map_err(|e| YggError::Internal(format!("failed to write {}: {e}", path.display())))
}

/// Owner read/write only on unix, including when replacing an existing file.
fn write_private_key_file(path: &Path, body: &str) -> Result<(), YggError> {
    create_parent(path)?;
    let write_err = |e: std::io::Error| {
        YggError::Internal(format!("failed to write {}: {e}", path.display()))
    };

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path).map_err(write_err)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))
            .map_err(write_err)?;
    }
    file.write_all(body.as_bytes()).map_err(write_err)
}

fn read_key_file(path: &Path) -> Result<String, YggError> {
    fs::read_to_string(path)
        .map_err(|e| YggError::NotFound(format!("failed to read key {}: {e}", path.display())))
}

pub fn build_signer(cfg: &SigningConfig) -> Result<Arc<dyn SignatureService>, YggError> {
    let material = read_key_file(&cfg.key_path)?;
    let signer: Arc<dyn SignatureService> = match cfg.algorithm {
        SigningAlgorithm::RsaSha1 => Arc::new(RsaSha1Signer::from_pkcs8_pem(&material)?),
        SigningAlgorithm::Ed25519 => Arc::new(Ed25519Signer::from_hex(&material)?),
    };
    tracing::info!(
        key = %cfg.key_path.display(),
        algorithm = signer.algorithm(),
        "loaded signing key"
    );
    Ok(signer)
}

/// Verifier for the published public key.
pub fn build_verifier(cfg: &SigningConfig) -> Result<Box<dyn SignatureVerifier>, YggError> {
    let material = read_key_file(&cfg.public_key_path)?;
    let verifier: Box<dyn SignatureVerifier> = match cfg.algorithm {
        SigningAlgorithm::RsaSha1 => Box::new(RsaSha1Verifier::from_public_key_pem(&material)?),
        SigningAlgorithm::Ed25519 => Box::new(Ed25519Verifier::from_hex(&material)?),
    };
    Ok(verifier)
}

pub fn read_public_key(cfg: &SigningConfig) -> Result<String, YggError> {
    read_key_file(&cfg.public_key_path)
}

pub fn build_serializer(cfg: &ServiceConfig) -> Result<ResponseSerializer, YggError> {
    Ok(ResponseSerializer::new(build_signer(&cfg.signing)?).with_texture_options(cfg.textures))
}
