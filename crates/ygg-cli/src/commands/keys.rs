use clap::Subcommand;
use ygg_core::{DEFAULT_RSA_BITS, ServiceConfig, generate_signing_key, read_public_key};

use crate::pout;

#[derive(Debug, Subcommand)]
pub enum KeyCommands {
    /// Generate a key pair at the configured paths
    Generate {
        /// RSA modulus size (ignored for ed25519)
        #[arg(long, default_value_t = DEFAULT_RSA_BITS)]
        bits: usize,
        /// Replace an existing key
        #[arg(long)]
        force: bool,
    },
    /// Print the public key clients should be configured with
    Show,
}

pub fn run(command: KeyCommands, config: &ServiceConfig, json: bool) -> anyhow::Result<()> {
    let signing = &config.signing;
    match command {
        KeyCommands::Generate { bits, force } => {
            let public = generate_signing_key(signing, bits, force)?;
            pout(
                json,
                serde_json::json!({
                    "algorithm": signing.algorithm.as_str(),
                    "key_path": signing.key_path,
                    "public_key_path": signing.public_key_path,
                    "public_key": public,
                }),
                &format!(
                    "Generated {} key at {}\n{}",
                    signing.algorithm.as_str(),
                    signing.key_path.display(),
                    public.trim_end()
                ),
            )?;
        }
        KeyCommands::Show => {
            let public = read_public_key(signing)?;
            pout(
                json,
                serde_json::json!({
                    "algorithm": signing.algorithm.as_str(),
                    "public_key": public,
                }),
                public.trim_end(),
            )?;
        }
    }
    Ok(())
}
