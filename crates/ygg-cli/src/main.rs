mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use ygg_core::default_config_dir;

use crate::commands::{init, keys, load_config, render};

#[derive(Debug, Parser)]
#[command(name = "ygg", about = "Yggdrasil profile responses: render, sign, verify")]
struct Cli {
    #[arg(long, global = true)]
    json: bool,

    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Write the default ygg.toml
    Init {
        #[arg(long)]
        force: bool,
    },
    /// Signing key management
    Key {
        #[command(subcommand)]
        command: keys::KeyCommands,
    },
    /// Render a profile response from a profile JSON file
    Profile {
        #[arg(long)]
        input: PathBuf,
        /// Leave out the signed textures property
        #[arg(long)]
        unsigned: bool,
    },
    /// Render an authentication response from an authentication result JSON file
    Authenticate {
        #[arg(long)]
        input: PathBuf,
        /// Client token to echo back (dashed or unsigned form)
        #[arg(long)]
        client_token: String,
    },
    /// Verify the signed properties of a profile response and decode its textures
    Verify {
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg_dir = cli.config_dir.clone().unwrap_or_else(default_config_dir);

    // Loaded per command so `init --force` can replace a ygg.toml that no longer parses.
    match cli.command {
        Commands::Init { force } => init::run(&cfg_dir, force, cli.json)?,
        Commands::Key { command } => keys::run(command, &load_config(&cfg_dir)?, cli.json)?,
        Commands::Profile { input, unsigned } => {
            render::profile(&load_config(&cfg_dir)?, &input, !unsigned)?;
        }
        Commands::Authenticate {
            input,
            client_token,
        } => render::authenticate(&load_config(&cfg_dir)?, &input, &client_token)?,
        Commands::Verify { input } => {
            render::verify(&load_config(&cfg_dir)?, &input, cli.json)?;
        }
    }

    Ok(())
}

pub fn pout(json_mode: bool, value: serde_json::Value, text: &str) -> anyhow::Result<()> {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{text}");
    }
    Ok(())
}
