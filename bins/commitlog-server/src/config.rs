use clap::{Args, Parser, Subcommand};
use serde::Deserialize;

use commitlog_core::LogConfig;

use crate::error::ServerError;

#[derive(Parser)]
#[command(name = "commitlog-server", about = "Append-only record log over HTTP")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
}

#[derive(Args, Clone, Debug)]
pub struct ServeArgs {
    /// Path to TOML config file. Without it every setting takes its default.
    #[arg(long, env = "COMMITLOG_CONFIG")]
    pub config: Option<String>,

    /// Listen address, overrides `listen` from the config file.
    #[arg(long)]
    pub listen: Option<String>,
}

// ---- TOML Config ----

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: String,
    #[serde(default)]
    pub log: LogConfig,
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            log: LogConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn load(path: &str) -> Result<Self, ServerError> {
        let content = std::fs::read_to_string(path).map_err(|e| ServerError::Config {
            context: "read",
            detail: format!("'{path}': {e}"),
        })?;
        Self::parse(&content)
    }

    pub fn parse(toml_str: &str) -> Result<Self, ServerError> {
        toml::from_str(toml_str).map_err(|e| ServerError::Config {
            context: "parse",
            detail: e.to_string(),
        })
    }

    /// Config for `serve`: file (if any) first, then CLI overrides.
    pub fn resolve(args: &ServeArgs) -> Result<Self, ServerError> {
        let mut config = match &args.config {
            Some(path) => {
                let config = Self::load(path)?;
                tracing::info!(config = %path, "loaded config");
                config
            }
            None => Self::default(),
        };
        if let Some(listen) = &args.listen {
            config.listen = listen.clone();
        }
        Ok(config)
    }
}
