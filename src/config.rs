//! Runtime configuration.
//!
//! Values come from the environment first, then from a `.env` file in the
//! working directory, and may be overridden on the command line. Anything
//! that fails to parse is a startup error.

use anyhow::{Context, Result, bail};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_FILE: &str = "Data/Data.json";
/// 100 KiB, the usual cap for JSON request bodies.
pub const DEFAULT_BODY_LIMIT: usize = 100 * 1024;

pub const ENV_PORT: &str = "PORT";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_DATA_FILE: &str = "COMMENTS_DATA_FILE";
pub const ENV_BODY_LIMIT: &str = "COMMENTS_BODY_LIMIT";
pub const ENV_FILE: &str = ".env";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Location of the backing document. Injected into the store, never global.
    pub data_file: PathBuf,
    pub body_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl Config {
    /// Process environment wins over `.env`, which is only a fallback.
    pub fn from_env() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let file_vars = read_env_file(Path::new(ENV_FILE))?;
        Self::from_sources(&args, |key| {
            std::env::var(key)
                .ok()
                .or_else(|| file_vars.get(key).cloned())
        })
    }

    /// Builds a config from command line arguments (program name excluded)
    /// and an environment lookup.
    pub fn from_sources<F>(args: &[String], lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(port) = lookup(ENV_PORT) {
            config.port = parse_port(&port).with_context(|| format!("invalid {}", ENV_PORT))?;
        }
        if let Some(bind) = lookup(ENV_BIND_ADDR) {
            config.bind_addr = bind
                .trim()
                .parse()
                .with_context(|| format!("invalid {}: {:?}", ENV_BIND_ADDR, bind))?;
        }
        if let Some(path) = lookup(ENV_DATA_FILE) {
            if !path.trim().is_empty() {
                config.data_file = PathBuf::from(path);
            }
        }
        if let Some(limit) = lookup(ENV_BODY_LIMIT) {
            config.body_limit = limit
                .trim()
                .parse()
                .with_context(|| format!("invalid {}: {:?}", ENV_BODY_LIMIT, limit))?;
        }

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            let value = match flag {
                "--port" | "--bind" | "--data-file" => args
                    .get(i + 1)
                    .with_context(|| format!("{} requires a value", flag))?,
                other => bail!(
                    "unknown argument {:?} (expected --port, --bind or --data-file)",
                    other
                ),
            };

            match flag {
                "--port" => config.port = parse_port(value)?,
                "--bind" => {
                    config.bind_addr = value
                        .parse()
                        .with_context(|| format!("invalid --bind address: {:?}", value))?
                }
                _ => config.data_file = PathBuf::from(value),
            }
            i += 2;
        }

        Ok(config)
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

/// Reads `KEY=value` pairs from a dotenv file. A missing file is empty.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    match dotenvy::from_path_iter(path) {
        Ok(iter) => iter
            .map(|item| item.with_context(|| format!("invalid line in {}", path.display())))
            .collect(),
        Err(e) if e.not_found() => Ok(HashMap::new()),
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .with_context(|| format!("port must be a number between 0 and 65535, got {:?}", raw))
}
