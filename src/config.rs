//! Configuration for the wildfire API
//!
//! Centralized configuration with sensible defaults.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{IncendiosError, Result};

/// Main configuration for a service instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Data Configuration
    // -------------------------------------------------------------------------
    /// Directory holding the dataset files
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── teziutlan.json   (regional collection)
    ///     └── nacional.json    (national collection)
    pub data_dir: PathBuf,

    /// File name of the regional collection inside `data_dir`
    pub regional_file: String,

    /// File name of the national collection inside `data_dir`
    pub national_file: String,

    // -------------------------------------------------------------------------
    // Documentation Configuration
    // -------------------------------------------------------------------------
    /// Directory served under `/docs`
    pub docs_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            regional_file: "teziutlan.json".to_string(),
            national_file: "nacional.json".to_string(),
            docs_dir: PathBuf::from("./docs"),
            listen_addr: "127.0.0.1:8000".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Full path of the regional dataset file
    pub fn regional_path(&self) -> PathBuf {
        self.data_dir.join(&self.regional_file)
    }

    /// Full path of the national dataset file
    pub fn national_path(&self) -> PathBuf {
        self.data_dir.join(&self.national_file)
    }

    /// Parse the listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().map_err(|e| {
            IncendiosError::Config(format!("invalid listen address '{}': {}", self.listen_addr, e))
        })
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the regional dataset file name
    pub fn regional_file(mut self, name: impl Into<String>) -> Self {
        self.config.regional_file = name.into();
        self
    }

    /// Set the national dataset file name
    pub fn national_file(mut self, name: impl Into<String>) -> Self {
        self.config.national_file = name.into();
        self
    }

    /// Set the documentation directory
    pub fn docs_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.docs_dir = path.into();
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
