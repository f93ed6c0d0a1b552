//! Handles the optional configuration file of the runner.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CIError;
use crate::CIResult;

/// Configuration for the runner. Every value can be overridden from the command line.
#[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maven invocation.
    pub maven: MavenConfig,

    /// Integration test values.
    pub it: ItConfig,
}

/// Maven section of the configuration.
#[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MavenConfig {
    /// Maven program.
    pub program: Option<String>,

    /// Path to the root pom.
    pub pom: Option<String>,
}

/// Integration test section of the configuration.
#[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ItConfig {
    pub region: Option<String>,
    pub project: Option<String>,
    pub artifact_bucket: Option<String>,
    pub stage_bucket: Option<String>,
    pub private_connectivity: Option<String>,
    pub spanner_host: Option<String>,
    pub release: Option<bool>,
    pub retry_failures: Option<u32>,
    pub oracle_host: Option<String>,
    pub oracle_sys_password: Option<String>,
    pub cloud_proxy_host: Option<String>,
    pub cloud_proxy_mysql_port: Option<u16>,
    pub cloud_proxy_postgres_port: Option<u16>,
    pub cloud_proxy_password: Option<String>,
}

impl Config {
    /// Load the configuration, or the default one when no path is given.
    pub fn load(path: Option<&Path>) -> CIResult<Config> {
        let path = match path {
            Some(path) => path,
            None => {
                info!("no config file given, default config loaded");
                return Ok(Config::default());
            }
        };

        let file = std::fs::read_to_string(path)
            .with_context(|| CIError::ConfigUnreadable(path.to_path_buf()))?;
        let config = toml::from_str(&file)
            .with_context(|| CIError::ConfigInvalid(path.to_path_buf()))?;
        debug!(?config);

        Ok(config)
    }
}
