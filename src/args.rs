//! Handles arguments for the smoke test runner.

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{Args, Parser};

use crate::*;

/// Install the repository and run the integration smoke tests
#[derive(Debug, Parser)]
#[command(name = SMOKE_BIN_NAME, author, version)]
pub struct SmokeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub it: ItArgs,
}

/// Flags shared by every workflow
#[derive(Args, Debug)]
#[command(next_help_heading = "Common options")]
pub struct CommonArgs {
    /// Changed files (comma-delimited), used to select the Maven modules
    #[arg(long = "changed-files", value_delimiter = ',', value_name = "FILES")]
    pub changed_files: Vec<String>,

    /// Maven program to invoke
    #[arg(long = "mvn", value_name = "PROGRAM")]
    pub mvn: Option<String>,

    /// Path to the root pom
    #[arg(long, value_name = "PATH")]
    pub pom: Option<PathBuf>,

    /// TOML file with default values for the options
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(
        long = "log",
        default_value = "info",
        value_parser = PossibleValuesParser::new(["trace", "debug", "info", "warn", "error"]),
        value_name = "LEVEL",
        global = true,
    )]
    pub log_level: String,
}

/// Flags for the integration test workflows
#[derive(Args, Debug, Default)]
#[command(next_help_heading = "Integration test options")]
pub struct ItArgs {
    /// GCP region to use for storing test artifacts
    #[arg(long = "it-region", value_name = "REGION")]
    pub region: Option<String>,

    /// GCP project to run the integration tests in
    #[arg(long = "it-project", value_name = "PROJECT")]
    pub project: Option<String>,

    /// GCS bucket to store test artifacts
    #[arg(long = "it-artifact-bucket", value_name = "BUCKET")]
    pub artifact_bucket: Option<String>,

    /// GCS bucket to stage templates, defaults to the artifact bucket
    #[arg(long = "it-stage-bucket", value_name = "BUCKET")]
    pub stage_bucket: Option<String>,

    /// Private connectivity endpoint for Datastream
    #[arg(long = "it-private-connectivity", value_name = "ENDPOINT")]
    pub private_connectivity: Option<String>,

    /// Custom endpoint for Spanner API requests
    #[arg(long = "it-spanner-host", value_name = "URL")]
    pub spanner_host: Option<String>,

    /// Tests are executed for a release, keep going after failures
    #[arg(
        long = "it-release",
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub release: Option<bool>,

    /// Number of retries for failing tests
    #[arg(long = "it-retry-failures", value_name = "N")]
    pub retry_failures: Option<u32>,

    /// Host of the static Oracle instance
    #[arg(long = "it-oracle-host", value_name = "HOST")]
    pub oracle_host: Option<String>,

    /// Sys password of the static Oracle instance
    #[arg(long = "it-oracle-sys-password", value_name = "PASSWORD")]
    pub oracle_sys_password: Option<String>,

    /// Host of the static Cloud SQL Auth Proxy
    #[arg(long = "it-cloud-proxy-host", value_name = "HOST")]
    pub cloud_proxy_host: Option<String>,

    /// MySQL port on the static Cloud SQL Auth Proxy
    #[arg(long = "it-cloud-proxy-mysql-port", value_name = "PORT")]
    pub cloud_proxy_mysql_port: Option<u16>,

    /// Postgres port on the static Cloud SQL Auth Proxy
    #[arg(long = "it-cloud-proxy-postgres-port", value_name = "PORT")]
    pub cloud_proxy_postgres_port: Option<u16>,

    /// Password for the static Cloud SQL Auth Proxy
    #[arg(long = "it-cloud-proxy-password", value_name = "PASSWORD")]
    pub cloud_proxy_password: Option<String>,
}
