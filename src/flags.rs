//! Integration test flags forwarded to Maven as `-D` properties.

use crate::args::ItArgs;
use crate::config::ItConfig;

const DEFAULT_SPANNER_HOST: &str = "https://batch-spanner.googleapis.com";
const DEFAULT_ORACLE_HOST: &str = "10.128.0.90";
const DEFAULT_ORACLE_SYS_PASSWORD: &str = "oracle";
const DEFAULT_CLOUD_PROXY_HOST: &str = "10.128.0.34";
const DEFAULT_CLOUD_PROXY_MYSQL_PORT: u16 = 33134;
const DEFAULT_CLOUD_PROXY_POSTGRES_PORT: u16 = 33136;

/// Resolved integration test values.
#[derive(Debug, Clone, PartialEq)]
pub struct ItFlags {
    pub region: String,
    pub project: String,
    pub artifact_bucket: String,
    pub stage_bucket: String,
    pub private_connectivity: String,
    pub spanner_host: String,
    pub release: bool,
    pub retry_failures: u32,
    pub oracle_host: String,
    pub oracle_sys_password: String,
    pub cloud_proxy_host: String,
    pub cloud_proxy_mysql_port: u16,
    pub cloud_proxy_postgres_port: u16,
    pub cloud_proxy_password: String,
}

impl Default for ItFlags {
    fn default() -> Self {
        Self::resolve(ItArgs::default(), ItConfig::default())
    }
}

impl ItFlags {
    /// Merge command line values over config values over built-in defaults.
    pub fn resolve(args: ItArgs, config: ItConfig) -> Self {
        fn pick<T>(arg: Option<T>, config: Option<T>, default: impl FnOnce() -> T) -> T {
            arg.or(config).unwrap_or_else(default)
        }

        Self {
            region: pick(args.region, config.region, String::new),
            project: pick(args.project, config.project, String::new),
            artifact_bucket: pick(args.artifact_bucket, config.artifact_bucket, String::new),
            stage_bucket: pick(args.stage_bucket, config.stage_bucket, String::new),
            private_connectivity: pick(
                args.private_connectivity,
                config.private_connectivity,
                String::new,
            ),
            spanner_host: pick(args.spanner_host, config.spanner_host, || {
                DEFAULT_SPANNER_HOST.to_string()
            }),
            release: pick(args.release, config.release, || false),
            retry_failures: pick(args.retry_failures, config.retry_failures, || 0),
            oracle_host: pick(args.oracle_host, config.oracle_host, || {
                DEFAULT_ORACLE_HOST.to_string()
            }),
            oracle_sys_password: pick(args.oracle_sys_password, config.oracle_sys_password, || {
                DEFAULT_ORACLE_SYS_PASSWORD.to_string()
            }),
            cloud_proxy_host: pick(args.cloud_proxy_host, config.cloud_proxy_host, || {
                DEFAULT_CLOUD_PROXY_HOST.to_string()
            }),
            cloud_proxy_mysql_port: pick(
                args.cloud_proxy_mysql_port,
                config.cloud_proxy_mysql_port,
                || DEFAULT_CLOUD_PROXY_MYSQL_PORT,
            ),
            cloud_proxy_postgres_port: pick(
                args.cloud_proxy_postgres_port,
                config.cloud_proxy_postgres_port,
                || DEFAULT_CLOUD_PROXY_POSTGRES_PORT,
            ),
            cloud_proxy_password: pick(
                args.cloud_proxy_password,
                config.cloud_proxy_password,
                String::new,
            ),
        }
    }

    pub fn region(&self) -> String {
        format!("-Dregion={}", self.region)
    }

    pub fn project(&self) -> String {
        format!("-Dproject={}", self.project)
    }

    pub fn artifact_bucket(&self) -> String {
        format!("-DartifactBucket={}", self.artifact_bucket)
    }

    /// Templates are staged in the artifact bucket unless told otherwise.
    pub fn stage_bucket(&self) -> String {
        if self.stage_bucket.is_empty() {
            format!("-DstageBucket={}", self.artifact_bucket)
        } else {
            format!("-DstageBucket={}", self.stage_bucket)
        }
    }

    /// Empty when no endpoint is set.
    pub fn private_connectivity(&self) -> String {
        if self.private_connectivity.is_empty() {
            String::new()
        } else {
            format!("-DprivateConnectivity={}", self.private_connectivity)
        }
    }

    pub fn spanner_host(&self) -> String {
        format!("-DspannerHost={}", self.spanner_host)
    }

    /// Release runs keep going to report every failing module.
    pub fn failure_mode(&self) -> String {
        let mode = if self.release { "-fae" } else { "-ff" };
        mode.to_string()
    }

    pub fn retry_failures(&self) -> String {
        format!("-Dsurefire.rerunFailingTestsCount={}", self.retry_failures)
    }

    pub fn static_oracle_host(&self) -> String {
        format!("-DcloudOracleHost={}", self.oracle_host)
    }

    pub fn static_oracle_sys_password(&self) -> String {
        format!("-DcloudOracleSysPassword={}", self.oracle_sys_password)
    }

    pub fn cloud_proxy_host(&self) -> String {
        format!("-DcloudProxyHost={}", self.cloud_proxy_host)
    }

    pub fn cloud_proxy_mysql_port(&self) -> String {
        format!("-DcloudProxyMySqlPort={}", self.cloud_proxy_mysql_port)
    }

    pub fn cloud_proxy_postgres_port(&self) -> String {
        format!("-DcloudProxyPostgresPort={}", self.cloud_proxy_postgres_port)
    }

    pub fn cloud_proxy_password(&self) -> String {
        format!("-DcloudProxyPassword={}", self.cloud_proxy_password)
    }
}
