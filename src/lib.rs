pub type CIResult<T> = anyhow::Result<T>;

pub mod args;
pub mod config;
pub mod error;
pub mod flags;
pub mod maven;
pub mod modules;
pub mod ops;
pub mod util;

/// Binary name of the smoke test runner.
pub const SMOKE_BIN_NAME: &str = "run-it-smoke-tests";

/// Instance name shared by the static Bigtable and Spanner backends.
pub const STATIC_INSTANCE: &str = "teleport";
