use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CIError {
    #[error("`{0}` returned failed status ({1})")]
    CommandFailed(String, ExitStatus),

    #[error(
        "Unable to execute `{0}`\n\
        Check your $PATH variable or pass `--mvn <PROGRAM>`"
    )]
    CommandNotFound(String),

    #[error("Changed file must be relative to the repository root: {0}")]
    PathOutsideRoot(String),

    #[error("Failed to read the config file: {}", .0.display())]
    ConfigUnreadable(PathBuf),

    #[error("Invalid config file: {}", .0.display())]
    ConfigInvalid(PathBuf),
}
