//! Maven wrapper.

use std::fmt;
use std::path::PathBuf;
use std::process::Command;

use anyhow::Context;
use tracing::{debug, info};

use crate::error::CIError;
use crate::CIResult;

/// Options understood by the Maven build of the repository.
#[derive(Default, Debug, Clone, Copy)]
pub struct MavenFlags;

impl MavenFlags {
    pub fn new() -> Self {
        Self
    }

    /// Also build the modules the selected modules depend on.
    pub fn include_dependencies(&self) -> String {
        "-am".to_string()
    }

    pub fn skip_dependency_analysis(&self) -> String {
        "-Dmdep.analyze.skip".to_string()
    }

    pub fn skip_checkstyle(&self) -> String {
        "-Dcheckstyle.skip".to_string()
    }

    /// Skip the container image build.
    pub fn skip_jib(&self) -> String {
        "-Djib.skip".to_string()
    }

    /// Skip compiling and running the tests.
    pub fn skip_tests(&self) -> String {
        "-Dmaven.test.skip".to_string()
    }

    pub fn skip_jacoco(&self) -> String {
        "-Djacoco.skip".to_string()
    }

    pub fn skip_shade(&self) -> String {
        "-DskipShade".to_string()
    }

    pub fn run_integration_smoke_tests(&self) -> String {
        "-PtemplatesIntegrationSmokeTests".to_string()
    }

    pub fn thread_count(&self, count: u32) -> String {
        format!("-T{}", count)
    }

    pub fn integration_test_parallelism(&self, count: u32) -> String {
        format!("-DitParallelism={}", count)
    }

    pub fn static_bigtable_instance(&self, instance_id: &str) -> String {
        format!("-DbigtableInstanceId={}", instance_id)
    }

    pub fn static_spanner_instance(&self, instance_id: &str) -> String {
        format!("-DspannerInstanceId={}", instance_id)
    }

    /// Resolve artifacts through the internal repository.
    pub fn internal_maven(&self) -> String {
        "--settings=.mvn/settings.xml".to_string()
    }
}

/// Lifecycle phases run by the workflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    CleanInstall,
    Verify,
}

impl Goal {
    pub fn phases(&self) -> &'static [&'static str] {
        match self {
            Goal::CleanInstall => &["clean", "install"],
            Goal::Verify => &["verify"],
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.phases().join(" "))
    }
}

/// A fully assembled Maven command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Phases to run.
    pub goal: Goal,
    /// Maven program.
    pub program: String,
    /// Arguments, excluding the program.
    pub args: Vec<String>,
}

/// Password values are masked.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            match arg.split_once('=') {
                Some((key, _)) if key.ends_with("Password") => write!(f, " {}=****", key)?,
                _ => write!(f, " {}", arg)?,
            }
        }
        Ok(())
    }
}

/// Subset of information about the Maven build of the repository.
#[derive(Debug, Clone)]
pub struct Maven {
    /// Maven program.
    pub program: String,
    /// Path to the root pom.
    pub pom: PathBuf,
    /// Modules to build, the whole reactor when empty.
    pub modules: Vec<String>,
}

impl Maven {
    /// Build the invocation of `goal`. Empty options are dropped.
    pub fn invocation(&self, goal: Goal, options: &[String]) -> Invocation {
        let mut args = vec!["-B".to_string()];
        args.extend(goal.phases().iter().map(|s| s.to_string()));
        args.push("-f".to_string());
        args.push(self.pom.display().to_string());

        if !self.modules.is_empty() {
            args.push("-pl".to_string());
            args.push(self.modules.join(","));
        }

        args.extend(options.iter().filter(|o| !o.is_empty()).cloned());

        Invocation {
            goal,
            program: self.program.clone(),
            args,
        }
    }
}

/// Executes Maven invocations.
pub trait Executor {
    /// Runs the invocation to completion, failing on a non-zero exit status.
    fn execute(&self, invocation: &Invocation) -> CIResult<()>;
}

/// Runs invocations as child processes with inherited stdio.
#[derive(Default, Debug)]
pub struct ProcessExecutor;

impl Executor for ProcessExecutor {
    fn execute(&self, invocation: &Invocation) -> CIResult<()> {
        info!("running command: {}", invocation);

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        debug!(?cmd);

        let status = match cmd.status() {
            Ok(status) => status,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CIError::CommandNotFound(invocation.program.clone()).into());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to execute `{}`", invocation.program));
            }
        };

        if !status.success() {
            info!("status code: {:?}", status);
            return Err(CIError::CommandFailed(invocation.program.clone(), status).into());
        }

        Ok(())
    }
}
