//! Implementation of `run-it-smoke-tests`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;
use tracing::{debug, info};

use crate::args::SmokeArgs;
use crate::config::Config;
use crate::flags::ItFlags;
use crate::maven::{Executor, Goal, Maven, MavenFlags, ProcessExecutor};
use crate::{modules, util, CIResult, STATIC_INSTANCE};

const THREAD_COUNT: u32 = 8;
const IT_PARALLELISM: u32 = 4;

/// Main routine for `run-it-smoke-tests`.
pub fn exec(args: SmokeArgs) -> CIResult<()> {
    let config = Config::load(args.common.config.as_deref())?;

    let program = args
        .common
        .mvn
        .or(config.maven.program)
        .unwrap_or_else(|| "mvn".to_string());
    let pom = args
        .common
        .pom
        .or_else(|| config.maven.pom.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("pom.xml"));

    let root = pom.parent().unwrap_or_else(|| Path::new(""));
    let root = if root.as_os_str().is_empty() {
        Path::new(".")
    } else {
        root
    };
    let modules = modules::changed_modules(root, &args.common.changed_files)
        .context("failed to select the changed modules")?;
    debug!(?modules);

    let maven = Maven {
        program,
        pom,
        modules,
    };
    let it = ItFlags::resolve(args.it, config.it);

    run(&maven, &it, &ProcessExecutor)
}

/// Core routine: install the repository, then run the smoke tests.
pub fn run<E: Executor>(maven: &Maven, it: &ItFlags, executor: &E) -> CIResult<()> {
    step(maven, Goal::CleanInstall, &install_options(), executor)?;
    step(maven, Goal::Verify, &verify_options(it), executor)?;

    info!("Build Successful!");

    Ok(())
}

/// Options for installing the repository without testing it.
pub fn install_options() -> Vec<String> {
    let mvn = MavenFlags::new();
    vec![
        mvn.include_dependencies(),
        mvn.skip_dependency_analysis(),
        mvn.skip_checkstyle(),
        mvn.skip_jib(),
        mvn.skip_tests(),
        mvn.skip_jacoco(),
        mvn.skip_shade(),
        mvn.thread_count(THREAD_COUNT),
        mvn.internal_maven(),
    ]
}

/// Options for running the smoke tests against the static backends.
pub fn verify_options(it: &ItFlags) -> Vec<String> {
    let mvn = MavenFlags::new();
    vec![
        mvn.include_dependencies(),
        mvn.skip_dependency_analysis(),
        mvn.skip_checkstyle(),
        mvn.skip_jib(),
        mvn.run_integration_smoke_tests(),
        mvn.thread_count(THREAD_COUNT),
        mvn.integration_test_parallelism(IT_PARALLELISM),
        mvn.static_bigtable_instance(STATIC_INSTANCE),
        mvn.static_spanner_instance(STATIC_INSTANCE),
        mvn.internal_maven(),
        it.region(),
        it.project(),
        it.artifact_bucket(),
        it.stage_bucket(),
        it.private_connectivity(),
        it.spanner_host(),
        it.failure_mode(),
        it.retry_failures(),
        it.static_oracle_host(),
        it.static_oracle_sys_password(),
        it.cloud_proxy_host(),
        it.cloud_proxy_mysql_port(),
        it.cloud_proxy_postgres_port(),
        it.cloud_proxy_password(),
    ]
}

fn step<E: Executor>(maven: &Maven, goal: Goal, options: &[String], executor: &E) -> CIResult<()> {
    let invocation = maven.invocation(goal, options);

    eprintln!("{:>12} mvn {}", "Running".cyan().bold(), goal);
    let time = std::time::Instant::now();

    executor
        .execute(&invocation)
        .with_context(|| format!("failed to run `mvn {}`", goal))?;

    eprintln!(
        "{:>12} mvn {} in {}",
        "Finished".green().bold(),
        goal,
        util::human_duration(time.elapsed())
    );

    Ok(())
}
