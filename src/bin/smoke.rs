use clap::Parser;
use teleport_ci::{args, ops, util};
use tracing::error;

/// Entry function of `run-it-smoke-tests`.
fn main() {
    let args = args::SmokeArgs::parse();

    if let Err(e) = util::init_logger(&args.common.log_level) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }

    if let Err(e) = ops::smoke::exec(args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
