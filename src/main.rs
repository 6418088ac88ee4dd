use std::process;

use structopt::StructOpt;
use tracing::{error, info};

use jsonput::cliopt::CliOpt;
use jsonput::logging;

fn main() {
    let opt = CliOpt::from_args();

    if let Err(e) = logging::init(opt.verbose) {
        eprintln!("{}", e);
        process::exit(1);
    }

    match jsonput::run(&opt) {
        Ok(stats) => info!(
            lines = stats.lines,
            sent = stats.sent,
            invalid = stats.invalid,
            malformed = stats.malformed,
            "input exhausted"
        ),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
