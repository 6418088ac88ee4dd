use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "jsonput",
    about = "Reads JSON metrics line by line and forwards them as put lines over TCP"
)]
pub struct CliOpt {
    /// The host:port to connect to
    #[structopt(long = "host", default_value = "localhost:4242")]
    pub host: String,

    /// Log skipped records and connection details (overridden by RUST_LOG)
    #[structopt(long = "verbose", short = "v")]
    pub verbose: bool,

    /// Input file with one JSON metric per line; reads stdin when omitted
    #[structopt(parse(from_os_str))]
    pub input: Option<PathBuf>,
}
