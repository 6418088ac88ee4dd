pub mod cliopt;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod output;
pub mod runner;
pub mod validator;

use std::io::BufWriter;

use tracing::debug;

use crate::cliopt::CliOpt;
use crate::error::Result;
use crate::input::{DelimReader, JsonDecoder, MetricReader};
use crate::output::{LineWriter, Output, PutEncoder};
use crate::runner::{Runner, Stats};

/// Opens the input, dials `opt.host` and forwards every valid metric until
/// the input is exhausted. The input is opened before the connection is
/// attempted.
pub fn run(opt: &CliOpt) -> Result<Stats> {
    let input = input::open(opt.input.as_deref())?;
    let stream = output::connect(&opt.host)?;

    debug!(input = ?opt.input, host = %opt.host, "starting pipeline");

    let reader = MetricReader::new(
        Box::new(DelimReader::new(input)),
        Box::new(JsonDecoder::new()),
    );
    let output = Output::new(
        Box::new(LineWriter::new(BufWriter::new(stream))),
        Box::new(PutEncoder::new()),
    );

    Runner::new(reader, output).run()
}
