pub mod types;
pub mod validation;

pub use types::*;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

/// Parses and validates the command line, exiting with a usage error on failure.
#[must_use]
pub fn args_checks() -> CleanArgs {
    let args = Args::parse();
    match args.validate() {
        Ok(clean) => clean,
        Err(e) => Args::command().error(ErrorKind::ArgumentConflict, e).exit(),
    }
}
