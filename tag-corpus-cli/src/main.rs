//! tag-corpus command-line entry point

use clap::Parser;
use std::process::ExitCode;
use tag_corpus_cli::commands::ParseArgs;

fn main() -> ExitCode {
    let args = ParseArgs::parse();
    args.init_logging();

    match args.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("Run failed: {e:?}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
