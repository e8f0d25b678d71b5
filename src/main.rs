use checkperms::{
    Cli, TracingReporter, error::EXIT_UNKNOWN_ERROR, handlers::handle_audit, logging,
};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.debug) {
        eprintln!("checkperms: {}", e);
        return ExitCode::from(EXIT_UNKNOWN_ERROR);
    }

    let mut reporter = TracingReporter::new();
    handle_audit(&cli, &mut reporter).into()
}
