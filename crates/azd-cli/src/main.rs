use std::process::ExitCode;

use azd_cli::CoreCommands;
use azd_core::{logging, Dispatcher};
use tracing::debug;

fn main() -> ExitCode {
    logging::init_tracing();

    let core = match CoreCommands::new() {
        Ok(core) => core,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let dispatcher = Dispatcher::from_extension(&core);
    debug!("azd ready with {} commands", dispatcher.commands().len());

    dispatcher.run(std::env::args().skip(1))
}
