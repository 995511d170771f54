use std::process::ExitCode;

use azd_core::{logging, Dispatcher};
use azd_ext_custom::CustomExtension;

fn main() -> ExitCode {
    logging::init_tracing();

    match CustomExtension::new() {
        Ok(extension) => Dispatcher::from_extension(&extension).run(std::env::args().skip(1)),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
