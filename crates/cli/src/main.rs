use std::process::ExitCode;

mod commands;
mod printer;

use dirlist_runtime::logging;

fn main() -> ExitCode {
    logging::init().ok();

    commands::run(std::env::args_os().collect())
}
