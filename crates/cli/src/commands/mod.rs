pub mod list;

use std::{ffi::OsString, os::unix::ffi::OsStrExt, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use dirlist_fs::{DisplayOptions, SystemNames};
use dirlist_runtime::PROGRAM_NAME;
use log::{debug, error};

use crate::printer::HumanPrinter;
use list::{Lister, Targets};

/// Exit status for unrecognized flags.
const EXIT_USAGE: u8 = 1;
/// Exit status when stdout or stderr cannot be written.
const EXIT_OUTPUT: u8 = 2;

#[derive(Debug, Parser)]
#[command(
    name = PROGRAM_NAME,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct ListArgs {
    /// Use long listing format
    #[arg(short = 'l')]
    pub long_format: bool,

    /// Show hidden files (starting with .)
    #[arg(short = 'a')]
    pub show_hidden: bool,

    /// Display usage and exit
    #[arg(short = 'h')]
    pub help: bool,

    /// Files or directories to list
    #[arg(value_name = "FILE")]
    pub paths: Vec<PathBuf>,
}

/// What the command line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Run {
        options: DisplayOptions,
        targets: Targets,
    },
    Help,
    Invalid,
}

/// Parse a full argument vector, program name first.
///
/// `-h` wins over everything else on the line, including flags that would
/// otherwise be rejected. No operands means the current directory.
pub fn parse_invocation(args: &[OsString]) -> Invocation {
    match ListArgs::try_parse_from(args) {
        Ok(parsed) if parsed.help => Invocation::Help,
        Ok(parsed) => {
            Invocation::Run {
                options: DisplayOptions {
                    long_format: parsed.long_format,
                    show_hidden: parsed.show_hidden,
                },
                targets: Targets::from_operands(parsed.paths),
            }
        }
        Err(_) if requests_help(args) => Invocation::Help,
        Err(e) => {
            debug!("[args] rejected: {:?}", e.kind());
            Invocation::Invalid
        }
    }
}

/// Whether any short-flag cluster before `--` contains `h`.
fn requests_help(args: &[OsString]) -> bool {
    args.iter()
        .skip(1)
        .map(|arg| arg.as_bytes())
        .take_while(|arg| *arg != b"--")
        .any(|arg| is_short_cluster(arg) && arg[1..].contains(&b'h'))
}

fn is_short_cluster(arg: &[u8]) -> bool {
    arg.len() > 1 && arg[0] == b'-' && arg[1] != b'-'
}

/// Name shown in the usage line.
pub fn program_name(args: &[OsString]) -> String {
    args.first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| PROGRAM_NAME.to_owned())
}

pub fn run(args: Vec<OsString>) -> ExitCode {
    let program = program_name(&args);
    let invocation = parse_invocation(&args);

    match execute(&program, invocation) {
        Ok(code) => code,
        Err(e) => {
            error!("[error] {e:#}");
            eprintln!("[{PROGRAM_NAME}] {e:#}");
            ExitCode::from(EXIT_OUTPUT)
        }
    }
}

fn execute(program: &str, invocation: Invocation) -> Result<ExitCode> {
    let mut printer = HumanPrinter::stdout();

    match invocation {
        Invocation::Help => {
            printer.usage(program).context("failed to write usage")?;
            Ok(ExitCode::SUCCESS)
        }
        Invocation::Invalid => {
            printer.usage(program).context("failed to write usage")?;
            Ok(ExitCode::from(EXIT_USAGE))
        }
        Invocation::Run { options, targets } => {
            debug!(
                "[list] {} target(s), long={}, all={}",
                targets.count(),
                options.long_format,
                options.show_hidden
            );

            Lister::new(&mut printer, &SystemNames, options)
                .list(&targets)
                .context("failed to write listing")?;
            printer.flush().context("failed to write listing")?;

            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
