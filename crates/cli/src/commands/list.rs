use std::{
    ffi::OsStr,
    io::{self, Write},
    path::{Path, PathBuf},
};

use dirlist_fs::{
    DisplayOptions, LongLine, NameResolver, check_path_len, describe, describe_errno, entry_path,
    read_entry_names, should_show, stat_path,
};
use dirlist_runtime::CURRENT_DIR;
use log::{debug, trace};

use crate::printer::HumanPrinter;

/// Operands from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Targets {
    /// No operands: list `.` without checking it first.
    CurrentDir,
    /// Operands in command-line order, never empty.
    Paths(Vec<PathBuf>),
}

impl Targets {
    pub fn from_operands(paths: Vec<PathBuf>) -> Self {
        if paths.is_empty() {
            Self::CurrentDir
        } else {
            Self::Paths(paths)
        }
    }

    pub fn count(&self) -> usize {
        match self {
            Self::CurrentDir => 1,
            Self::Paths(paths) => paths.len(),
        }
    }
}

/// Lists targets through a printer.
///
/// Every failure below the argument level is printed as a diagnostic and
/// skipped; only failures to write the listing itself are returned.
pub struct Lister<'a, W: Write, E: Write> {
    printer: &'a mut HumanPrinter<W, E>,
    names: &'a dyn NameResolver,
    options: DisplayOptions,
}

impl<'a, W: Write, E: Write> Lister<'a, W, E> {
    pub fn new(
        printer: &'a mut HumanPrinter<W, E>,
        names: &'a dyn NameResolver,
        options: DisplayOptions,
    ) -> Self {
        Self {
            printer,
            names,
            options,
        }
    }

    pub fn list(&mut self, targets: &Targets) -> io::Result<()> {
        match targets {
            Targets::CurrentDir => self.list_directory(Path::new(CURRENT_DIR)),
            Targets::Paths(paths) => self.list_targets(paths),
        }
    }

    /// Walk the command-line targets in order.
    ///
    /// Directories get a `<path>:` header when more than one target was
    /// given, and a blank line after them unless they are last. Anything
    /// else is shown as a single entry.
    pub fn list_targets(&mut self, targets: &[PathBuf]) -> io::Result<()> {
        let multiple = targets.len() > 1;

        for (i, target) in targets.iter().enumerate() {
            let snapshot = match stat_path(target) {
                Ok(s) => s,
                Err(e) => {
                    debug!("[list] stat({:?}) failed: {e}", target);
                    self.printer.diagnostic(None, target, &describe(&e));
                    continue;
                }
            };

            if !snapshot.is_dir {
                self.print_entry(Path::new(CURRENT_DIR), target.as_os_str())?;
                continue;
            }

            if multiple {
                self.printer.header(target)?;
            }
            self.list_directory(target)?;
            if i + 1 < targets.len() {
                self.printer.separator()?;
            }
        }

        Ok(())
    }

    /// Print the visible entries of one directory in stream order.
    pub fn list_directory(&mut self, path: &Path) -> io::Result<()> {
        let entries = match read_entry_names(path) {
            Ok(entries) => entries,
            Err(errno) => {
                debug!("[list] opendir({:?}) failed: {errno}", path);
                self.printer.diagnostic(Some("opendir"), path, describe_errno(errno));
                return Ok(());
            }
        };

        for entry in entries {
            let name = match entry {
                Ok(name) => name,
                Err(errno) => {
                    debug!("[list] readdir({:?}) failed: {errno}", path);
                    self.printer.diagnostic(Some("readdir"), path, describe_errno(errno));
                    break;
                }
            };

            if !should_show(&name, self.options.show_hidden) {
                trace!("[list] hidden: {:?}", name);
                continue;
            }

            self.print_entry(path, &name)?;
        }

        Ok(())
    }

    /// One row for `name` inside `parent`: the bare name, or the long line.
    fn print_entry(&mut self, parent: &Path, name: &OsStr) -> io::Result<()> {
        if !self.options.long_format {
            return self.printer.name(name);
        }

        let full_path = entry_path(parent, name);
        if let Err(e) = check_path_len(&full_path) {
            debug!("[list] skipping {:?}: {e}", full_path);
            self.printer.diagnostic(Some("stat"), &full_path, &describe(&e));
            return Ok(());
        }

        let snapshot = match stat_path(&full_path) {
            Ok(s) => s,
            Err(e) => {
                debug!("[list] stat({:?}) failed: {e}", full_path);
                self.printer.diagnostic(Some("stat"), &full_path, &describe(&e));
                return Ok(());
            }
        };

        let line = LongLine::new(&snapshot, name, self.names);
        self.printer.long_line(&line)
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
