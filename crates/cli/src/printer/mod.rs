use std::{
    ffi::OsStr,
    io::{self, Write},
    os::unix::ffi::OsStrExt,
    path::Path,
};

use dirlist_fs::LongLine;
use log::debug;

/// Writes listing output to `out` and diagnostics to `err`.
///
/// Names and paths are written as raw bytes so non-UTF-8 names survive.
pub struct HumanPrinter<W: Write, E: Write> {
    out: W,
    err: E,
}

impl<W: Write, E: Write> HumanPrinter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }

    /// Short format row: the bare name.
    pub fn name(&mut self, name: &OsStr) -> io::Result<()> {
        self.out.write_all(name.as_bytes())?;
        self.out.write_all(b"\n")
    }

    pub fn long_line(&mut self, line: &LongLine) -> io::Result<()> {
        line.write_to(&mut self.out)
    }

    /// `<path>:` line above a directory's entries when several targets are listed.
    pub fn header(&mut self, path: &Path) -> io::Result<()> {
        self.out.write_all(path.as_os_str().as_bytes())?;
        self.out.write_all(b":\n")
    }

    pub fn separator(&mut self) -> io::Result<()> {
        self.out.write_all(b"\n")
    }

    /// `[<label>: ]<path>: <detail>`, the `perror` layout.
    ///
    /// A diagnostic that cannot be written is dropped so the listing goes on.
    pub fn diagnostic(&mut self, label: Option<&str>, path: &Path, detail: &str) {
        if let Err(e) = self.write_diagnostic(label, path, detail) {
            debug!("[printer] dropped diagnostic for {:?}: {e}", path);
        }
    }

    fn write_diagnostic(
        &mut self,
        label: Option<&str>,
        path: &Path,
        detail: &str,
    ) -> io::Result<()> {
        if let Some(label) = label {
            write!(self.err, "{label}: ")?;
        }
        self.err.write_all(path.as_os_str().as_bytes())?;
        writeln!(self.err, ": {detail}")
    }

    pub fn usage(&mut self, program: &str) -> io::Result<()> {
        writeln!(self.out, "Usage: {program} [OPTION]... [FILE]...")?;
        writeln!(self.out, "List directory contents.")?;
        writeln!(self.out)?;
        writeln!(self.out, "Options:")?;
        writeln!(self.out, "  -l    use long listing format")?;
        writeln!(self.out, "  -a    show hidden files (starting with .)")?;
        writeln!(self.out, "  -h    display this help and exit")?;
        self.out.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

impl HumanPrinter<io::Stdout, io::Stderr> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}
