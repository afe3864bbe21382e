use std::{
    ffi::{OsStr, OsString},
    os::unix::ffi::OsStrExt,
    path::Path,
};

use log::debug;
use nix::{
    dir::{Dir, OwningIter},
    fcntl::OFlag,
    sys::stat::Mode,
};

/// Names from one open directory stream, in the order the OS yields them.
///
/// Unlike `std::fs::read_dir`, the stream includes `.` and `..`. The
/// directory handle is closed when the iterator is dropped.
pub struct EntryNames {
    inner: OwningIter,
}

impl Iterator for EntryNames {
    type Item = nix::Result<OsString>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.next()?;
        Some(entry.map(|e| OsStr::from_bytes(e.file_name().to_bytes()).to_owned()))
    }
}

/// Open `path` for enumeration.
pub fn read_entry_names(path: &Path) -> nix::Result<EntryNames> {
    let dir = Dir::open(
        path,
        OFlag::O_RDONLY | OFlag::O_DIRECTORY | OFlag::O_CLOEXEC,
        Mode::empty(),
    )?;
    debug!("[dir] opened {}", path.display());

    Ok(EntryNames {
        inner: dir.into_iter(),
    })
}

#[cfg(test)]
#[path = "dir_tests.rs"]
mod tests;
