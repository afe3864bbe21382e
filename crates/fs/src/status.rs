use std::{
    ffi::{OsStr, OsString},
    fs::{self, Metadata},
    io,
    os::unix::fs::MetadataExt,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use dirlist_runtime::{CURRENT_DIR, MAX_PATH_LEN};
use log::trace;
use nix::errno::Errno;

use crate::mode::permission_string;

/// Point-in-time `stat` result for one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// Raw `st_mode`, type bits included.
    pub mode: u32,
    pub is_dir: bool,
    /// Hard link count
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    /// Size in bytes
    pub size: u64,
    /// Last modification time
    pub mtime: DateTime<Utc>,
}

impl StatusSnapshot {
    pub fn from_metadata(meta: &Metadata) -> Self {
        // st_mtime_nsec is always within 0..1_000_000_000.
        let mtime = DateTime::from_timestamp(meta.mtime(), meta.mtime_nsec() as u32)
            .unwrap_or_default();

        Self {
            mode: meta.mode(),
            is_dir: meta.is_dir(),
            nlink: meta.nlink(),
            uid: meta.uid(),
            gid: meta.gid(),
            size: meta.size(),
            mtime,
        }
    }

    pub fn permissions(&self) -> String {
        permission_string(self.mode, self.is_dir)
    }
}

/// `stat` a path, following symlinks.
pub fn stat_path(path: &Path) -> io::Result<StatusSnapshot> {
    let meta = fs::metadata(path)?;
    trace!("[stat] {}: mode {:o}", path.display(), meta.mode());
    Ok(StatusSnapshot::from_metadata(&meta))
}

/// Build the lookup path for `name` inside `parent`.
///
/// A parent of exactly `.` means `name` is used as is.
pub fn entry_path(parent: &Path, name: &OsStr) -> PathBuf {
    if parent.as_os_str() == OsStr::new(CURRENT_DIR) {
        return PathBuf::from(name);
    }

    let mut joined = OsString::with_capacity(parent.as_os_str().len() + 1 + name.len());
    joined.push(parent.as_os_str());
    joined.push("/");
    joined.push(name);
    PathBuf::from(joined)
}

/// Reject paths of `MAX_PATH_LEN` bytes or more with `ENAMETOOLONG`.
pub fn check_path_len(path: &Path) -> io::Result<()> {
    if path.as_os_str().len() >= MAX_PATH_LEN {
        return Err(io::Error::from(Errno::ENAMETOOLONG));
    }
    Ok(())
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
