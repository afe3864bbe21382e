use std::{
    ffi::{OsStr, OsString},
    fmt,
    io::{self, Write},
    os::unix::ffi::OsStrExt,
};

use chrono::{DateTime, Local, TimeZone};

use crate::{names::NameResolver, status::StatusSnapshot};

/// Abbreviated month, zero-padded day, 24-hour time.
pub const TIMESTAMP_FORMAT: &str = "%b %d %H:%M";

pub fn format_timestamp<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    t.format(TIMESTAMP_FORMAT).to_string()
}

/// One rendered long-format row.
///
/// Fields are space separated; the link count is padded to two columns and
/// the size to eight, wider values are not truncated. The name keeps its raw
/// bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongLine {
    pub permissions: String,
    pub nlink: u64,
    pub owner: String,
    pub group: String,
    pub size: u64,
    pub modified: String,
    pub name: OsString,
}

impl LongLine {
    /// Build a row with the timestamp in the process's local timezone.
    pub fn new(snapshot: &StatusSnapshot, name: &OsStr, names: &dyn NameResolver) -> Self {
        Self::in_timezone(snapshot, name, names, &Local)
    }

    pub fn in_timezone<Tz: TimeZone>(
        snapshot: &StatusSnapshot,
        name: &OsStr,
        names: &dyn NameResolver,
        tz: &Tz,
    ) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            permissions: snapshot.permissions(),
            nlink: snapshot.nlink,
            owner: names.user_or_unknown(snapshot.uid),
            group: names.group_or_unknown(snapshot.gid),
            size: snapshot.size,
            modified: format_timestamp(&snapshot.mtime.with_timezone(tz)),
            name: name.to_owned(),
        }
    }

    /// Every column before the name.
    pub fn columns(&self) -> String {
        format!(
            "{} {:>2} {} {} {:>8} {}",
            self.permissions, self.nlink, self.owner, self.group, self.size, self.modified
        )
    }

    /// Write the row and its newline.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{} ", self.columns())?;
        out.write_all(self.name.as_bytes())?;
        out.write_all(b"\n")
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
