use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

/// Whether an entry called `name` should be listed.
///
/// Only a leading `.` hides an entry, and only while `show_hidden` is off.
/// `.` and `..` follow the same rule as every other dotted name.
pub fn should_show(name: impl AsRef<OsStr>, show_hidden: bool) -> bool {
    show_hidden || !name.as_ref().as_bytes().starts_with(b".")
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
