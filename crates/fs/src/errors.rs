use std::io;

use nix::errno::Errno;

/// Human description of an I/O error, in the `strerror` wording for OS errors.
pub fn describe(err: &io::Error) -> String {
    match err.raw_os_error() {
        Some(code) => describe_errno(Errno::from_raw(code)).to_owned(),
        None => err.to_string(),
    }
}

pub fn describe_errno(errno: Errno) -> &'static str {
    errno.desc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_errors_use_errno_text() {
        let err = io::Error::from_raw_os_error(Errno::ENOENT as i32);
        assert_eq!(describe(&err), "No such file or directory");
    }

    #[test]
    fn custom_errors_use_display() {
        let err = io::Error::other("boom");
        assert_eq!(describe(&err), "boom");
    }
}
