pub const PROGRAM_NAME: &str = "dirlist";
pub const PROGRAM_LOG_LEVEL: &str = "DIRLIST_LOG_LEVEL";

/// Upper bound, in bytes, for a path built from a directory and an entry name.
/// Joined paths at or past this length are reported instead of truncated.
pub const MAX_PATH_LEN: usize = 4096;

/// Parent path that means "the entry name is already the path".
pub const CURRENT_DIR: &str = ".";
