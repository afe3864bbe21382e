mod dir;
mod errors;
mod filter;
mod format;
mod mode;
mod names;
mod options;
mod status;

pub use dir::{EntryNames, read_entry_names};
pub use errors::{describe, describe_errno};
pub use filter::should_show;
pub use format::{LongLine, TIMESTAMP_FORMAT, format_timestamp};
pub use mode::{ModeBits, permission_string};
pub use names::{NameResolver, NameTable, SystemNames, UNKNOWN_NAME};
pub use options::DisplayOptions;
pub use status::{StatusSnapshot, check_path_len, entry_path, stat_path};
