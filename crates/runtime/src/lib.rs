mod config;
pub mod logging;

pub use config::{CURRENT_DIR, MAX_PATH_LEN, PROGRAM_LOG_LEVEL, PROGRAM_NAME};

pub use logging::init;
