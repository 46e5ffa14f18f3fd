//! Files domain module.
//!
//! Filesystem helpers shared by the servers. Currently a single operation:
//! writing a sibling `.backup` copy of a file before it gets touched.

mod backup;
mod error;

pub use backup::{BACKUP_SUFFIX, backup_path, create_backup};
pub use error::BackupError;
