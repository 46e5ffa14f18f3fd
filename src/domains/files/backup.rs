//! Backup-file writer.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use super::error::BackupError;

/// Suffix appended to a file path to name its backup copy.
pub const BACKUP_SUFFIX: &str = ".backup";

/// Permission bits for newly created backups (owner rw, group/other r).
#[cfg(unix)]
const BACKUP_MODE: u32 = 0o644;

/// Derive the backup path for `path` by appending [`BACKUP_SUFFIX`].
///
/// The suffix is appended to the full path, not swapped in for the
/// extension: `notes.txt` becomes `notes.txt.backup`.
pub fn backup_path(path: impl AsRef<Path>) -> PathBuf {
    let mut raw: OsString = path.as_ref().as_os_str().to_owned();
    raw.push(BACKUP_SUFFIX);
    PathBuf::from(raw)
}

/// Copy the full contents of `path` into its sibling backup file.
///
/// The backup is created or truncated. Nothing is written when the source
/// cannot be read. The write is not atomic: a failure midway may leave a
/// truncated backup behind.
///
/// Returns the path of the backup that was written.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn create_backup(path: impl AsRef<Path>) -> Result<PathBuf, BackupError> {
    let source = path.as_ref();

    let content = fs::read(source).map_err(|e| {
        warn!("Failed to read source file: {}", e);
        BackupError::read(source, e)
    })?;

    let destination = backup_path(source);
    write_backup(&destination, &content).map_err(|e| {
        warn!("Failed to write backup '{}': {}", destination.display(), e);
        BackupError::write(&destination, e)
    })?;

    debug!(
        "Wrote {} bytes to '{}'",
        content.len(),
        destination.display()
    );
    Ok(destination)
}

fn write_backup(destination: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(BACKUP_MODE);
    }

    let mut file = options.open(destination)?;
    file.write_all(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backup_path_appends_suffix() {
        assert_eq!(
            backup_path("/tmp/notes.txt"),
            PathBuf::from("/tmp/notes.txt.backup")
        );
        assert_eq!(backup_path("Makefile"), PathBuf::from("Makefile.backup"));
    }

    #[test]
    fn test_backup_copies_content() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("main.rs");
        fs::write(&source, "fn main() {}\n").unwrap();

        let written = create_backup(&source).unwrap();

        assert_eq!(written, temp_dir.path().join("main.rs.backup"));
        assert_eq!(fs::read_to_string(&written).unwrap(), "fn main() {}\n");
        // Source is left untouched
        assert_eq!(fs::read_to_string(&source).unwrap(), "fn main() {}\n");
    }

    #[test]
    fn test_backup_preserves_binary_content() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("blob.bin");
        let bytes: Vec<u8> = vec![0x00, 0xff, 0x10, 0x80, 0x0a];
        fs::write(&source, &bytes).unwrap();

        let written = create_backup(&source).unwrap();
        assert_eq!(fs::read(written).unwrap(), bytes);
    }

    #[test]
    fn test_backup_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("config.toml");
        let stale = temp_dir.path().join("config.toml.backup");
        fs::write(&source, "new = true").unwrap();
        fs::write(&stale, "old = true\nwith = \"more bytes than the new content\"").unwrap();

        create_backup(&source).unwrap();
        assert_eq!(fs::read_to_string(&stale).unwrap(), "new = true");
    }

    #[test]
    fn test_backup_of_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("empty");
        fs::write(&source, "").unwrap();

        let written = create_backup(&source).unwrap();
        assert!(written.exists());
        assert!(fs::read(written).unwrap().is_empty());
    }

    #[test]
    fn test_missing_source_creates_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("missing.txt");

        let err = create_backup(&source).unwrap_err();
        assert!(matches!(err, BackupError::Read { .. }));
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert_eq!(err.path(), &source);
        assert!(!backup_path(&source).exists());
    }

    #[test]
    fn test_unwritable_destination_is_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("data.txt");
        fs::write(&source, "data").unwrap();
        // A directory squatting on the backup path makes the open fail
        fs::create_dir(backup_path(&source)).unwrap();

        let err = create_backup(&source).unwrap_err();
        assert!(matches!(err, BackupError::Write { .. }));
        assert_eq!(err.path(), &backup_path(&source));
    }

    #[cfg(unix)]
    #[test]
    fn test_new_backup_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("perm.txt");
        fs::write(&source, "x").unwrap();

        let written = create_backup(&source).unwrap();
        let mode = fs::metadata(written).unwrap().permissions().mode() & 0o777;
        // Never more permissive than 0644; umask may only remove bits
        assert_eq!(mode & !BACKUP_MODE, 0);
        assert_ne!(mode & 0o600, 0);
    }
}
