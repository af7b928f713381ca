// Phonebook - platform/fs.rs
//
// Filesystem access for the contact export.

use crate::util::error::LoadError;
use std::path::Path;

/// Read the full content of a file as strict UTF-8.
///
/// Unlike a lossy read, invalid UTF-8 fails the whole read: a half-decoded
/// export would silently lose contacts.
pub fn read_file_utf8(path: &Path) -> Result<String, LoadError> {
    let bytes = std::fs::read(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    String::from_utf8(bytes).map_err(|e| LoadError::InvalidEncoding {
        path: path.to_path_buf(),
        source: e,
    })
}
