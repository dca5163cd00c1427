use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;

/// Persisted best-depth record. Written atomically whenever the record
/// improves; a corrupt or missing file just means a fresh record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DepthRecordFile {
    pub format_version: u32,
    pub best_depth: u32,
    pub updated_at_unix_ms: u64,
}

impl DepthRecordFile {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("depth_record.json");
            path
        })
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let record: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_json_roundtrip() {
        let record =
            DepthRecordFile { format_version: 1, best_depth: 14, updated_at_unix_ms: 1756500000000 };

        let json = serde_json::to_string(&record).unwrap();
        let decoded: DepthRecordFile = serde_json::from_str(&json).unwrap();
        assert_eq!(record, decoded);
    }

    #[test]
    fn test_atomic_write_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("record.json");

        let record = DepthRecordFile { format_version: 1, best_depth: 3, updated_at_unix_ms: 0 };

        record.write_atomic(&path).unwrap();
        assert!(path.exists());

        let loaded = DepthRecordFile::load(&path).unwrap();
        assert_eq!(record, loaded);

        // Verify tmp file is gone
        let tmp_path = path.with_extension("json.tmp");
        assert!(!tmp_path.exists());
    }

    #[test]
    fn corrupt_file_loads_as_invalid_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("record.json");
        fs::write(&path, "{not json").unwrap();

        let err = DepthRecordFile::load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn missing_file_loads_as_not_found() {
        let dir = tempdir().unwrap();
        let err = DepthRecordFile::load(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
