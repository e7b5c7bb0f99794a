use crate::core::Storage;
use crate::utils::error::{EtlError, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

/// Files on the local filesystem, resolved against `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    fn open_reader(&self, path: &str) -> Result<Box<dyn BufRead>> {
        let file = File::open(self.resolve(path)).map_err(|source| EtlError::InputOpenError {
            path: path.to_string(),
            source,
        })?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn open_writer(&self, path: &str) -> Result<Box<dyn Write>> {
        let file = File::create(self.resolve(path)).map_err(|source| EtlError::OutputOpenError {
            path: path.to_string(),
            source,
        })?;
        Ok(Box::new(file))
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn test_open_reader_missing_file() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        match storage.open_reader("input.txt") {
            Err(EtlError::InputOpenError { path, .. }) => assert_eq!(path, "input.txt"),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("missing file opened"),
        }
    }

    #[test]
    fn test_open_writer_truncates() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("output.txt"), "stale content\n").unwrap();
        let storage = LocalStorage::new(dir.path());

        let mut writer = storage.open_writer("output.txt").unwrap();
        writer.write_all(b"Five\n").unwrap();
        drop(writer);

        let mut content = String::new();
        File::open(dir.path().join("output.txt"))
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "Five\n");
    }

    #[test]
    fn test_open_writer_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        assert!(matches!(
            storage.open_writer("missing/output.txt"),
            Err(EtlError::OutputOpenError { .. })
        ));
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        storage.write_file("reports/summary.json", b"{}").unwrap();
        assert!(dir.path().join("reports/summary.json").exists());
    }
}
