use crate::utils::error::{EtlError, Result};
use std::path::{Component, Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Rejects configurations where the output would overwrite the input before it is read.
pub fn validate_distinct_paths(input: &str, output: &str) -> Result<()> {
    if normalize(input) == normalize(output) {
        return Err(EtlError::InvalidConfigValueError {
            field: "output.path".to_string(),
            value: output.to_string(),
            reason: format!("Output path must differ from input path '{}'", input),
        });
    }
    Ok(())
}

// Lexical only; symlinks and hard links are not resolved.
fn normalize(path: &str) -> PathBuf {
    Path::new(path)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input.path", "input.txt").is_ok());
        assert!(validate_path("input.path", "").is_err());
        assert!(validate_path("input.path", "   ").is_err());
        assert!(validate_path("input.path", "in\0put.txt").is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        assert!(validate_distinct_paths("input.txt", "output.txt").is_ok());
        assert!(validate_distinct_paths("input.txt", "input.txt").is_err());
        assert!(validate_distinct_paths("./input.txt", "input.txt").is_err());
        assert!(validate_distinct_paths("data/input.txt", "input.txt").is_ok());
    }
}
