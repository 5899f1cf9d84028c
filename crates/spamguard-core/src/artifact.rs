//! Persistence of trained components.
//!
//! Each component is stored as a standalone pretty-printed JSON document.
//! Callers should treat the files as opaque.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{Result, SpamGuardError};

/// Default file name of the serialized classifier.
pub const MODEL_FILE: &str = "spam_model.json";

/// Default file name of the serialized vectorizer.
pub const VECTORIZER_FILE: &str = "vectorizer.json";

/// Default directory the trainer writes to and the front-ends read from.
pub const DEFAULT_DIR: &str = "models";

/// Locations of the two artifacts produced by a training run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub vectorizer: PathBuf,
}

impl ArtifactPaths {
    pub fn new(model: impl Into<PathBuf>, vectorizer: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            vectorizer: vectorizer.into(),
        }
    }

    /// Default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(MODEL_FILE), dir.join(VECTORIZER_FILE))
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DIR)
    }
}

/// Writes `value` to `path`, creating parent directories as needed.
pub fn save<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), "artifact saved");
    Ok(())
}

/// Reads a value previously written by [`save`].
///
/// # Errors
///
/// - `ArtifactMissing` if `path` does not exist.
/// - `Io` if it exists but cannot be read.
/// - `ArtifactCorrupt` if the contents do not decode.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = match std::fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SpamGuardError::ArtifactMissing {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let value = serde_json::from_slice(&content).map_err(|e| SpamGuardError::ArtifactCorrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!(path = %path.display(), "artifact loaded");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_dir_uses_default_names() {
        let paths = ArtifactPaths::in_dir("out");
        assert_eq!(paths.model, Path::new("out").join("spam_model.json"));
        assert_eq!(paths.vectorizer, Path::new("out").join("vectorizer.json"));
        assert_eq!(ArtifactPaths::default(), ArtifactPaths::in_dir("models"));
    }

    #[test]
    fn save_creates_directories_and_load_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("value.json");
        save(&vec![1u32, 2, 3], &path).unwrap();
        let back: Vec<u32> = load(&path).unwrap();
        assert_eq!(back, vec![1, 2, 3]);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load::<Vec<u32>>(&path).unwrap_err();
        assert!(matches!(err, SpamGuardError::ArtifactMissing { path: p } if p == path));
    }

    #[test]
    fn load_garbage_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.json");
        std::fs::write(&path, b"\x80not json").unwrap();
        let err = load::<Vec<u32>>(&path).unwrap_err();
        assert!(matches!(err, SpamGuardError::ArtifactCorrupt { .. }));

        std::fs::write(&path, "{\"oops\":").unwrap();
        let err = load::<Vec<u32>>(&path).unwrap_err();
        assert!(matches!(err, SpamGuardError::ArtifactCorrupt { .. }));
    }
}
