//! Destination path handling

use crate::error::IngestError;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Convert any accepted path value into the path used for the rest of the run
///
/// Purely lexical: repeated separators, trailing separators and inner `.`
/// components are dropped, `..` is kept, and the filesystem is not touched.
/// An empty path means the current directory.
pub fn normalize_destination(destination: impl AsRef<Path>) -> PathBuf {
    let normalized: PathBuf = destination
        .as_ref()
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Create `directory` and any missing parents
///
/// Succeeds when the directory already exists. Fails when the path, or one
/// of its ancestors, exists as something other than a directory or cannot be
/// created.
pub async fn prepare_destination(directory: &Path) -> Result<(), IngestError> {
    tokio::fs::create_dir_all(directory)
        .await
        .map_err(|source| IngestError::Filesystem {
            path: directory.to_path_buf(),
            source,
        })?;

    debug!(directory = %directory.display(), "Destination directory ready");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_accepts_str_string_and_path() {
        let expected = PathBuf::from("/tmp/wh/raw");

        assert_eq!(normalize_destination("/tmp/wh/raw"), expected);
        assert_eq!(normalize_destination(String::from("/tmp/wh/raw")), expected);
        assert_eq!(normalize_destination(Path::new("/tmp/wh/raw")), expected);
        assert_eq!(normalize_destination(expected.clone()), expected);
    }

    #[test]
    fn test_normalize_collapses_separators_and_dots() {
        assert_eq!(normalize_destination("/tmp//wh/./raw/"), PathBuf::from("/tmp/wh/raw"));
        assert_eq!(normalize_destination("./data/raw"), PathBuf::from("data/raw"));
    }

    #[test]
    fn test_normalize_keeps_parent_components() {
        assert_eq!(normalize_destination("../shared/raw"), PathBuf::from("../shared/raw"));
    }

    #[test]
    fn test_normalize_empty_is_current_dir() {
        assert_eq!(normalize_destination(""), PathBuf::from("."));
        assert_eq!(normalize_destination("./"), PathBuf::from("."));
    }

    #[tokio::test]
    async fn test_prepare_creates_missing_ancestors() {
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("wh").join("raw").join("2026");

        prepare_destination(&target).await.unwrap();

        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn test_prepare_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("raw");

        prepare_destination(&target).await.unwrap();
        std::fs::write(target.join("existing.csv"), "id\n1\n").unwrap();
        prepare_destination(&target).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(&target).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert!(target.join("existing.csv").is_file());
    }

    #[tokio::test]
    async fn test_prepare_fails_when_ancestor_is_a_file() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let target = blocker.join("raw");

        let err = prepare_destination(&target).await.unwrap_err();

        match err {
            IngestError::Filesystem { path, .. } => assert_eq!(path, target),
            other => panic!("unexpected error: {other}"),
        }
    }
}
