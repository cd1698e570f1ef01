// Kaggle dataset handles

use crate::error::SourceError;
use std::fmt;

/// A parsed Kaggle dataset reference
///
/// Accepted shapes:
/// - `owner/dataset`
/// - `owner/dataset/versions/3`
/// - `dataset` (owner is the authenticated user)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetHandle {
    owner: Option<String>,
    slug: String,
    version: Option<u32>,
}

impl DatasetHandle {
    pub fn parse(raw: &str) -> Result<Self, SourceError> {
        let invalid = || SourceError::InvalidHandle(raw.to_string());

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let parts: Vec<&str> = trimmed.split('/').collect();
        if parts.iter().any(|p| p.trim().is_empty()) {
            return Err(invalid());
        }

        match parts.as_slice() {
            [slug] => Ok(Self {
                owner: None,
                slug: slug.to_string(),
                version: None,
            }),
            [owner, slug] => Ok(Self {
                owner: Some(owner.to_string()),
                slug: slug.to_string(),
                version: None,
            }),
            [owner, slug, "versions", number] => {
                let version = number.parse().map_err(|_| invalid())?;
                Ok(Self {
                    owner: Some(owner.to_string()),
                    slug: slug.to_string(),
                    version: Some(version),
                })
            },
            _ => Err(invalid()),
        }
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Owner, or `fallback` for bare handles
    pub fn owner_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.owner.as_deref().unwrap_or(fallback)
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn version(&self) -> Option<u32> {
        self.version
    }

    /// File name the downloaded archive is stored under
    pub fn archive_name(&self) -> String {
        format!("{}.zip", self.slug)
    }
}

impl fmt::Display for DatasetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(owner) = &self.owner {
            write!(f, "{}/", owner)?;
        }
        write!(f, "{}", self.slug)?;
        if let Some(version) = self.version {
            write!(f, "/versions/{}", version)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_owner_and_slug() {
        let handle = DatasetHandle::parse("acme/widgets-dataset").unwrap();

        assert_eq!(handle.owner(), Some("acme"));
        assert_eq!(handle.slug(), "widgets-dataset");
        assert_eq!(handle.version(), None);
        assert_eq!(handle.archive_name(), "widgets-dataset.zip");
        assert_eq!(handle.to_string(), "acme/widgets-dataset");
    }

    #[test]
    fn test_parse_versioned() {
        let handle = DatasetHandle::parse("acme/widgets-dataset/versions/7").unwrap();

        assert_eq!(handle.version(), Some(7));
        assert_eq!(handle.to_string(), "acme/widgets-dataset/versions/7");
    }

    #[test]
    fn test_parse_bare_slug_uses_fallback_owner() {
        let handle = DatasetHandle::parse("widgets-dataset").unwrap();

        assert_eq!(handle.owner(), None);
        assert_eq!(handle.owner_or("alice"), "alice");
        assert_eq!(handle.to_string(), "widgets-dataset");
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let handle = DatasetHandle::parse("  acme/widgets  ").unwrap();
        assert_eq!(handle.to_string(), "acme/widgets");
    }

    #[test]
    fn test_parse_rejects_malformed_handles() {
        for raw in [
            "",
            "   ",
            "acme/",
            "/widgets",
            "acme//widgets",
            "acme/widgets/extra",
            "acme/widgets/versions/latest",
            "acme/widgets/revisions/3",
            "acme/widgets/versions/3/files",
        ] {
            let err = DatasetHandle::parse(raw).unwrap_err();
            assert!(
                matches!(err, SourceError::InvalidHandle(ref h) if h == raw),
                "expected InvalidHandle for {raw:?}, got {err}"
            );
        }
    }
}
