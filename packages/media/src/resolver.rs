use serde::{Deserialize, Serialize};

use crate::source::PhotoSource;

/// Root-relative prefix under which the application serves its own uploads.
pub const DEFAULT_STORAGE_PREFIX: &str = "/storage/";

/// Outcome of resolving a property's display photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedPhoto {
    /// A usable image URL: absolute, or root-relative under the storage prefix.
    Present(String),
    /// The record has no displayable photo.
    Absent,
}

impl ResolvedPhoto {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Present(url) => Some(url),
            Self::Absent => None,
        }
    }

    pub fn into_url(self) -> Option<String> {
        match self {
            Self::Present(url) => Some(url),
            Self::Absent => None,
        }
    }

    /// Display URL for a rendering collaborator: the resolved URL, else the
    /// configured fallback image, else nothing.
    pub fn or_fallback<'a>(&'a self, fallback: Option<&'a str>) -> Option<&'a str> {
        self.url().or(fallback)
    }
}

/// Picks the single representative image URL for a property listing.
///
/// Stateless apart from the configured storage prefix; every call is a pure
/// function of its inputs and is safe under concurrent use.
#[derive(Debug, Clone)]
pub struct PhotoResolver {
    storage_prefix: String,
}

impl Default for PhotoResolver {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_PREFIX)
    }
}

impl PhotoResolver {
    pub fn new(storage_prefix: impl Into<String>) -> Self {
        Self {
            storage_prefix: storage_prefix.into(),
        }
    }

    pub fn storage_prefix(&self) -> &str {
        &self.storage_prefix
    }

    /// Resolve the display photo for a record's photo source.
    ///
    /// An externally fetched photo list, when present and non-empty, wins
    /// outright and its first entry is returned verbatim; the caller has
    /// already resolved it to a usable URL. Otherwise the first candidate
    /// of `photos` is normalized against the storage prefix.
    pub fn resolve(&self, photos: &PhotoSource, external: Option<&[String]>) -> ResolvedPhoto {
        if let Some(url) = external.and_then(|urls| urls.first()) {
            return ResolvedPhoto::Present(url.clone());
        }
        match photos.first() {
            Some(candidate) => self.normalize(candidate),
            None => ResolvedPhoto::Absent,
        }
    }

    /// Every candidate of `photos`, normalized in order. Candidates that
    /// resolve to nothing (empty strings) are dropped.
    pub fn gallery(&self, photos: &PhotoSource) -> Vec<String> {
        photos
            .as_slice()
            .iter()
            .filter_map(|candidate| self.normalize(candidate).into_url())
            .collect()
    }

    /// Normalize a single URL candidate.
    ///
    /// Candidates carrying an absolute scheme pass through unchanged;
    /// anything else is joined under the storage prefix with exactly one
    /// `/`. An empty candidate resolves to `Absent`.
    fn normalize(&self, candidate: &str) -> ResolvedPhoto {
        if candidate.is_empty() {
            return ResolvedPhoto::Absent;
        }
        if has_absolute_scheme(candidate) {
            return ResolvedPhoto::Present(candidate.to_string());
        }
        let prefix = self.storage_prefix.trim_end_matches('/');
        let path = candidate.trim_start_matches('/');
        ResolvedPhoto::Present(format!("{prefix}/{path}"))
    }
}

fn has_absolute_scheme(candidate: &str) -> bool {
    candidate.starts_with("http://") || candidate.starts_with("https://")
}
