//! Where a dataset is read from.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// A remote URL or a local file holding the CSV.
///
/// The string form doubles as the cache key in
/// [`DatasetCache`](crate::cache::DatasetCache).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataLocation {
    /// `http://` or `https://` URL.
    Url(String),
    /// Path on the local filesystem.
    File(PathBuf),
}

impl DataLocation {
    /// Stable identifier used to key cached tables.
    #[must_use]
    pub fn cache_key(&self) -> String {
        self.to_string()
    }

    /// Whether the resource name ends in `.gz`.
    #[must_use]
    pub fn looks_gzipped(&self) -> bool {
        match self {
            Self::Url(url) => url
                .split(['?', '#'])
                .next()
                .is_some_and(|path| path.ends_with(".gz")),
            Self::File(path) => path.extension().is_some_and(|ext| ext == "gz"),
        }
    }
}

impl fmt::Display for DataLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl FromStr for DataLocation {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Self::Url(s.to_string()))
        } else {
            Ok(Self::File(PathBuf::from(s)))
        }
    }
}

impl From<&str> for DataLocation {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(location) => location,
            Err(never) => match never {},
        }
    }
}
