use std::fmt;
use std::panic::Location;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

const UNKNOWN: &str = "-";

/// Short origin tag for the code that invoked a check.
///
/// Renders as `origin:line`, `origin` when no line is known, or `-` when the
/// origin could not be resolved. Intended for diagnostics only; do not parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    origin: Option<String>,
    line: Option<u32>,
}

impl Locator {
    /// Resolves the caller tracked through `#[track_caller]`.
    ///
    /// Every public check is `#[track_caller]`, so inside a check this lands
    /// on the code that called the check rather than the check itself.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(origin_name(location.file()), Some(location.line()))
    }

    /// Builds a locator from an explicit origin. An origin that is blank after
    /// trimming yields the unknown sentinel.
    pub fn new(origin: impl AsRef<str>, line: Option<u32>) -> Self {
        let origin = origin.as_ref().trim();
        if origin.is_empty() {
            return Self::unknown();
        }
        Self {
            origin: Some(origin.to_string()),
            line,
        }
    }

    pub fn unknown() -> Self {
        Self {
            origin: None,
            line: None,
        }
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }

    pub fn is_unknown(&self) -> bool {
        self.origin.is_none()
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.origin, self.line) {
            (Some(origin), Some(line)) => write!(f, "{origin}:{line}"),
            (Some(origin), None) => f.write_str(origin),
            (None, _) => f.write_str(UNKNOWN),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for Locator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Last path component of a source file, without its `.rs` extension.
fn origin_name(file: &str) -> &str {
    let base = file.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(file);
    base.strip_suffix(".rs").unwrap_or(base).trim()
}
