//! Call-site metadata attached to every record.
//!
//! Locations come from `#[track_caller]`, so every function between the user's
//! call and [`CallSite::caller`] has to carry the attribute. A function in that
//! chain without it becomes the reported location.

use std::panic::Location;
use std::path::Path;

const UNKNOWN_PKG: &str = "???";
const UNKNOWN_SRC: &str = "???:0";

/// Where a log call was made: `pkg` is the source path without extension,
/// `src` is `<file>:<line>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pkg: String,
    src: String,
}

impl CallSite {
    /// Explicit, caller-supplied location.
    pub fn new(pkg: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            pkg: pkg.into(),
            src: src.into(),
        }
    }

    /// Sentinel used when the location cannot be resolved.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_PKG, UNKNOWN_SRC)
    }

    /// Location of the nearest caller not marked `#[track_caller]`.
    #[track_caller]
    pub fn caller() -> Self {
        Self::locate(Some(Location::caller()))
    }

    /// Resolve a location, falling back to [`CallSite::unknown`].
    pub fn locate(location: Option<&Location<'_>>) -> Self {
        match location {
            Some(loc) => Self::from_parts(loc.file(), loc.line()),
            None => Self::unknown(),
        }
    }

    fn from_parts(file: &str, line: u32) -> Self {
        let path = Path::new(file);
        let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
            return Self::unknown();
        };
        if line == 0 {
            return Self::unknown();
        }

        Self {
            pkg: path.with_extension("").to_string_lossy().into_owned(),
            src: format!("{}:{}", name, line),
        }
    }

    pub fn pkg(&self) -> &str {
        &self.pkg
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn is_unknown(&self) -> bool {
        self.pkg == UNKNOWN_PKG && self.src == UNKNOWN_SRC
    }
}
