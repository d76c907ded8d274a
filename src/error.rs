//! Error types for table loading and metadata lookups.
//!
//! Two failure classes exist: `DataLoad` (a backing resource is missing,
//! unreadable, or fails validation — fatal, never retried internally) and
//! the `*NotFound` variants (a lookup missed a loaded table — recoverable,
//! the caller decides fallback behavior). An unsupported locale tag is not
//! an error at all: it silently resolves to the default locale (see
//! [`crate::locale::Locale::resolve`]).

use core::fmt;

/// Errors produced by the metadata resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetaError {
    /// A backing JSON resource is missing, unreadable, or failed
    /// load-time validation.
    DataLoad(String),
    /// The chapter id is outside `1..=114` or absent from the loaded table.
    ChapterNotFound(u16),
    /// The page id is absent from the page-to-chapter mapping.
    PageNotFound(u16),
    /// The juz id is outside `1..=30` or absent from the juz mappings.
    JuzNotFound(u8),
}

impl fmt::Display for MetaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaError::DataLoad(msg) => write!(f, "data load failed: {}", msg),
            MetaError::ChapterNotFound(id) => write!(f, "chapter {} not found", id),
            MetaError::PageNotFound(id) => write!(f, "page {} not found", id),
            MetaError::JuzNotFound(id) => write!(f, "juz {} not found", id),
        }
    }
}

impl std::error::Error for MetaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            MetaError::DataLoad("bad json".into()).to_string(),
            "data load failed: bad json"
        );
        assert_eq!(
            MetaError::ChapterNotFound(115).to_string(),
            "chapter 115 not found"
        );
        assert_eq!(MetaError::PageNotFound(700).to_string(), "page 700 not found");
        assert_eq!(MetaError::JuzNotFound(31).to_string(), "juz 31 not found");
    }
}
