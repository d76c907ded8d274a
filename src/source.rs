//! Where the static JSON reference tables come from.
//!
//! Two sources exist: the tables bundled into the binary at compile time
//! (default `bundled` feature) and a filesystem directory laid out the same
//! way as the shipped `data/` directory. Reads are the only suspending
//! operation in the crate; the `async` feature adds tokio-backed variants.

use std::borrow::Cow;
use std::path::PathBuf;

use crate::error::MetaError;
use crate::locale::Locale;

/// One of the static reference resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    /// The per-locale chapters table.
    Chapters(Locale),
    /// The page→chapter mapping.
    PageToChapter,
    /// The juz→chapter mapping.
    JuzToChapter,
    /// The juz→chapter-verse-range mapping.
    JuzVerseRanges,
}

impl Resource {
    /// Path of the resource relative to the data root.
    pub fn rel_path(self) -> String {
        match self {
            Resource::Chapters(locale) => format!("chapters/{}.json", locale),
            Resource::PageToChapter => "page-to-chapter-mappings.json".into(),
            Resource::JuzToChapter => "juz-to-chapter-mappings.json".into(),
            Resource::JuzVerseRanges => "juz-to-chapter-verse-mappings.json".into(),
        }
    }
}

/// A source of reference-table JSON text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// Tables compiled into the binary from `data/`.
    #[cfg(feature = "bundled")]
    Bundled,
    /// Tables read from a directory with the `data/` layout.
    Dir(PathBuf),
}

impl DataSource {
    /// Read a resource's JSON text.
    pub fn read(&self, resource: Resource) -> Result<Cow<'static, str>, MetaError> {
        match self {
            #[cfg(feature = "bundled")]
            DataSource::Bundled => Ok(Cow::Borrowed(bundled_text(resource))),
            DataSource::Dir(root) => {
                let path = root.join(resource.rel_path());
                std::fs::read_to_string(&path).map(Cow::Owned).map_err(|e| {
                    MetaError::DataLoad(format!("read {}: {}", path.display(), e))
                })
            }
        }
    }

    /// Read a resource's JSON text without blocking. The bundled source
    /// resolves immediately.
    #[cfg(feature = "async")]
    pub async fn read_async(&self, resource: Resource) -> Result<Cow<'static, str>, MetaError> {
        match self {
            #[cfg(feature = "bundled")]
            DataSource::Bundled => Ok(Cow::Borrowed(bundled_text(resource))),
            DataSource::Dir(root) => {
                let path = root.join(resource.rel_path());
                tokio::fs::read_to_string(&path)
                    .await
                    .map(Cow::Owned)
                    .map_err(|e| MetaError::DataLoad(format!("read {}: {}", path.display(), e)))
            }
        }
    }
}

#[cfg(feature = "bundled")]
fn bundled_text(resource: Resource) -> &'static str {
    match resource {
        Resource::Chapters(Locale::En) => include_str!("../data/chapters/en.json"),
        Resource::Chapters(Locale::Ar) => include_str!("../data/chapters/ar.json"),
        Resource::Chapters(Locale::Bn) => include_str!("../data/chapters/bn.json"),
        Resource::Chapters(Locale::Fr) => include_str!("../data/chapters/fr.json"),
        Resource::Chapters(Locale::Id) => include_str!("../data/chapters/id.json"),
        Resource::Chapters(Locale::It) => include_str!("../data/chapters/it.json"),
        Resource::Chapters(Locale::Nl) => include_str!("../data/chapters/nl.json"),
        Resource::Chapters(Locale::Ru) => include_str!("../data/chapters/ru.json"),
        Resource::Chapters(Locale::Tr) => include_str!("../data/chapters/tr.json"),
        Resource::Chapters(Locale::Ur) => include_str!("../data/chapters/ur.json"),
        Resource::Chapters(Locale::Zh) => include_str!("../data/chapters/zh.json"),
        Resource::PageToChapter => include_str!("../data/page-to-chapter-mappings.json"),
        Resource::JuzToChapter => include_str!("../data/juz-to-chapter-mappings.json"),
        Resource::JuzVerseRanges => include_str!("../data/juz-to-chapter-verse-mappings.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rel_paths() {
        assert_eq!(Resource::Chapters(Locale::En).rel_path(), "chapters/en.json");
        assert_eq!(Resource::Chapters(Locale::Zh).rel_path(), "chapters/zh.json");
        assert_eq!(
            Resource::PageToChapter.rel_path(),
            "page-to-chapter-mappings.json"
        );
        assert_eq!(
            Resource::JuzVerseRanges.rel_path(),
            "juz-to-chapter-verse-mappings.json"
        );
    }

    #[cfg(feature = "bundled")]
    #[test]
    fn test_bundled_resources_are_nonempty_json() {
        for locale in Locale::ALL {
            let text = DataSource::Bundled
                .read(Resource::Chapters(locale))
                .unwrap();
            assert!(text.trim_start().starts_with('{'), "locale {}", locale);
        }
        for resource in [
            Resource::PageToChapter,
            Resource::JuzToChapter,
            Resource::JuzVerseRanges,
        ] {
            let text = DataSource::Bundled.read(resource).unwrap();
            assert!(!text.is_empty());
        }
    }

    #[test]
    fn test_dir_source_missing_file_is_data_load() {
        let source = DataSource::Dir(PathBuf::from("/nonexistent/quran-meta-data"));
        let err = source.read(Resource::PageToChapter).unwrap_err();
        assert!(matches!(err, MetaError::DataLoad(_)));
    }
}
