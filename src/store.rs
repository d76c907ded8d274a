//! The owning table store: lazy loading, per-locale caching, and the
//! query surface over the loaded tables.
//!
//! `MetaStore` is the single component that owns table loading. Chapter
//! tables are cached per locale; the page and juz indexes are cached
//! globally. All cached tables sit behind `Arc` and are immutable, so a
//! raced double-load converges to identical data — the locks only avoid
//! redundant parsing. `invalidate` / `invalidate_locale` give callers an
//! explicit reload path instead of a hidden process-wide singleton.
//!
//! # Usage
//!
//! ```rust,no_run
//! use quran_meta::{ChapterId, MetaStore};
//!
//! # fn example() -> Result<(), quran_meta::MetaError> {
//! let store = MetaStore::bundled();
//! let chapters = store.chapters("fr")?;
//! let fatihah = chapters.get(ChapterId::new(1)?)?;
//! assert_eq!(fatihah.verses_count, 7);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::chapter::{ChapterId, ChaptersTable};
use crate::error::MetaError;
use crate::juz::{JuzId, JuzIndex, VerseRange};
use crate::locale::Locale;
use crate::page::{PageId, PageIndex};
use crate::source::{DataSource, Resource};

/// Lazy-loading, caching resolver over the static reference tables.
#[derive(Debug)]
pub struct MetaStore {
    source: DataSource,
    chapters: Mutex<BTreeMap<Locale, Arc<ChaptersTable>>>,
    pages: Mutex<Option<Arc<PageIndex>>>,
    juz: Mutex<Option<Arc<JuzIndex>>>,
}

/// Recover the guard from a poisoned lock. The caches hold only validated,
/// immutable `Arc`s, so observing a poisoned state is always safe.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl MetaStore {
    /// Create a store over an explicit data source.
    pub fn new(source: DataSource) -> MetaStore {
        MetaStore {
            source,
            chapters: Mutex::new(BTreeMap::new()),
            pages: Mutex::new(None),
            juz: Mutex::new(None),
        }
    }

    /// Create a store over the tables bundled into the binary.
    #[cfg(feature = "bundled")]
    pub fn bundled() -> MetaStore {
        MetaStore::new(DataSource::Bundled)
    }

    /// Create a store reading tables from a directory with the `data/`
    /// layout.
    pub fn from_dir(root: impl Into<PathBuf>) -> MetaStore {
        MetaStore::new(DataSource::Dir(root.into()))
    }

    /// The chapters table for a locale tag, loading it on first use.
    ///
    /// Unsupported tags silently resolve to the default locale (`en`);
    /// only a missing or corrupt backing resource fails.
    pub fn chapters(&self, tag: &str) -> Result<Arc<ChaptersTable>, MetaError> {
        self.chapters_for(Locale::resolve(tag))
    }

    /// The chapters table for an already-resolved locale.
    pub fn chapters_for(&self, locale: Locale) -> Result<Arc<ChaptersTable>, MetaError> {
        if let Some(table) = lock(&self.chapters).get(&locale) {
            return Ok(Arc::clone(table));
        }
        // Parse outside the lock; a concurrent load of the same locale
        // produces identical data and the first insert wins.
        let text = self.source.read(Resource::Chapters(locale))?;
        let table = Arc::new(ChaptersTable::from_json(locale, &text)?);
        let mut cache = lock(&self.chapters);
        Ok(Arc::clone(cache.entry(locale).or_insert(table)))
    }

    /// The page→chapter index, loading it on first use.
    pub fn page_index(&self) -> Result<Arc<PageIndex>, MetaError> {
        if let Some(index) = lock(&self.pages).as_ref() {
            return Ok(Arc::clone(index));
        }
        let text = self.source.read(Resource::PageToChapter)?;
        let index = Arc::new(PageIndex::from_json(&text)?);
        let mut cache = lock(&self.pages);
        Ok(Arc::clone(cache.get_or_insert(index)))
    }

    /// The combined juz index, loading both juz mapping files on first use.
    pub fn juz_index(&self) -> Result<Arc<JuzIndex>, MetaError> {
        if let Some(index) = lock(&self.juz).as_ref() {
            return Ok(Arc::clone(index));
        }
        let chapters_text = self.source.read(Resource::JuzToChapter)?;
        let ranges_text = self.source.read(Resource::JuzVerseRanges)?;
        let index = Arc::new(JuzIndex::from_json(&chapters_text, &ranges_text)?);
        let mut cache = lock(&self.juz);
        Ok(Arc::clone(cache.get_or_insert(index)))
    }

    /// Ordered chapter ids appearing on a page.
    pub fn chapter_ids_for_page(&self, page: PageId) -> Result<Vec<ChapterId>, MetaError> {
        Ok(self.page_index()?.chapter_ids(page)?.to_vec())
    }

    /// Ordered chapter ids contained in a juz.
    pub fn chapter_ids_for_juz(&self, juz: JuzId) -> Result<Vec<ChapterId>, MetaError> {
        Ok(self.juz_index()?.chapter_ids(juz)?.to_vec())
    }

    /// Per-chapter verse ranges of a juz.
    pub fn chapter_verse_mapping_for_juz(
        &self,
        juz: JuzId,
    ) -> Result<BTreeMap<ChapterId, VerseRange>, MetaError> {
        Ok(self.juz_index()?.verse_mapping(juz)?.clone())
    }

    /// Drop every cached table; the next query reloads from the source.
    pub fn invalidate(&self) {
        lock(&self.chapters).clear();
        *lock(&self.pages) = None;
        *lock(&self.juz) = None;
        log::debug!("invalidated all cached tables");
    }

    /// Drop one locale's cached chapters table.
    pub fn invalidate_locale(&self, locale: Locale) {
        lock(&self.chapters).remove(&locale);
        log::debug!("invalidated chapters table '{}'", locale);
    }
}

#[cfg(feature = "async")]
impl MetaStore {
    /// Non-blocking variant of [`MetaStore::chapters`].
    pub async fn chapters_async(&self, tag: &str) -> Result<Arc<ChaptersTable>, MetaError> {
        self.chapters_for_async(Locale::resolve(tag)).await
    }

    /// Non-blocking variant of [`MetaStore::chapters_for`].
    pub async fn chapters_for_async(
        &self,
        locale: Locale,
    ) -> Result<Arc<ChaptersTable>, MetaError> {
        if let Some(table) = lock(&self.chapters).get(&locale) {
            return Ok(Arc::clone(table));
        }
        let text = self.source.read_async(Resource::Chapters(locale)).await?;
        let table = Arc::new(ChaptersTable::from_json(locale, &text)?);
        let mut cache = lock(&self.chapters);
        Ok(Arc::clone(cache.entry(locale).or_insert(table)))
    }

    /// Non-blocking variant of [`MetaStore::page_index`].
    pub async fn page_index_async(&self) -> Result<Arc<PageIndex>, MetaError> {
        if let Some(index) = lock(&self.pages).as_ref() {
            return Ok(Arc::clone(index));
        }
        let text = self.source.read_async(Resource::PageToChapter).await?;
        let index = Arc::new(PageIndex::from_json(&text)?);
        let mut cache = lock(&self.pages);
        Ok(Arc::clone(cache.get_or_insert(index)))
    }

    /// Non-blocking variant of [`MetaStore::juz_index`].
    pub async fn juz_index_async(&self) -> Result<Arc<JuzIndex>, MetaError> {
        if let Some(index) = lock(&self.juz).as_ref() {
            return Ok(Arc::clone(index));
        }
        let chapters_text = self.source.read_async(Resource::JuzToChapter).await?;
        let ranges_text = self.source.read_async(Resource::JuzVerseRanges).await?;
        let index = Arc::new(JuzIndex::from_json(&chapters_text, &ranges_text)?);
        let mut cache = lock(&self.juz);
        Ok(Arc::clone(cache.get_or_insert(index)))
    }
}
