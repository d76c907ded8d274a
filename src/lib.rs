//! Typed chapter (surah), juz, and page metadata resolver for the Quran.
//!
//! The crate is a pure lookup layer over four static JSON reference tables:
//! per-locale chapter records, a page→chapter mapping, a juz→chapter
//! mapping, and a juz→chapter-verse-range mapping. Tables load lazily, are
//! validated up front, and are immutable afterwards; every query is a pure
//! lookup or computation.
//!
//! # Usage
//!
//! ```rust,no_run
//! use quran_meta::{ChapterId, JuzId, MetaStore, PageId, ReadingOrder};
//!
//! # fn example() -> Result<(), quran_meta::MetaError> {
//! let store = MetaStore::bundled();
//!
//! let chapters = store.chapters("en")?;
//! let id = ChapterId::new(1)?;
//! assert_eq!(chapters.name(id)?, "Al-Fatihah");
//! assert!(quran_meta::is_first_chapter(id, ReadingOrder::Canonical));
//!
//! let on_page_one = store.chapter_ids_for_page(PageId::new(1)?)?;
//! assert_eq!(on_page_one, vec![id]);
//!
//! let juz_one = store.chapter_verse_mapping_for_juz(JuzId::new(1)?)?;
//! assert_eq!(juz_one[&ChapterId::new(2)?].to_string(), "1-141");
//! # Ok(())
//! # }
//! ```
//!
//! Unsupported locale tags are not errors: they silently resolve to the
//! default `en` table. Lookup misses surface as typed `NotFound` errors;
//! missing or corrupt backing data surfaces as [`MetaError::DataLoad`].

#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented
    )
)]

pub mod chapter;
pub mod error;
pub mod juz;
pub mod locale;
pub mod page;
pub mod revelation_order;
pub mod source;
pub mod store;

pub use chapter::{
    is_first_chapter, is_last_chapter, reading_progress, ChapterId, ChapterRecord, ChaptersTable,
    ReadingOrder, CHAPTER_COUNT,
};
pub use error::MetaError;
pub use juz::{JuzId, JuzIndex, VerseRange, JUZ_COUNT};
pub use locale::Locale;
pub use page::{PageId, PageIndex};
pub use revelation_order::REVELATION_ORDER;
pub use source::{DataSource, Resource};
pub use store::MetaStore;
