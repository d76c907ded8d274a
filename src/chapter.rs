//! Chapter (surah) records, the per-locale chapters table, and the small
//! pure helpers that operate on chapter positions and reading progress.
//!
//! A chapters table maps zero-padded chapter-id keys (`"001"`..`"114"`) to
//! immutable [`ChapterRecord`]s. Tables are validated on load: exactly 114
//! entries, every key matching its record's id, no zero verse counts.
//!
//! # Usage
//!
//! ```rust,no_run
//! use quran_meta::{ChapterId, ChaptersTable};
//!
//! # fn example(table: &ChaptersTable) -> Result<(), quran_meta::MetaError> {
//! let id = ChapterId::new(1)?;
//! assert_eq!(table.name(id)?, "Al-Fatihah");
//! # Ok(())
//! # }
//! ```

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::MetaError;
use crate::locale::Locale;
use crate::revelation_order::REVELATION_ORDER;

/// Number of canonical chapters.
pub const CHAPTER_COUNT: u16 = 114;

/// A validated chapter id in `1..=114`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChapterId(u16);

impl ChapterId {
    /// First chapter in canonical order (Al-Fatihah).
    pub const FIRST: ChapterId = ChapterId(1);
    /// Last chapter in canonical order (An-Nas).
    pub const LAST: ChapterId = ChapterId(114);

    /// Validate a numeric chapter id.
    ///
    /// Ids outside `1..=114` are rejected with
    /// [`MetaError::ChapterNotFound`]; no table can contain them.
    pub fn new(id: u16) -> Result<ChapterId, MetaError> {
        if (1..=CHAPTER_COUNT).contains(&id) {
            Ok(ChapterId(id))
        } else {
            Err(MetaError::ChapterNotFound(id))
        }
    }

    /// The numeric id.
    pub const fn get(self) -> u16 {
        self.0
    }

    /// The zero-padded key used by the shipped chapter tables (`"001"`).
    pub(crate) fn table_key(self) -> String {
        format!("{:03}", self.0)
    }

    /// Iterate every chapter id in canonical order.
    pub fn all() -> impl Iterator<Item = ChapterId> {
        (1..=CHAPTER_COUNT).map(ChapterId)
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChapterId {
    type Err = MetaError;

    /// Parse a decimal chapter id, accepting both padded (`"001"`) and
    /// unpadded (`"1"`) forms as the mapping files use them interchangeably.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: u16 = s
            .parse()
            .map_err(|_| MetaError::DataLoad(format!("invalid chapter id '{}'", s)))?;
        ChapterId::new(id)
    }
}

/// One chapter's metadata, as shipped in the per-locale JSON tables.
///
/// Unknown JSON fields are ignored; the record is opaque beyond the fields
/// this layer reads.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChapterRecord {
    /// Canonical chapter number, `1..=114`.
    pub id: u16,
    /// Transliterated display name (e.g. `"Al-Fatihah"`).
    pub transliterated_name: String,
    /// Name translated into the table's locale.
    pub translated_name: String,
    /// Total verse count of the chapter.
    pub verses_count: u16,
    /// Place of revelation (`"makkah"` or `"madinah"`).
    pub revelation_place: String,
}

/// All 114 chapter records for one locale, keyed by zero-padded id.
///
/// Immutable once constructed. Construction validates the full table, so
/// every lookup miss after load means the id itself is out of range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChaptersTable {
    locale: Locale,
    by_key: BTreeMap<String, ChapterRecord>,
}

impl ChaptersTable {
    /// Parse and validate a chapters table from its JSON text.
    ///
    /// Fails with [`MetaError::DataLoad`] when the JSON is malformed, the
    /// entry count is not exactly 114, a key does not use the width-3
    /// zero-padded convention, a key disagrees with its record's `id`, or a
    /// record has a zero verse count.
    pub fn from_json(locale: Locale, text: &str) -> Result<ChaptersTable, MetaError> {
        let by_key: BTreeMap<String, ChapterRecord> = serde_json::from_str(text)
            .map_err(|e| MetaError::DataLoad(format!("chapters table '{}': {}", locale, e)))?;

        if by_key.len() != CHAPTER_COUNT as usize {
            return Err(MetaError::DataLoad(format!(
                "chapters table '{}': expected {} entries, found {}",
                locale,
                CHAPTER_COUNT,
                by_key.len()
            )));
        }
        for (key, record) in &by_key {
            let id: ChapterId = key.parse().map_err(|_| {
                MetaError::DataLoad(format!(
                    "chapters table '{}': invalid key '{}'",
                    locale,
                    key
                ))
            })?;
            if *key != id.table_key() {
                return Err(MetaError::DataLoad(format!(
                    "chapters table '{}': key '{}' is not zero-padded to width 3",
                    locale,
                    key
                )));
            }
            if record.id != id.get() {
                return Err(MetaError::DataLoad(format!(
                    "chapters table '{}': key '{}' maps to record id {}",
                    locale,
                    key,
                    record.id
                )));
            }
            if record.verses_count == 0 {
                return Err(MetaError::DataLoad(format!(
                    "chapters table '{}': chapter {} has zero verses",
                    locale,
                    record.id
                )));
            }
        }
        log::debug!("loaded chapters table '{}' ({} entries)", locale, by_key.len());
        Ok(ChaptersTable { locale, by_key })
    }

    /// The locale this table was loaded for.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Number of chapter records (always 114 after a successful load).
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Whether the table is empty. Never true for a loaded table; kept for
    /// API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Look up a chapter record by id.
    pub fn get(&self, id: ChapterId) -> Result<&ChapterRecord, MetaError> {
        self.by_key
            .get(&id.table_key())
            .ok_or(MetaError::ChapterNotFound(id.get()))
    }

    /// The transliterated display name of a chapter.
    pub fn name(&self, id: ChapterId) -> Result<&str, MetaError> {
        Ok(self.get(id)?.transliterated_name.as_str())
    }

    /// Iterate records in canonical id order.
    ///
    /// Zero-padded keys sort lexicographically in numeric order, so the
    /// underlying map order is already canonical.
    pub fn iter(&self) -> impl Iterator<Item = &ChapterRecord> {
        self.by_key.values()
    }
}

/// Which chapter ordering position checks use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReadingOrder {
    /// Canonical numbering, 1 through 114.
    #[default]
    Canonical,
    /// Chronological revelation order (see [`REVELATION_ORDER`]).
    Revelation,
}

/// Whether `id` is the first chapter under the given ordering.
pub fn is_first_chapter(id: ChapterId, order: ReadingOrder) -> bool {
    match order {
        ReadingOrder::Canonical => id.get() == 1,
        ReadingOrder::Revelation => REVELATION_ORDER[0] == id.get(),
    }
}

/// Whether `id` is the last chapter under the given ordering.
pub fn is_last_chapter(id: ChapterId, order: ReadingOrder) -> bool {
    match order {
        ReadingOrder::Canonical => id.get() == CHAPTER_COUNT,
        ReadingOrder::Revelation => REVELATION_ORDER[REVELATION_ORDER.len() - 1] == id.get(),
    }
}

/// Percentage of a chapter read so far, as `ceil(current * 100 / total)`.
///
/// The result is deliberately not clamped: a `current_verse` past the end of
/// the chapter yields a value over 100, matching the upstream behavior that
/// callers rely on to detect overshoot. A zero `total_verses` returns 0.
pub fn reading_progress(current_verse: u32, total_verses: u32) -> u32 {
    if total_verses == 0 {
        log::warn!("reading_progress called with zero total_verses");
        return 0;
    }
    (current_verse * 100).div_ceil(total_verses)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table_json(count: u16) -> String {
        let mut entries = Vec::with_capacity(count as usize);
        for id in 1..=count {
            entries.push(format!(
                r#""{:03}": {{"id": {}, "transliterated_name": "Surah {}", "translated_name": "Chapter {}", "verses_count": {}, "revelation_place": "makkah"}}"#,
                id,
                id,
                id,
                id,
                id + 2
            ));
        }
        format!("{{{}}}", entries.join(","))
    }

    // -- ChapterId tests ---

    #[test]
    fn test_chapter_id_bounds() {
        assert!(ChapterId::new(1).is_ok());
        assert!(ChapterId::new(114).is_ok());
        assert_eq!(ChapterId::new(0), Err(MetaError::ChapterNotFound(0)));
        assert_eq!(ChapterId::new(115), Err(MetaError::ChapterNotFound(115)));
    }

    #[test]
    fn test_chapter_id_table_key_padding() {
        assert_eq!(ChapterId::new(1).unwrap().table_key(), "001");
        assert_eq!(ChapterId::new(42).unwrap().table_key(), "042");
        assert_eq!(ChapterId::new(114).unwrap().table_key(), "114");
    }

    #[test]
    fn test_chapter_id_from_str_accepts_padded_and_unpadded() {
        assert_eq!("1".parse::<ChapterId>().unwrap().get(), 1);
        assert_eq!("001".parse::<ChapterId>().unwrap().get(), 1);
        assert_eq!("114".parse::<ChapterId>().unwrap().get(), 114);
        assert!("0".parse::<ChapterId>().is_err());
        assert!("115".parse::<ChapterId>().is_err());
        assert!("abc".parse::<ChapterId>().is_err());
        assert!("".parse::<ChapterId>().is_err());
    }

    #[test]
    fn test_chapter_id_display_unpadded() {
        assert_eq!(ChapterId::new(7).unwrap().to_string(), "7");
    }

    #[test]
    fn test_chapter_id_all() {
        let ids: Vec<ChapterId> = ChapterId::all().collect();
        assert_eq!(ids.len(), 114);
        assert_eq!(ids[0], ChapterId::FIRST);
        assert_eq!(ids[113], ChapterId::LAST);
    }

    // -- ChaptersTable tests ---

    #[test]
    fn test_table_from_json_valid() {
        let table = ChaptersTable::from_json(Locale::En, &sample_table_json(114)).unwrap();
        assert_eq!(table.len(), 114);
        assert_eq!(table.locale(), Locale::En);
        let id = ChapterId::new(3).unwrap();
        assert_eq!(table.get(id).unwrap().verses_count, 5);
        assert_eq!(table.name(id).unwrap(), "Surah 3");
    }

    #[test]
    fn test_table_rejects_wrong_entry_count() {
        let err = ChaptersTable::from_json(Locale::En, &sample_table_json(113)).unwrap_err();
        match err {
            MetaError::DataLoad(msg) => assert!(msg.contains("expected 114")),
            other => panic!("expected DataLoad, got {:?}", other),
        }
    }

    #[test]
    fn test_table_rejects_malformed_json() {
        let err = ChaptersTable::from_json(Locale::En, "{not json").unwrap_err();
        assert!(matches!(err, MetaError::DataLoad(_)));
    }

    #[test]
    fn test_table_rejects_unpadded_key() {
        let mut json = sample_table_json(114);
        json = json.replace(r#""001""#, r#""1""#);
        let err = ChaptersTable::from_json(Locale::En, &json).unwrap_err();
        match err {
            MetaError::DataLoad(msg) => assert!(msg.contains("zero-padded")),
            other => panic!("expected DataLoad, got {:?}", other),
        }
    }

    #[test]
    fn test_table_rejects_key_record_mismatch() {
        let mut json = sample_table_json(114);
        json = json.replace(r#""001": {"id": 1,"#, r#""001": {"id": 2,"#);
        let err = ChaptersTable::from_json(Locale::En, &json).unwrap_err();
        match err {
            MetaError::DataLoad(msg) => assert!(msg.contains("maps to record id")),
            other => panic!("expected DataLoad, got {:?}", other),
        }
    }

    #[test]
    fn test_table_iter_canonical_order() {
        let table = ChaptersTable::from_json(Locale::En, &sample_table_json(114)).unwrap();
        let ids: Vec<u16> = table.iter().map(|r| r.id).collect();
        let expected: Vec<u16> = (1..=114).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_table_get_miss_is_chapter_not_found() {
        // A table can only miss for out-of-range ids, which ChapterId::new
        // already rejects; exercise the constructor path.
        assert_eq!(ChapterId::new(200), Err(MetaError::ChapterNotFound(200)));
    }

    // -- Ordering helpers ---

    #[test]
    fn test_is_first_chapter_canonical() {
        assert!(is_first_chapter(ChapterId::new(1).unwrap(), ReadingOrder::Canonical));
        assert!(!is_first_chapter(ChapterId::new(2).unwrap(), ReadingOrder::Canonical));
    }

    #[test]
    fn test_is_first_chapter_revelation() {
        // Al-'Alaq (96) opens the revelation order, so 1 is not first there.
        assert!(is_first_chapter(ChapterId::new(96).unwrap(), ReadingOrder::Revelation));
        assert!(!is_first_chapter(ChapterId::new(1).unwrap(), ReadingOrder::Revelation));
    }

    #[test]
    fn test_is_last_chapter_canonical() {
        assert!(is_last_chapter(ChapterId::new(114).unwrap(), ReadingOrder::Canonical));
        assert!(!is_last_chapter(ChapterId::new(113).unwrap(), ReadingOrder::Canonical));
    }

    #[test]
    fn test_is_last_chapter_revelation() {
        // An-Nasr (110) closes the revelation order.
        assert!(is_last_chapter(ChapterId::new(110).unwrap(), ReadingOrder::Revelation));
        assert!(!is_last_chapter(ChapterId::new(114).unwrap(), ReadingOrder::Revelation));
    }

    // -- Reading progress ---

    #[test]
    fn test_reading_progress_complete() {
        assert_eq!(reading_progress(7, 7), 100);
    }

    #[test]
    fn test_reading_progress_rounds_up() {
        // ceil(100 / 7) = 15
        assert_eq!(reading_progress(1, 7), 15);
        // ceil(200 / 3) = 67
        assert_eq!(reading_progress(2, 3), 67);
    }

    #[test]
    fn test_reading_progress_not_clamped_above_100() {
        // Pass-through over 100 is the contract, not a bug: callers use it
        // to detect a current verse past the end of the chapter.
        assert_eq!(reading_progress(8, 7), 115);
    }

    #[test]
    fn test_reading_progress_zero_total() {
        assert_eq!(reading_progress(3, 0), 0);
    }

    #[test]
    fn test_reading_progress_zero_current() {
        assert_eq!(reading_progress(0, 7), 0);
    }
}
