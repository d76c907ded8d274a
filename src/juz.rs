//! Juz mappings: which chapters a juz spans and the inclusive verse range
//! of each chapter within it.
//!
//! Both mapping tables are loaded together and cross-validated: the chapter
//! list and the verse-range map of every juz must name the same chapters,
//! and chapter lists must be strictly ascending. A chapter id appearing in
//! a juz but failing [`ChapterId`] validation is a `DataLoad` error, which
//! is what makes the juz→chapter round-trip property hold by construction.

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeMap;

use crate::chapter::ChapterId;
use crate::error::MetaError;

/// Number of juz divisions.
pub const JUZ_COUNT: u8 = 30;

/// A validated juz id in `1..=30`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JuzId(u8);

impl JuzId {
    /// Validate a numeric juz id.
    pub fn new(id: u8) -> Result<JuzId, MetaError> {
        if (1..=JUZ_COUNT).contains(&id) {
            Ok(JuzId(id))
        } else {
            Err(MetaError::JuzNotFound(id))
        }
    }

    /// The numeric id.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Iterate every juz id in order.
    pub fn all() -> impl Iterator<Item = JuzId> {
        (1..=JUZ_COUNT).map(JuzId)
    }
}

impl fmt::Display for JuzId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JuzId {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: u8 = s
            .parse()
            .map_err(|_| MetaError::DataLoad(format!("invalid juz id '{}'", s)))?;
        JuzId::new(id)
    }
}

/// Inclusive verse range of a chapter within a juz, the typed form of the
/// literal `"<start>-<end>"` strings in the mapping data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct VerseRange {
    /// First verse of the range (1-based).
    pub start: u32,
    /// Last verse of the range, inclusive.
    pub end: u32,
}

impl VerseRange {
    /// Number of verses covered.
    pub const fn len(self) -> u32 {
        self.end - self.start + 1
    }

    /// Always false for a parsed range; kept for API symmetry with `len`.
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Whether `verse` falls inside the range.
    pub const fn contains(self, verse: u32) -> bool {
        verse >= self.start && verse <= self.end
    }
}

impl fmt::Display for VerseRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for VerseRange {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| MetaError::DataLoad(format!("invalid verse range '{}'", s)))?;
        let start: u32 = start
            .parse()
            .map_err(|_| MetaError::DataLoad(format!("invalid verse range '{}'", s)))?;
        let end: u32 = end
            .parse()
            .map_err(|_| MetaError::DataLoad(format!("invalid verse range '{}'", s)))?;
        if start == 0 || end < start {
            return Err(MetaError::DataLoad(format!(
                "invalid verse range '{}': start must be >= 1 and end >= start",
                s
            )));
        }
        Ok(VerseRange { start, end })
    }
}

/// The combined juz→chapter and juz→verse-range tables, validated and typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JuzIndex {
    chapters: BTreeMap<u8, Vec<ChapterId>>,
    verse_ranges: BTreeMap<u8, BTreeMap<ChapterId, VerseRange>>,
}

impl JuzIndex {
    /// Parse and cross-validate the two juz mapping files.
    ///
    /// `chapters_text` is the juz→chapter-id-list JSON, `ranges_text` the
    /// juz→(chapter→verse-range) JSON. Fails with [`MetaError::DataLoad`]
    /// when either file is malformed, a juz or chapter id is out of range,
    /// a chapter list is empty or not strictly ascending, or the two files
    /// disagree on the chapter set of any juz.
    pub fn from_json(chapters_text: &str, ranges_text: &str) -> Result<JuzIndex, MetaError> {
        let raw_chapters: BTreeMap<String, Vec<String>> = serde_json::from_str(chapters_text)
            .map_err(|e| MetaError::DataLoad(format!("juz-to-chapter mapping: {}", e)))?;
        let raw_ranges: BTreeMap<String, BTreeMap<String, String>> =
            serde_json::from_str(ranges_text)
                .map_err(|e| MetaError::DataLoad(format!("juz verse-range mapping: {}", e)))?;

        let mut chapters = BTreeMap::new();
        for (key, ids) in &raw_chapters {
            let juz: JuzId = key.parse()?;
            if ids.is_empty() {
                return Err(MetaError::DataLoad(format!("juz {} has no chapters", juz)));
            }
            let mut typed = Vec::with_capacity(ids.len());
            for id in ids {
                typed.push(id.parse::<ChapterId>()?);
            }
            if !typed.windows(2).all(|w| w[0] < w[1]) {
                return Err(MetaError::DataLoad(format!(
                    "juz {} chapter list is not strictly ascending",
                    juz
                )));
            }
            chapters.insert(juz.get(), typed);
        }

        let mut verse_ranges = BTreeMap::new();
        for (key, ranges) in &raw_ranges {
            let juz: JuzId = key.parse()?;
            let mut typed = BTreeMap::new();
            for (chapter, range) in ranges {
                typed.insert(chapter.parse::<ChapterId>()?, range.parse::<VerseRange>()?);
            }
            verse_ranges.insert(juz.get(), typed);
        }

        // The two files must describe the same juz set and, per juz, the
        // same chapter set.
        for juz in chapters.keys() {
            if !verse_ranges.contains_key(juz) {
                return Err(MetaError::DataLoad(format!(
                    "juz {} missing from verse-range mapping",
                    juz
                )));
            }
        }
        for (juz, ranges) in &verse_ranges {
            let Some(listed) = chapters.get(juz) else {
                return Err(MetaError::DataLoad(format!(
                    "juz {} missing from chapter mapping",
                    juz
                )));
            };
            if listed.len() != ranges.len() || !listed.iter().all(|c| ranges.contains_key(c)) {
                return Err(MetaError::DataLoad(format!(
                    "juz {} chapter list and verse ranges disagree",
                    juz
                )));
            }
        }

        log::debug!("loaded juz mappings ({} juz entries)", chapters.len());
        Ok(JuzIndex {
            chapters,
            verse_ranges,
        })
    }

    /// Number of juz entries in the loaded tables.
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Whether the index holds no juz entries.
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Ordered chapter ids contained in a juz.
    pub fn chapter_ids(&self, juz: JuzId) -> Result<&[ChapterId], MetaError> {
        self.chapters
            .get(&juz.get())
            .map(Vec::as_slice)
            .ok_or(MetaError::JuzNotFound(juz.get()))
    }

    /// Per-chapter verse ranges of a juz.
    pub fn verse_mapping(&self, juz: JuzId) -> Result<&BTreeMap<ChapterId, VerseRange>, MetaError> {
        self.verse_ranges
            .get(&juz.get())
            .ok_or(MetaError::JuzNotFound(juz.get()))
    }

    /// Iterate `(juz id, chapter ids)` pairs in juz order.
    pub fn iter(&self) -> impl Iterator<Item = (JuzId, &[ChapterId])> {
        self.chapters.iter().map(|(id, chs)| (JuzId(*id), chs.as_slice()))
    }
}
