//! Page→chapter mapping for the 604-page print layout.
//!
//! Each page lists the chapters appearing on it, in reading order. The
//! mapping is a direct lookup table; a missing page id is a
//! [`MetaError::PageNotFound`], never a silent empty result.

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeMap;

use crate::chapter::ChapterId;
use crate::error::MetaError;

/// A page id in the print layout. Validated against the loaded mapping at
/// lookup time rather than against a fixed range, since the page count is a
/// property of the shipped layout data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageId(u16);

impl PageId {
    /// Wrap a page number. Zero is rejected outright; anything else is
    /// checked against the mapping when looked up.
    pub fn new(id: u16) -> Result<PageId, MetaError> {
        if id == 0 {
            Err(MetaError::PageNotFound(0))
        } else {
            Ok(PageId(id))
        }
    }

    /// The numeric page number.
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageId {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: u16 = s
            .parse()
            .map_err(|_| MetaError::DataLoad(format!("invalid page id '{}'", s)))?;
        PageId::new(id)
    }
}

/// The page→chapter lookup table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageIndex {
    by_page: BTreeMap<u16, Vec<ChapterId>>,
}

impl PageIndex {
    /// Parse and validate the page-to-chapter mapping JSON.
    ///
    /// Fails with [`MetaError::DataLoad`] when the JSON is malformed, the
    /// mapping is empty, a page has no chapters, a chapter id is invalid,
    /// or a page's chapter list is not strictly ascending.
    pub fn from_json(text: &str) -> Result<PageIndex, MetaError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(text)
            .map_err(|e| MetaError::DataLoad(format!("page-to-chapter mapping: {}", e)))?;
        if raw.is_empty() {
            return Err(MetaError::DataLoad(
                "page-to-chapter mapping is empty".into(),
            ));
        }

        let mut by_page = BTreeMap::new();
        for (key, ids) in &raw {
            let page: PageId = key.parse()?;
            if ids.is_empty() {
                return Err(MetaError::DataLoad(format!(
                    "page {} has no chapters",
                    page
                )));
            }
            let mut typed = Vec::with_capacity(ids.len());
            for id in ids {
                typed.push(id.parse::<ChapterId>()?);
            }
            if !typed.windows(2).all(|w| w[0] < w[1]) {
                return Err(MetaError::DataLoad(format!(
                    "page {} chapter list is not strictly ascending",
                    page
                )));
            }
            by_page.insert(page.get(), typed);
        }

        log::debug!("loaded page mapping ({} pages)", by_page.len());
        Ok(PageIndex { by_page })
    }

    /// Number of pages in the loaded mapping.
    pub fn len(&self) -> usize {
        self.by_page.len()
    }

    /// Whether the mapping holds no pages. Never true after a successful
    /// load.
    pub fn is_empty(&self) -> bool {
        self.by_page.is_empty()
    }

    /// Ordered chapter ids appearing on a page.
    pub fn chapter_ids(&self, page: PageId) -> Result<&[ChapterId], MetaError> {
        self.by_page
            .get(&page.get())
            .map(Vec::as_slice)
            .ok_or(MetaError::PageNotFound(page.get()))
    }
}
