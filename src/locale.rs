//! Supported chapter-table locales and the default-locale fallback policy.
//!
//! Chapter tables ship per locale. Resolving an unsupported tag never fails:
//! it silently falls back to [`Locale::En`], which is the documented policy
//! inherited from the upstream data set.

use core::fmt;
use core::str::FromStr;

/// Locales with a shipped chapter table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Locale {
    /// English (the default and fallback locale).
    #[default]
    En,
    /// Arabic.
    Ar,
    /// Bengali.
    Bn,
    /// French.
    Fr,
    /// Indonesian.
    Id,
    /// Italian.
    It,
    /// Dutch.
    Nl,
    /// Russian.
    Ru,
    /// Turkish.
    Tr,
    /// Urdu.
    Ur,
    /// Chinese.
    Zh,
}

impl Locale {
    /// Every supported locale, in table-shipping order.
    pub const ALL: [Locale; 11] = [
        Locale::En,
        Locale::Ar,
        Locale::Bn,
        Locale::Fr,
        Locale::Id,
        Locale::It,
        Locale::Nl,
        Locale::Ru,
        Locale::Tr,
        Locale::Ur,
        Locale::Zh,
    ];

    /// The BCP-47-style primary tag for this locale.
    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
            Locale::Bn => "bn",
            Locale::Fr => "fr",
            Locale::Id => "id",
            Locale::It => "it",
            Locale::Nl => "nl",
            Locale::Ru => "ru",
            Locale::Tr => "tr",
            Locale::Ur => "ur",
            Locale::Zh => "zh",
        }
    }

    /// Exact-match lookup of a locale tag. Returns `None` for anything
    /// outside the supported set.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        match tag {
            "en" => Some(Locale::En),
            "ar" => Some(Locale::Ar),
            "bn" => Some(Locale::Bn),
            "fr" => Some(Locale::Fr),
            "id" => Some(Locale::Id),
            "it" => Some(Locale::It),
            "nl" => Some(Locale::Nl),
            "ru" => Some(Locale::Ru),
            "tr" => Some(Locale::Tr),
            "ur" => Some(Locale::Ur),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }

    /// Resolve a locale tag, falling back to [`Locale::En`] when the tag is
    /// not in the supported set. This never fails; the fallback is the
    /// documented contract, not an error condition.
    pub fn resolve(tag: &str) -> Locale {
        match Locale::from_tag(tag) {
            Some(locale) => locale,
            None => {
                log::debug!("unsupported locale '{}', falling back to 'en'", tag);
                Locale::En
            }
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ();

    /// Strict parse; use [`Locale::resolve`] for the fallback behavior.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_tag(s).ok_or(())
    }
}
