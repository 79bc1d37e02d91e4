//! Error kinds: open-ended, machine-readable labels.

use core::fmt;

use alloc::borrow::Cow;
use alloc::string::String;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A static, machine-readable label for a class of errors.
///
/// Kinds are an extensible alternative to status codes: errors from the same
/// condition share a kind, and any crate can mint new ones without touching
/// this library. Two kinds are equal exactly when their labels are equal.
///
/// # Examples
///
/// ```
/// use error_class::Kind;
///
/// const NOT_FOUND: Kind = Kind::from_static("not_found");
///
/// assert_eq!(NOT_FOUND, "not_found");
/// assert_eq!(Kind::new(String::from("not_found")), NOT_FOUND);
/// assert_ne!(NOT_FOUND, Kind::UNKNOWN);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Kind(Cow<'static, str>);

impl Kind {
    /// Catch-all kind for errors that carry no classification.
    pub const UNKNOWN: Kind = Kind::from_static("unknown");

    /// Kind for authenticated callers lacking permission for an action.
    pub const NOT_AUTHORIZED: Kind = Kind::from_static("not_authorized");

    /// Creates a kind from a static label. Usable in `const` items.
    #[inline]
    pub const fn from_static(label: &'static str) -> Self {
        Self(Cow::Borrowed(label))
    }

    /// Creates a kind from any borrowed-static or owned label.
    #[inline]
    pub fn new<S: Into<Cow<'static, str>>>(label: S) -> Self {
        Self(label.into())
    }

    /// Returns the label.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the catch-all [`Kind::UNKNOWN`].
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.as_str() == Self::UNKNOWN.as_str()
    }
}

impl Default for Kind {
    #[inline]
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Kind {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&'static str> for Kind {
    #[inline]
    fn from(label: &'static str) -> Self {
        Self::from_static(label)
    }
}

impl From<String> for Kind {
    #[inline]
    fn from(label: String) -> Self {
        Self(Cow::Owned(label))
    }
}

impl PartialEq<str> for Kind {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Kind {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<Kind> for str {
    #[inline]
    fn eq(&self, other: &Kind) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<Kind> for &str {
    #[inline]
    fn eq(&self, other: &Kind) -> bool {
        *self == other.as_str()
    }
}
