//! Owned snapshot of an error's classification.

use core::fmt;

use alloc::string::String;

use crate::extract::{self, DEFAULT_CODE, DEFAULT_KIND, DEFAULT_MESSAGE};
use crate::traits::AsClassify;
use crate::types::{Kind, Metadata};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Code, kind, message and metadata of an error, detached from the error.
///
/// Built at the point where errors are translated into responses, e.g. an
/// API boundary. The snapshot of a non-classified error equals
/// [`Classification::default`].
///
/// # Examples
///
/// ```
/// use error_class::{Classification, NotAuthorized};
///
/// let snapshot = Classification::of(&NotAuthorized::new("Nope."));
/// assert_eq!(snapshot.code, 403);
/// assert_eq!(snapshot.to_string(), "403 not_authorized: Nope.");
///
/// let fallback = Classification::of(&core::fmt::Error);
/// assert_eq!(fallback, Classification::default());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Classification {
    pub code: u16,
    pub kind: Kind,
    pub message: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub metadata: Option<Metadata>,
}

impl Classification {
    /// Reads all four values through the extraction functions.
    pub fn of<E: AsClassify + ?Sized>(err: &E) -> Self {
        Self {
            code: extract::code(err),
            kind: extract::kind(err),
            message: extract::message(err).into(),
            metadata: extract::metadata(err).cloned(),
        }
    }

    /// Returns `true` if every value equals its default.
    #[inline]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            code: DEFAULT_CODE,
            kind: DEFAULT_KIND,
            message: DEFAULT_MESSAGE.into(),
            metadata: None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.code, self.kind, self.message)
    }
}
