//! The bundled example of a classified error.

use core::error::Error;
use core::fmt;

use alloc::string::String;

use crate::traits::Classify;
use crate::types::{Kind, Metadata, Value};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An authenticated caller is not allowed to perform an action on a
/// resource. In other words, they lack permission.
///
/// Always classified as `403` / [`Kind::NOT_AUTHORIZED`]. The message and
/// metadata are up to the caller; an empty message is returned as is and
/// never replaced by the default message.
///
/// # Examples
///
/// ```
/// use error_class::{code, kind, message, metadata, NotAuthorized};
///
/// let err = NotAuthorized::new("You cannot edit this document.")
///     .with_meta("document_id", 42)
///     .with_meta("role", "viewer");
///
/// assert_eq!(code(&err), 403);
/// assert_eq!(kind(&err), "not_authorized");
/// assert_eq!(message(&err), "You cannot edit this document.");
/// assert_eq!(metadata(&err).map(|m| m.len()), Some(2));
/// assert_eq!(err.to_string(), "not_authorized");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NotAuthorized {
    pub message: String,
    pub metadata: Option<Metadata>,
}

impl NotAuthorized {
    /// HTTP 403 Forbidden.
    pub const CODE: u16 = 403;

    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into(), metadata: None }
    }

    /// Replaces the attached metadata.
    #[must_use]
    #[inline]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Adds one metadata entry, creating the metadata if absent.
    #[must_use]
    pub fn with_meta<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.metadata.get_or_insert_with(Metadata::new).insert(key, value);
        self
    }
}

impl fmt::Display for NotAuthorized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Kind::NOT_AUTHORIZED.as_str())
    }
}

impl Error for NotAuthorized {}

impl Classify for NotAuthorized {
    #[inline]
    fn code(&self) -> u16 {
        Self::CODE
    }

    #[inline]
    fn kind(&self) -> Kind {
        Kind::NOT_AUTHORIZED
    }

    #[inline]
    fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}
