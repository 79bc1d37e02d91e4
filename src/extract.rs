//! Extraction functions with defined fallbacks.
//!
//! Each function asks [`AsClassify`] once whether the error satisfies the
//! [`Classify`] contract. If it does, the accessor's value is returned
//! verbatim, even when it is empty. If it does not, the fixed default is
//! returned. None of these functions can fail.
//!
//! An absent error (`None::<&E>`) is treated like a non-classified one.
//! Boxed errors can be passed as is or reborrowed with `&*boxed`. Error types
//! without an [`AsClassify`] impl are passed as `&(dyn Error + 'static)`.
//!
//! With the `tracing` feature, every fallback to the defaults emits a
//! trace-level event with the error's type name in `error_type`.
//!
//! # Examples
//!
//! ```
//! use error_class::{code, kind, message, metadata, NotAuthorized};
//!
//! let present = NotAuthorized::default();
//! let absent: Option<&NotAuthorized> = None;
//!
//! assert_eq!(code(&Some(&present)), 403);
//! assert_eq!(code(&absent), 500);
//! assert_eq!(kind(&absent), "unknown");
//! assert_eq!(message(&present), "");
//! assert!(metadata(&absent).is_none());
//! ```

use crate::traits::{AsClassify, Classify};
use crate::types::{Kind, Metadata};

/// Code returned for errors that are not classified (HTTP 500).
pub const DEFAULT_CODE: u16 = 500;

/// Kind returned for errors that are not classified.
pub const DEFAULT_KIND: Kind = Kind::UNKNOWN;

/// Message returned for errors that are not classified.
pub const DEFAULT_MESSAGE: &str = "An unexpected error has occurred.";

#[inline]
fn classify<E: AsClassify + ?Sized>(err: &E) -> Option<&dyn Classify> {
    let classified = err.as_classify();
    #[cfg(feature = "tracing")]
    {
        if classified.is_none() {
            tracing::trace!(
                error_type = core::any::type_name::<E>(),
                "error is not classified, using defaults"
            );
        }
    }
    classified
}

/// Returns the status code of `err`, or [`DEFAULT_CODE`].
#[inline]
pub fn code<E: AsClassify + ?Sized>(err: &E) -> u16 {
    classify(err).map_or(DEFAULT_CODE, |c| c.code())
}

/// Returns the kind of `err`, or [`DEFAULT_KIND`].
#[inline]
pub fn kind<E: AsClassify + ?Sized>(err: &E) -> Kind {
    classify(err).map_or(DEFAULT_KIND, |c| c.kind())
}

/// Returns the display message of `err`, or [`DEFAULT_MESSAGE`].
#[inline]
pub fn message<E: AsClassify + ?Sized>(err: &E) -> &str {
    classify(err).map_or(DEFAULT_MESSAGE, |c| c.message())
}

/// Returns the metadata of `err`. Non-classified errors have none.
#[inline]
pub fn metadata<E: AsClassify + ?Sized>(err: &E) -> Option<&Metadata> {
    classify(err).and_then(|c| c.metadata())
}

/// Returns `true` if `err` satisfies the [`Classify`] contract.
///
/// This is a plain query and never emits the fallback trace event.
#[inline]
pub fn is_classified<E: AsClassify + ?Sized>(err: &E) -> bool {
    err.as_classify().is_some()
}
