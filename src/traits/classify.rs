//! The classification contract.
//!
//! [`Classify`] is the capability set an error opts in to. [`AsClassify`] is
//! the single probe the extraction functions use to ask "does this value
//! satisfy the contract?".
//!
//! # Examples
//!
//! ```
//! use error_class::traits::{AsClassify, Classify};
//! use error_class::NotAuthorized;
//!
//! let err = NotAuthorized::new("Members only.");
//! let view = err.as_classify().expect("NotAuthorized is classified");
//! assert_eq!(view.code(), 403);
//!
//! let plain = core::fmt::Error;
//! assert!(plain.as_classify().is_none());
//! ```

use core::error::Error;

use alloc::boxed::Box;

use crate::types::{Classified, Kind, Metadata, NotAuthorized};

/// An error that can be classified by code, kind, message and metadata.
///
/// All four accessors are required. There are no default bodies, so a type
/// either satisfies the whole contract or none of it.
///
/// # Examples
///
/// ```
/// use error_class::{Classify, Kind, Metadata};
/// use core::fmt;
///
/// #[derive(Debug)]
/// struct RateLimited {
///     meta: Metadata,
/// }
///
/// impl fmt::Display for RateLimited {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("rate limited")
///     }
/// }
///
/// impl core::error::Error for RateLimited {}
///
/// impl Classify for RateLimited {
///     fn code(&self) -> u16 { 429 }
///     fn kind(&self) -> Kind { Kind::from_static("rate_limited") }
///     fn message(&self) -> &str { "Too many requests, slow down." }
///     fn metadata(&self) -> Option<&Metadata> { Some(&self.meta) }
/// }
/// ```
pub trait Classify: Error {
    /// HTTP status code that may be returned to clients.
    fn code(&self) -> u16;

    /// Static, machine-readable label for the class of errors this error
    /// belongs to.
    fn kind(&self) -> Kind;

    /// Human-readable message suitable for end users.
    ///
    /// This text may cross a trust boundary, so it must never carry
    /// sensitive data.
    fn message(&self) -> &str;

    /// Diagnostic metadata attached to this particular error instance.
    fn metadata(&self) -> Option<&Metadata>;
}

/// Views a value as a [`Classify`] implementation, if it is one.
///
/// Implemented for every sized `E: Classify`, for type-erased
/// `dyn Error` objects and their `Box`es, for `Option<&E>` (an absent error
/// is never classified) and for the common core and std errors, which never
/// are.
///
/// Type-erased errors are recognised when the erased value is a
/// [`Classified`] or a [`NotAuthorized`]. Box other classified errors in
/// [`Classified`] before erasing them.
///
/// Any other error type can still be passed to the extraction functions by
/// coercing it to a trait object first:
///
/// ```
/// use error_class::code;
///
/// #[derive(Debug)]
/// struct Timeout;
///
/// impl core::fmt::Display for Timeout {
///     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
///         f.write_str("timed out")
///     }
/// }
///
/// impl core::error::Error for Timeout {}
///
/// assert_eq!(code(&Timeout as &(dyn core::error::Error + 'static)), 500);
/// ```
pub trait AsClassify {
    /// Returns the classification view, or `None` when the value does not
    /// satisfy the contract.
    fn as_classify(&self) -> Option<&dyn Classify>;
}

impl<E: Classify> AsClassify for E {
    #[inline]
    fn as_classify(&self) -> Option<&dyn Classify> {
        Some(self)
    }
}

impl<E: AsClassify + ?Sized> AsClassify for Option<&E> {
    #[inline]
    fn as_classify(&self) -> Option<&dyn Classify> {
        match *self {
            Some(err) => err.as_classify(),
            None => None,
        }
    }
}

fn classify_dyn<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a dyn Classify> {
    if let Some(classified) = err.downcast_ref::<Classified>() {
        return Some(classified);
    }
    if let Some(not_authorized) = err.downcast_ref::<NotAuthorized>() {
        return Some(not_authorized);
    }
    None
}

impl AsClassify for dyn Error + 'static {
    #[inline]
    fn as_classify(&self) -> Option<&dyn Classify> {
        classify_dyn(self)
    }
}

impl AsClassify for dyn Error + Send + 'static {
    #[inline]
    fn as_classify(&self) -> Option<&dyn Classify> {
        classify_dyn(self)
    }
}

impl AsClassify for dyn Error + Send + Sync + 'static {
    #[inline]
    fn as_classify(&self) -> Option<&dyn Classify> {
        classify_dyn(self)
    }
}

macro_rules! impl_boxed_dyn {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsClassify for Box<$ty> {
                #[inline]
                fn as_classify(&self) -> Option<&dyn Classify> {
                    classify_dyn(&**self)
                }
            }
        )*
    };
}

impl_boxed_dyn!(
    dyn Error + 'static,
    dyn Error + Send + 'static,
    dyn Error + Send + Sync + 'static,
);

macro_rules! impl_unclassified {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsClassify for $ty {
                #[inline]
                fn as_classify(&self) -> Option<&dyn Classify> {
                    None
                }
            }
        )*
    };
}

impl_unclassified!(
    core::fmt::Error,
    core::num::ParseIntError,
    core::num::ParseFloatError,
    core::num::TryFromIntError,
    core::str::ParseBoolError,
    core::str::Utf8Error,
    core::char::ParseCharError,
    core::char::CharTryFromError,
    core::array::TryFromSliceError,
    alloc::string::FromUtf8Error,
    alloc::string::FromUtf16Error,
    alloc::collections::TryReserveError,
);

#[cfg(feature = "std")]
impl_unclassified!(std::io::Error, std::env::VarError, std::time::SystemTimeError);
