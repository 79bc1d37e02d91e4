//! Boxed carrier that keeps a classified error recognisable after erasure.

use core::error::Error;
use core::fmt;

use alloc::boxed::Box;

use crate::traits::Classify;
use crate::types::{Kind, Metadata};

/// Type-erased classified error.
///
/// Once an error is erased into `Box<dyn Error>` its concrete type is gone
/// and only a downcast can recover it. `Classified` is the type the
/// extraction functions downcast to, so any [`Classify`] implementation
/// boxed inside it stays visible.
///
/// # Examples
///
/// ```
/// use error_class::{kind, message, Classified, NotAuthorized};
///
/// let erased: Box<dyn core::error::Error + Send + Sync> =
///     Classified::new(NotAuthorized::new("Admins only.")).into();
///
/// assert_eq!(kind(&*erased), "not_authorized");
/// assert_eq!(message(&*erased), "Admins only.");
/// ```
pub struct Classified {
    inner: Box<dyn Classify + Send + Sync + 'static>,
}

impl Classified {
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: Classify + Send + Sync + 'static,
    {
        Self { inner: Box::new(error) }
    }

    /// Returns the wrapped error.
    #[inline]
    pub fn get_ref(&self) -> &(dyn Classify + Send + Sync + 'static) {
        &*self.inner
    }

    /// Consumes the carrier, returning the boxed error.
    #[inline]
    pub fn into_inner(self) -> Box<dyn Classify + Send + Sync + 'static> {
        self.inner
    }
}

impl fmt::Debug for Classified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

impl fmt::Display for Classified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

impl Error for Classified {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source()
    }
}

impl Classify for Classified {
    #[inline]
    fn code(&self) -> u16 {
        self.inner.code()
    }

    #[inline]
    fn kind(&self) -> Kind {
        self.inner.kind()
    }

    #[inline]
    fn message(&self) -> &str {
        self.inner.message()
    }

    #[inline]
    fn metadata(&self) -> Option<&Metadata> {
        self.inner.metadata()
    }
}
