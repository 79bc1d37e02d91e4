//! Extension trait for carrying classified errors through type erasure.
//!
//! # Examples
//!
//! ```
//! use error_class::traits::ResultExt;
//! use error_class::{code, NotAuthorized};
//!
//! fn delete_project() -> Result<(), Box<dyn core::error::Error + Send + Sync>> {
//!     let checked: Result<(), NotAuthorized> = Err(NotAuthorized::new("Owners only."));
//!     checked.classified()?;
//!     Ok(())
//! }
//!
//! let err = delete_project().unwrap_err();
//! assert_eq!(code(&*err), 403);
//! ```

use crate::traits::Classify;
use crate::types::Classified;

/// Extension trait that boxes a classified error into [`Classified`].
///
/// Errors that go through `?` into `Box<dyn Error>` lose their concrete
/// type. Wrapping them in [`Classified`] first keeps them visible to the
/// extraction functions after erasure.
pub trait ResultExt<T, E> {
    /// Wraps the error in a [`Classified`] carrier.
    ///
    /// The success path is untouched and allocates nothing.
    fn classified(self) -> Result<T, Classified>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Classify + Send + Sync + 'static,
{
    #[inline]
    fn classified(self) -> Result<T, Classified> {
        self.map_err(Classified::new)
    }
}
