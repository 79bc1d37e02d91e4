//! Uniform classification of error values.
//!
//! Any error type can opt in to classification by implementing [`Classify`],
//! which exposes an HTTP-style status code, a machine-readable [`Kind`], a
//! human-readable message and free-form [`Metadata`]. The free functions
//! [`code`], [`kind`], [`message`] and [`metadata`] read those values from
//! *any* error and fall back to fixed defaults when the error does not
//! implement the contract.
//!
//! # Examples
//!
//! ## Classifying your own error
//!
//! ```
//! use error_class::{code, kind, message, Classify, Kind, Metadata};
//! use core::fmt;
//!
//! #[derive(Debug)]
//! struct OutOfStock {
//!     sku: &'static str,
//! }
//!
//! impl fmt::Display for OutOfStock {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "sku {} is out of stock", self.sku)
//!     }
//! }
//!
//! impl core::error::Error for OutOfStock {}
//!
//! impl Classify for OutOfStock {
//!     fn code(&self) -> u16 { 409 }
//!     fn kind(&self) -> Kind { Kind::from_static("out_of_stock") }
//!     fn message(&self) -> &str { "This item is no longer available." }
//!     fn metadata(&self) -> Option<&Metadata> { None }
//! }
//!
//! let err = OutOfStock { sku: "A-113" };
//! assert_eq!(code(&err), 409);
//! assert_eq!(kind(&err), "out_of_stock");
//! assert_eq!(message(&err), "This item is no longer available.");
//! ```
//!
//! ## Falling back to defaults
//!
//! ```
//! use error_class::{code, kind, message, metadata, DEFAULT_MESSAGE};
//!
//! let err = core::fmt::Error;
//! assert_eq!(code(&err), 500);
//! assert_eq!(kind(&err), "unknown");
//! assert_eq!(message(&err), DEFAULT_MESSAGE);
//! assert!(metadata(&err).is_none());
//! ```
//!
//! ## Type-erased errors
//!
//! A `Box<dyn Error>` only remembers its concrete type through a downcast, so
//! classification survives erasure for [`Classified`] and [`NotAuthorized`]
//! alone. Wrap your own classified errors in [`Classified`], or call
//! [`ResultExt::classified`] on the `Result`, before erasing them. Otherwise
//! the erased error falls back to the defaults.
//!
//! ```
//! use error_class::{code, kind, metadata, Classified, NotAuthorized};
//!
//! let err: Box<dyn core::error::Error + Send + Sync> =
//!     Box::new(Classified::new(NotAuthorized::new("Members only.").with_meta("plan", "free")));
//!
//! assert_eq!(code(&*err), 403);
//! assert_eq!(kind(&*err), "not_authorized");
//! assert_eq!(metadata(&*err).and_then(|m| m.get("plan")).and_then(|v| v.as_str()), Some("free"));
//! ```
//!
//! ```
//! use error_class::{code, Classified, NotAuthorized, ResultExt};
//!
//! fn load() -> Result<(), Box<dyn core::error::Error + Send + Sync>> {
//!     Err::<(), _>(NotAuthorized::new("Members only.")).classified()?;
//!     Ok(())
//! }
//!
//! let err = load().unwrap_err();
//! assert!(err.is::<Classified>());
//! assert_eq!(code(&err), 403);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Extraction functions and their defaults
pub mod extract;
/// Macros for building metadata
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The classification contract and capability view
pub mod traits;
/// Kinds, metadata, carriers and the bundled example error
pub mod types;

pub use extract::*;
pub use traits::*;
pub use types::{Classification, Classified, Kind, Metadata, NotAuthorized, Value};
