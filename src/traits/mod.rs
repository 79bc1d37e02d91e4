//! Core traits for error classification.
//!
//! - [`Classify`]: the four-accessor contract a classified error implements
//! - [`AsClassify`]: the all-or-nothing capability probe over arbitrary values
//! - [`ResultExt`]: keeps classified errors recognisable after type erasure
//!
//! # Examples
//!
//! ```
//! use error_class::traits::{AsClassify, Classify};
//! use error_class::{Kind, NotAuthorized};
//!
//! let err = NotAuthorized::default();
//! assert_eq!(err.kind(), Kind::NOT_AUTHORIZED);
//! assert!(err.as_classify().is_some());
//! ```

pub mod classify;
pub mod result_ext;

pub use classify::{AsClassify, Classify};
pub use result_ext::ResultExt;
