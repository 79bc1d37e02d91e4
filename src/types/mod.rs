//! Kinds, metadata and concrete error types.
//!
//! # Examples
//!
//! ```
//! use error_class::{metadata, Kind, NotAuthorized};
//!
//! let err = NotAuthorized::new("Read-only workspace.")
//!     .with_metadata(metadata! { "workspace" => "archive", "attempts" => 3 });
//!
//! assert_eq!(Kind::NOT_AUTHORIZED.to_string(), "not_authorized");
//! assert_eq!(err.metadata.as_ref().map(|m| m.len()), Some(2));
//! ```

pub mod classification;
pub mod classified;
pub mod kind;
pub mod metadata;
pub mod not_authorized;

pub use classification::Classification;
pub use classified::Classified;
pub use kind::Kind;
pub use metadata::{Metadata, Value};
pub use not_authorized::NotAuthorized;
