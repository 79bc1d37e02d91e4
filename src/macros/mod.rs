//! Ergonomic macros for building [`Metadata`](crate::types::Metadata).
//!
//! - [`macro@crate::metadata`] - Builds a metadata map from `key => value` pairs.
//!
//! # Examples
//!
//! ```
//! use error_class::{metadata, NotAuthorized};
//!
//! let err = NotAuthorized::new("Billing is restricted.").with_metadata(metadata! {
//!     "account" => "acme",
//!     "seats" => 12,
//!     "trial" => false,
//! });
//!
//! assert_eq!(err.metadata.map(|m| m.len()), Some(3));
//! ```

/// Builds a [`Metadata`](crate::types::Metadata) map from `key => value` pairs.
///
/// Keys accept anything convertible into `String`, values anything
/// convertible into [`Value`](crate::types::Value). A repeated key keeps the
/// last value.
///
/// # Examples
///
/// ```
/// use error_class::{metadata, Value};
///
/// let empty = metadata!();
/// assert!(empty.is_empty());
///
/// let meta = metadata! { "env" => "prod", "status" => 500, "env" => "staging" };
/// assert_eq!(meta.len(), 2);
/// assert_eq!(meta.get("env"), Some(&Value::from("staging")));
/// ```
#[macro_export]
macro_rules! metadata {
    () => {
        $crate::types::Metadata::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut metadata = $crate::types::Metadata::new();
        $(
            metadata.insert($key, $value);
        )+
        metadata
    }};
}
