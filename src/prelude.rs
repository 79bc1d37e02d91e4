//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_class::prelude::*;
//!
//! let err = NotAuthorized::new("Nope.").with_metadata(metadata! { "user" => 7 });
//! assert_eq!(code(&err), 403);
//! assert_eq!(kind(&err), Kind::NOT_AUTHORIZED);
//! ```

// Macros
pub use crate::metadata;

// Extraction
pub use crate::extract::{
    code, is_classified, kind, message, DEFAULT_CODE, DEFAULT_KIND, DEFAULT_MESSAGE,
};

// Core types
pub use crate::types::{Classification, Classified, Kind, Metadata, NotAuthorized, Value};

// Traits
pub use crate::traits::{AsClassify, Classify, ResultExt};
