//! # testgen-core - Core Domain Types
//!
//! Foundation crate for testgen. Provides the test-type domain enum, error
//! handling and logging setup shared by every other crate in the workspace.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`TestType`] - The kind of tests to generate (`UI` or `API`)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum; `is_fatal` marks startup failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ### Logging (`logging`)
//! - [`logging::init()`] - File-backed tracing subscriber
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use testgen_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all testgen crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, warn};
}

pub use error::{Error, Result};
pub use types::TestType;
