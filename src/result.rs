//! Result type for the command line front end.
//!
//! The library reports typed [`release_changelog::ChangelogError`]s; the
//! binary converts everything into a `color-eyre` report so failures are
//! printed with their context chain.
//!
//! ```rust,ignore
//! use color_eyre::eyre::WrapErr;
//! use crate::result::Result;
//!
//! fn read_input(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .wrap_err_with(|| format!("failed to read {path}"))
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used by the binary.
pub type Result<T> = EyreResult<T>;
