//! errop - structured, chainable operation errors
//!
//! This crate defines the foundational pieces of a structured error chain:
//! - Error: one chain link carrying an operation label, an optional
//!   machine-readable code, and an optional end-user-safe client message
//! - error_code / client_message: chain-wide lookups with override semantics
//! - chain: iterator over any error chain via the standard `source()` relation
//!
//! # Quick Start
//!
//! ```
//! use errop::{client_message, error_code, Error};
//!
//! let err = Error::new("FetchUser", "database_error", "row not found")
//!     .set_client_msg("user does not exist");
//! let err = Error::wrap_with("HandleRequest", err, "user id 42");
//!
//! assert_eq!(
//!     err.to_string(),
//!     "HandleRequest: (user id 42): FetchUser: row not found [database_error]",
//! );
//! assert_eq!(error_code(&err), "database_error");
//! assert_eq!(client_message(&err), "user does not exist");
//! ```
//!
//! # Composing with foreign errors
//!
//! Any `std::error::Error` can be wrapped, and a wrapped node exposes its
//! cause through `source()`, so chains interleave freely with errors from
//! other crates. The lookups see through foreign layers using only the
//! standard single-cause unwrap relation.
//!
//! Codes are opaque, caller-defined strings (`"database_error"`,
//! `"internal_error"`, ...); this crate defines no registry, only the
//! traversal contract.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod lookup;

pub use error::{BoxError, Error};
pub use lookup::{chain, client_message, error_code, Chain};
