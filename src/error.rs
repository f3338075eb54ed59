//! The error node type and its constructors
//!
//! This module defines:
//! - Error: one link in an error chain (operation label + optional metadata)
//! - ClientMsg: tri-state end-user message carried by a node
//!
//! ## Chain model
//!
//! Every `Error` is either a root node (created by [`Error::new`], carries the
//! base message) or a wrap node (created by [`Error::wrap`] /
//! [`Error::wrap_with`], carries a cause). Causes may be other `Error` nodes
//! or any foreign `std::error::Error`, so chains compose freely with errors
//! from unrelated crates.
//!
//! ## Rendering rules
//!
//! `Display` produces the canonical chain string:
//! - Root with code: `"{op}: {message} [{code}]"`
//! - Root without code: `"{op}: {message}"`
//! - Wrap with note: `"{op}: ({note}): {cause}"`
//! - Wrap without note: `"{op}: {cause}"`
//!
//! The `[code]` suffix appears only at the root node that produced it; wrap
//! nodes contribute only their operation/note prefix, even when a code was
//! attached to them via [`Error::set_code`] (codes on wrap nodes exist for
//! lookup, not for display).

use std::error::Error as StdError;
use std::fmt;

/// Boxed cause type accepted by the wrap constructors
///
/// Any error type can be a cause, as can plain strings (which become opaque
/// foreign errors via the standard library's blanket `From` impls).
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Tri-state end-user message attached to a node
///
/// A nullable string cannot distinguish "explicitly empty" from "not set
/// here, check the cause", so this is a tagged variant:
/// - `Unset`: this node says nothing; lookup continues to the cause.
/// - `Set(text)`: this node's client message; lookup stops here.
/// - `Cleared`: this node explicitly has no client message; lookup stops
///   here and yields empty, masking anything deeper in the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ClientMsg {
    Unset,
    Set(String),
    Cleared,
}

/// One link in a structured error chain
///
/// Carries an operation label, an optional machine-readable code, an optional
/// end-user-safe client message, and (for wrap nodes) a boxed cause. Nodes
/// are plain values: the fluent mutators consume and return the node, and
/// once published a node is immutable, so sharing across threads is safe
/// (`Error` is `Send + Sync`).
///
/// # Examples
///
/// ```
/// use errop::Error;
///
/// let err = Error::new("Foo", "database_error", "cannot do something");
/// assert_eq!(err.to_string(), "Foo: cannot do something [database_error]");
///
/// let err = Error::wrap("Outer", err);
/// assert_eq!(
///     err.to_string(),
///     "Outer: Foo: cannot do something [database_error]",
/// );
/// ```
#[derive(Debug)]
pub struct Error {
    op: String,
    code: Option<String>,
    message: String,
    note: Option<String>,
    client_msg: ClientMsg,
    source: Option<BoxError>,
}

impl Error {
    /// Create a root node from an operation, code, and base message
    ///
    /// An empty `code` means "no code at this level"; lookups will keep
    /// walking past this node.
    pub fn new(
        op: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            op: op.into(),
            code: non_empty(code.into()),
            message: message.into(),
            note: None,
            client_msg: ClientMsg::Unset,
            source: None,
        }
    }

    /// Wrap an existing error under a new operation label
    ///
    /// The cause may be another [`Error`] or any foreign error type. The new
    /// node carries no message of its own; its rendered text is the operation
    /// prefix followed by the cause's own rendering.
    pub fn wrap(op: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self {
            op: op.into(),
            code: None,
            message: String::new(),
            note: None,
            client_msg: ClientMsg::Unset,
            source: Some(cause.into()),
        }
    }

    /// Wrap an existing error with a short parenthetical note
    ///
    /// Renders as `"{op}: ({note}): {cause}"`. An empty `note` is treated as
    /// no note at all.
    pub fn wrap_with(
        op: impl Into<String>,
        cause: impl Into<BoxError>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            note: non_empty(note.into()),
            ..Self::wrap(op, cause)
        }
    }

    /// Set this node's code, overwriting any prior value at this node only
    ///
    /// An empty `code` removes the code, so lookups continue to the cause.
    /// Never touches the cause chain.
    #[must_use]
    pub fn set_code(mut self, code: impl Into<String>) -> Self {
        self.code = non_empty(code.into());
        self
    }

    /// Set this node's client message
    ///
    /// [`client_message`](crate::client_message) on this node or any node
    /// wrapping it (with no closer override) returns `text`.
    #[must_use]
    pub fn set_client_msg(mut self, text: impl Into<String>) -> Self {
        self.client_msg = ClientMsg::Set(text.into());
        self
    }

    /// Explicitly clear the client message at this node
    ///
    /// Distinct from never having set one: a cleared node stops the lookup
    /// walk and yields empty, masking any client message deeper in the chain.
    #[must_use]
    pub fn clear_client_msg(mut self) -> Self {
        self.client_msg = ClientMsg::Cleared;
        self
    }

    /// The operation label attached to this node
    pub fn op(&self) -> &str {
        &self.op
    }

    /// This node's own code, if one is set (does not consult the chain)
    ///
    /// For the chain-wide lookup use [`error_code`](crate::error_code).
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub(crate) fn client_msg(&self) -> &ClientMsg {
        &self.client_msg
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, &self.note) {
            // Root node: base message, code suffix only here.
            (None, _) => {
                write!(f, "{}: {}", self.op, self.message)?;
                if let Some(code) = &self.code {
                    write!(f, " [{code}]")?;
                }
                Ok(())
            }
            (Some(cause), Some(note)) => write!(f, "{}: ({}): {}", self.op, note, cause),
            (Some(cause), None) => write!(f, "{}: {}", self.op, cause),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|cause| cause.as_ref() as &(dyn StdError + 'static))
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
