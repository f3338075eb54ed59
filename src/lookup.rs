//! Chain traversal and metadata lookup
//!
//! This module defines:
//! - Chain: iterator over an error chain, outermost node first
//! - error_code: first code found walking outer to inner
//! - client_message: first definitive client message, honoring explicit clears
//!
//! Both lookups accept any `&dyn std::error::Error`, native or foreign.
//! Foreign links are transparent pass-throughs: the walk follows the standard
//! `source()` relation, so a native node wrapped inside a foreign error that
//! itself wraps another native node is still fully visible.

use std::error::Error as StdError;

use crate::error::{ClientMsg, Error};

/// Iterator over an error chain, following `source()` links
///
/// Yields the starting error first, then each successive cause, so the
/// outermost node is always visited before anything it wraps. Created by
/// [`chain`].
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Iterate over `err` and every error it transitively wraps, outermost first
///
/// # Examples
///
/// ```
/// use errop::{chain, Error};
///
/// let err = Error::wrap("Outer", Error::new("Inner", "", "boom"));
/// let rendered: Vec<String> = chain(&err).map(|e| e.to_string()).collect();
/// assert_eq!(rendered, vec!["Outer: Inner: boom", "Inner: boom"]);
/// ```
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// Look up the machine-readable code for an error chain
///
/// Walks the chain outer to inner and returns the first code found on a
/// native node, so an outer override wins over anything deeper. Foreign
/// errors never carry a code and are skipped over. Returns `""` when no node
/// in the chain has a code.
///
/// # Examples
///
/// ```
/// use errop::{error_code, Error};
///
/// let inner = Error::new("Inner", "unexpected_error", "boom");
/// let outer = Error::wrap("Outer", inner).set_code("internal_error");
/// assert_eq!(error_code(&outer), "internal_error");
/// ```
pub fn error_code(err: &(dyn StdError + 'static)) -> String {
    for cause in chain(err) {
        if let Some(node) = cause.downcast_ref::<Error>() {
            if let Some(code) = node.code() {
                return code.to_string();
            }
        }
    }
    String::new()
}

/// Look up the end-user-safe message for an error chain
///
/// Walks the chain outer to inner and stops at the first native node that
/// says anything definitive: a set message is returned, and an explicitly
/// cleared node returns `""` even if a deeper node has a message. Nodes that
/// never touched their client message defer to their cause. Returns `""`
/// when the walk exhausts without a definitive answer.
pub fn client_message(err: &(dyn StdError + 'static)) -> String {
    for cause in chain(err) {
        if let Some(node) = cause.downcast_ref::<Error>() {
            match node.client_msg() {
                ClientMsg::Set(text) => return text.clone(),
                ClientMsg::Cleared => return String::new(),
                ClientMsg::Unset => {}
            }
        }
    }
    String::new()
}
