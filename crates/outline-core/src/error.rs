//! Error types for document operations.
//!
//! All validation happens at the API boundary before any tree surgery, so a
//! returned error guarantees the document was left untouched.

use thiserror::Error;

/// Errors produced by [`crate::OutlineDocument`] operations.
///
/// Offsets and lengths in the payloads are UTF-16 code units in the visible
/// document. `len` is the visible document length at the time of the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutlineError {
    /// The insertion offset lies outside `0..=len`.
    #[error("invalid insert offset {offset} (document length {len})")]
    InvalidInsertOffset {
        /// Requested insertion offset.
        offset: usize,
        /// Visible document length.
        len: usize,
    },

    /// The deletion range extends past the end of the visible document.
    #[error("invalid delete range at {location} len {length} (document length {len})")]
    InvalidDeleteRange {
        /// Start offset of the requested deletion.
        location: usize,
        /// Requested deletion length.
        length: usize,
        /// Visible document length.
        len: usize,
    },

    /// A range argument extends past the end of the visible document.
    #[error("invalid range at {location} len {length} (document length {len})")]
    InvalidRange {
        /// Start offset of the requested range.
        location: usize,
        /// Requested range length.
        length: usize,
        /// Visible document length.
        len: usize,
    },

    /// A query offset lies outside `0..=len`.
    #[error("invalid query offset {offset} (document length {len})")]
    InvalidQueryOffset {
        /// Requested query offset.
        offset: usize,
        /// Visible document length.
        len: usize,
    },

    /// No paragraph in the range has children or a shallower ancestor.
    #[error("cannot collapse: no foldable paragraph in range")]
    CannotCollapse,

    /// No paragraph in the range holds a collapsed subtree.
    #[error("cannot expand: no folded paragraph in range")]
    CannotExpand,
}
