#![warn(missing_docs)]
//! Outline Core - Balanced Rope for Outliner Documents
//!
//! # Overview
//!
//! `outline-core` is a headless document kernel for outliners: a sequence of
//! paragraphs (lines terminated by `\n`), each carrying a logical
//! indentation level, where any paragraph can fold its deeper descendants
//! out of view. It does not involve rendering or file I/O, assuming the
//! upper layer provides an editor surface and persistence.
//!
//! # Core Features
//!
//! - **Balanced rope storage**: AVL-style binary tree of paragraph leaves,
//!   O(log n) insertion and deletion over documents of millions of code
//!   units
//! - **Virtual indentation**: tab depth lives on the paragraph, not in its
//!   text; indent/outdent never moves a single visible code unit
//! - **Structural folding**: collapsing carves the descendant run out of
//!   the tree and parks it under the parent paragraph; expanding grafts it
//!   back exactly where it was
//! - **UTF-16 offsets**: every public offset and length is a UTF-16 code
//!   unit in the visible text, ready for protocol integrations
//! - **Plain-text serialization**: the file form is just lines with leading
//!   tabs; parsing builds a perfectly balanced tree middle-out
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  OutlineDocument (validation & queries)     │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Folding (collapse / expand)                │  ← Subtree surgery
//! ├─────────────────────────────────────────────┤
//! │  Editing (insert / delete / repair)         │  ← Paragraph invariant
//! ├─────────────────────────────────────────────┤
//! │  Traversal (in-order leaf walks)            │  ← Structure queries
//! ├─────────────────────────────────────────────┤
//! │  Rope Primitives (split / join / balance)   │  ← Tree shape
//! ├─────────────────────────────────────────────┤
//! │  Nodes (paragraph leaves, weights, caches)  │  ← Storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use outline_core::OutlineDocument;
//!
//! let mut doc = OutlineDocument::from_text("Inbox\n\tCall bank\n\tRenew passport");
//!
//! // Offsets address the visible text; tabs are virtual.
//! assert_eq!(doc.visible_string(), "Inbox\nCall bank\nRenew passport");
//! assert_eq!(doc.depth(6).unwrap(), 1);
//!
//! // Edits keep the paragraph structure intact.
//! doc.insert("Today\n", 0).unwrap();
//! assert_eq!(doc.file_string(), "Today\nInbox\n\tCall bank\n\tRenew passport");
//!
//! // Fold the children under "Inbox".
//! doc.collapse(6, 0).unwrap();
//! assert_eq!(doc.visible_string(), "Today\nInbox");
//! ```
//!
//! # Module Description
//!
//! - [`document`] - the public [`OutlineDocument`] API
//! - [`error`] - the [`OutlineError`] taxonomy
//!
//! # Concurrency
//!
//! Single-threaded by design: operations are synchronous, return only after
//! their tree surgery completes, and callers serialize mutations
//! externally. Internal text caches use single-threaded cells, so the
//! document is deliberately not `Sync`.

mod edit;
mod fold;
mod node;
mod parse;
mod traverse;
mod tree;

pub mod document;
pub mod error;

pub use document::OutlineDocument;
pub use error::OutlineError;
