//! Public document API: validation, editing, folding, queries.
//!
//! # Overview
//!
//! [`OutlineDocument`] is the entry point for the crate, wrapping the rope
//! in boundary validation. Every operation checks its offsets and range
//! arithmetic against the visible length before any tree surgery, so a
//! returned error guarantees the document was left untouched. All offsets
//! and lengths are UTF-16 code units in the *visible* text: virtual tabs and
//! collapsed content never count.
//!
//! # Example
//!
//! ```rust
//! use outline_core::OutlineDocument;
//!
//! let mut doc = OutlineDocument::from_text("Project\n\tTask 1\n\tTask 2\nNotes");
//! assert_eq!(doc.visible_string(), "Project\nTask 1\nTask 2\nNotes");
//!
//! // Fold the task list under its parent.
//! doc.collapse(0, 1).unwrap();
//! assert_eq!(doc.visible_string(), "Project\nNotes");
//!
//! // The file form still carries the hidden subtree after expanding.
//! doc.expand(0, 1).unwrap();
//! assert_eq!(doc.file_string(), "Project\n\tTask 1\n\tTask 2\nNotes");
//! ```

use crate::edit::{delete_range, insert_text};
use crate::error::OutlineError;
use crate::fold::{any_collapsed, collapse_range, expand_range};
use crate::node::{utf16_len, Leaf, Node};
use crate::parse;
use crate::traverse::leaf_at;

/// A balanced rope over an outliner document: paragraphs with virtual tab
/// indentation and foldable descendant subtrees.
///
/// The empty document is represented by a single sentinel paragraph `"\n"`;
/// the rightmost paragraph's trailing newline is structural and never counts
/// toward [`len`](Self::len) or appears in the string views.
#[derive(Debug, Clone)]
pub struct OutlineDocument {
    root: Node,
    visible_len: usize,
}

impl OutlineDocument {
    /// Create an empty document (visible length 0).
    pub fn new() -> Self {
        Self {
            root: Node::Leaf(Leaf::sentinel()),
            visible_len: 0,
        }
    }

    /// Parse a document from its file form: `\n`-delimited lines, leading
    /// tabs absorbed into indentation levels.
    pub fn from_text(text: &str) -> Self {
        let root = parse::parse_tree(text);
        let visible_len = root.total_len() - 1;
        Self { root, visible_len }
    }

    /// UTF-16 length of the visible text.
    pub fn len(&self) -> usize {
        self.visible_len
    }

    /// Whether the visible text is empty.
    pub fn is_empty(&self) -> bool {
        self.visible_len == 0
    }

    /// The visible text: paragraph contents without virtual tabs, without
    /// collapsed subtrees, and without the sentinel newline.
    pub fn visible_string(&self) -> String {
        let mut text = self.root.visible_text().to_string();
        text.pop();
        text
    }

    /// The file form: every paragraph prefixed with its indentation in tabs.
    /// Collapsed subtrees stay hidden here as well.
    pub fn file_string(&self) -> String {
        parse::file_string(&self.root)
    }

    /// UTF-16 length of [`file_string`](Self::file_string).
    pub fn file_len(&self) -> usize {
        parse::file_len(&self.root)
    }

    /// Number of visible paragraphs, counting the sentinel line: an empty
    /// document has one.
    pub fn line_count(&self) -> usize {
        fn count(node: &Node) -> usize {
            match node {
                Node::Leaf(_) => 1,
                Node::Internal(int) => count(&int.left) + count(&int.right),
            }
        }
        count(&self.root)
    }

    /// Insert text at a visible offset.
    ///
    /// Full interior lines of `text` are parsed like
    /// [`from_text`](Self::from_text): their leading tabs become indentation.
    pub fn insert(&mut self, text: &str, offset: usize) -> Result<(), OutlineError> {
        if offset > self.visible_len {
            return Err(OutlineError::InvalidInsertOffset {
                offset,
                len: self.visible_len,
            });
        }
        if text.is_empty() {
            return Ok(());
        }
        let tree = self.take_root();
        self.root = insert_text(tree, offset, text);
        self.refresh_len();
        Ok(())
    }

    /// Delete a range of visible text. Deleting a paragraph's newline merges
    /// it with the following paragraph.
    pub fn delete(&mut self, location: usize, length: usize) -> Result<(), OutlineError> {
        if !self.range_is_valid(location, length) {
            return Err(OutlineError::InvalidDeleteRange {
                location,
                length,
                len: self.visible_len,
            });
        }
        if length == 0 {
            return Ok(());
        }
        let tree = self.take_root();
        self.root = delete_range(tree, location, length)
            .expect("the sentinel paragraph survives any valid deletion");
        self.refresh_len();
        Ok(())
    }

    /// Replace a range of visible text in one step.
    pub fn replace(
        &mut self,
        location: usize,
        length: usize,
        text: &str,
    ) -> Result<(), OutlineError> {
        if !self.range_is_valid(location, length) {
            return Err(OutlineError::InvalidRange {
                location,
                length,
                len: self.visible_len,
            });
        }
        if length > 0 {
            let tree = self.take_root();
            self.root = delete_range(tree, location, length)
                .expect("the sentinel paragraph survives any valid deletion");
        }
        if !text.is_empty() {
            let tree = self.take_root();
            self.root = insert_text(tree, location, text);
        }
        self.refresh_len();
        Ok(())
    }

    /// Adjust the indentation of every paragraph intersecting the range by
    /// `delta`, clamping at 0. Visible text and length are unchanged; only
    /// the file form moves.
    pub fn indent(&mut self, delta: isize, location: usize, length: usize) -> Result<(), OutlineError> {
        if !self.range_is_valid(location, length) {
            return Err(OutlineError::InvalidRange {
                location,
                length,
                len: self.visible_len,
            });
        }
        if delta != 0 {
            indent_walk(&mut self.root, 0, location, location + length, delta);
        }
        Ok(())
    }

    /// Fold the descendants of every candidate parent intersecting the
    /// range: a paragraph with children folds itself, a childless paragraph
    /// folds its nearest shallower ancestor.
    pub fn collapse(&mut self, location: usize, length: usize) -> Result<(), OutlineError> {
        if !self.range_is_valid(location, length) {
            return Err(OutlineError::InvalidRange {
                location,
                length,
                len: self.visible_len,
            });
        }
        collapse_range(&mut self.root, location, length)?;
        self.refresh_len();
        Ok(())
    }

    /// Unfold every folded paragraph intersecting the range.
    pub fn expand(&mut self, location: usize, length: usize) -> Result<(), OutlineError> {
        if !self.range_is_valid(location, length) {
            return Err(OutlineError::InvalidRange {
                location,
                length,
                len: self.visible_len,
            });
        }
        expand_range(&mut self.root, location, length)?;
        self.refresh_len();
        Ok(())
    }

    /// Unfold everything, including subtrees revealed by earlier
    /// expansions. A document with no folds is left untouched.
    pub fn expand_all(&mut self) {
        while any_collapsed(&self.root) {
            let end = self.root.total_len() - 1;
            // The guard guarantees a target, so expansion cannot fail.
            let _ = expand_range(&mut self.root, 0, end);
            self.refresh_len();
        }
    }

    /// Indentation level of the paragraph at `offset`.
    pub fn depth(&self, offset: usize) -> Result<usize, OutlineError> {
        if offset > self.visible_len {
            return Err(OutlineError::InvalidQueryOffset {
                offset,
                len: self.visible_len,
            });
        }
        let (_, leaf) = leaf_at(&self.root, offset);
        Ok(leaf.indentation)
    }

    /// Start offset and visible width of the paragraph at `offset`. The
    /// width includes the paragraph's trailing newline.
    pub fn range_of_line(&self, offset: usize) -> Result<(usize, usize), OutlineError> {
        if offset > self.visible_len {
            return Err(OutlineError::InvalidRange {
                location: offset,
                length: 0,
                len: self.visible_len,
            });
        }
        let (start, leaf) = leaf_at(&self.root, offset);
        Ok((start, leaf.utf16_len))
    }

    /// Text of the paragraph at `offset`, without its trailing newline.
    pub fn line_text(&self, offset: usize) -> Result<String, OutlineError> {
        if offset > self.visible_len {
            return Err(OutlineError::InvalidQueryOffset {
                offset,
                len: self.visible_len,
            });
        }
        let (_, leaf) = leaf_at(&self.root, offset);
        let mut text = leaf.content.clone();
        text.pop();
        Ok(text)
    }

    /// Whether the paragraph at `offset` currently holds a collapsed
    /// subtree.
    pub fn is_collapsed(&self, offset: usize) -> Result<bool, OutlineError> {
        if offset > self.visible_len {
            return Err(OutlineError::InvalidQueryOffset {
                offset,
                len: self.visible_len,
            });
        }
        let (_, leaf) = leaf_at(&self.root, offset);
        Ok(leaf.collapsed.is_some())
    }

    /// Walk the whole tree (collapsed subtrees included) and panic on any
    /// violated structural invariant: paragraph terminators, cached weights,
    /// heights and UTF-16 lengths, AVL balance, and the cached visible
    /// length. Intended for tests and debugging.
    pub fn check_invariants(&self) {
        let total = validate_node(&self.root);
        assert_eq!(
            self.visible_len,
            total - 1,
            "cached visible length must equal total minus the sentinel newline"
        );
    }

    fn take_root(&mut self) -> Node {
        std::mem::replace(&mut self.root, Node::Leaf(Leaf::sentinel()))
    }

    fn refresh_len(&mut self) {
        self.visible_len = self.root.total_len() - 1;
    }

    fn range_is_valid(&self, location: usize, length: usize) -> bool {
        location
            .checked_add(length)
            .is_some_and(|end| end <= self.visible_len)
    }
}

impl Default for OutlineDocument {
    fn default() -> Self {
        Self::new()
    }
}

fn indent_walk(node: &mut Node, node_start: usize, lo: usize, hi: usize, delta: isize) {
    match node {
        Node::Leaf(leaf) => {
            let end = node_start + leaf.utf16_len;
            if node_start <= hi && end > lo {
                leaf.indentation = (leaf.indentation as isize + delta).max(0) as usize;
            }
        }
        Node::Internal(int) => {
            let mid = node_start + int.weight;
            if lo < mid {
                indent_walk(&mut int.left, node_start, lo, hi, delta);
            }
            if hi >= mid {
                indent_walk(&mut int.right, mid, lo, hi, delta);
            }
        }
    }
}

/// Validate one subtree, returning its total visible UTF-16 length.
fn validate_node(node: &Node) -> usize {
    match node {
        Node::Leaf(leaf) => {
            assert!(
                leaf.content.ends_with('\n'),
                "paragraph must end with a newline"
            );
            assert_eq!(
                leaf.content.matches('\n').count(),
                1,
                "paragraph must contain exactly one newline"
            );
            assert_eq!(
                leaf.utf16_len,
                utf16_len(&leaf.content),
                "cached UTF-16 length must match the content"
            );
            if let Some(hidden) = &leaf.collapsed {
                validate_node(hidden);
            }
            leaf.utf16_len
        }
        Node::Internal(int) => {
            let left = validate_node(&int.left);
            let right = validate_node(&int.right);
            assert_eq!(int.weight, left, "weight must equal the left subtree length");
            assert_eq!(
                int.height,
                1 + int.left.height().max(int.right.height()),
                "cached height must match the children"
            );
            assert!(
                int.balance_factor().abs() <= 1,
                "child heights may differ by at most one"
            );
            left + right
        }
    }
}
