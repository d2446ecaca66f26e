//! Insertion and deletion with paragraph-invariant repair.
//!
//! Inserted text is decomposed into an unterminated trailing run, a first
//! `\n`-terminated fragment, and a block of middle paragraphs. The trailing
//! run is spliced first, the first fragment next at the same offset, and the
//! middle block is parsed into a balanced rope and grafted with split/join.
//! This ordering keeps every intermediate tree a valid paragraph sequence.
//!
//! Deletion recurses by offset. A deletion that consumes a paragraph's
//! trailing newline leaves that leaf *damaged*; the repair step cuts the
//! leftmost surviving leaf off the right half and splices its content onto
//! the damaged leaf.

use crate::node::{utf16_len, Internal, Leaf, Node};
use crate::parse::parse_paragraph;
use crate::tree::{build_balanced, concat, cut_leftmost, rebalance, split};

/// Insert `text` at a visible UTF-16 offset. The offset must be within the
/// visible document; the caller validates.
pub(crate) fn insert_text(root: Node, offset: usize, text: &str) -> Node {
    let mut fragments: Vec<&str> = text.split_inclusive('\n').collect();
    let partial = match fragments.last() {
        Some(last) if !last.ends_with('\n') => fragments.pop(),
        _ => None,
    };

    let mut root = root;
    let mut offset = offset;

    // The unterminated tail goes in first, as a plain character run owned by
    // the paragraph already at `offset`.
    if let Some(partial) = partial {
        root = insert_fragment(root, offset, partial, false);
    }

    if let Some((first, middles)) = fragments.split_first() {
        root = insert_fragment(root, offset, first, true);
        offset += utf16_len(first);

        if !middles.is_empty() {
            let leaves: Vec<Leaf> = middles.iter().map(|p| parse_paragraph(p)).collect();
            if let Some(block) = build_balanced(leaves) {
                let (left, right) = split(root, offset);
                let mut assembled = block;
                if let Some(left) = left {
                    assembled = concat(left, assembled);
                }
                if let Some(right) = right {
                    assembled = concat(assembled, right);
                }
                root = assembled;
            }
        }
    }

    root
}

/// Insert one fragment, descending by weight to the owning leaf.
///
/// `terminated` fragments attach to the *preceding* paragraph at leaf
/// boundaries (the append-a-sibling case); unterminated runs belong to the
/// *following* paragraph.
fn insert_fragment(node: Node, offset: usize, text: &str, terminated: bool) -> Node {
    match node {
        Node::Leaf(leaf) => leaf_insert(leaf, offset, text, terminated),
        Node::Internal(int) => {
            let Internal {
                left, right, weight, ..
            } = int;
            if offset < weight || (terminated && offset == weight) {
                let new_left = insert_fragment(*left, offset, text, terminated);
                rebalance(Internal::new(new_left, *right))
            } else {
                let new_right = insert_fragment(*right, offset - weight, text, terminated);
                rebalance(Internal::new(*left, new_right))
            }
        }
    }
}

fn leaf_insert(mut leaf: Leaf, offset: usize, text: &str, terminated: bool) -> Node {
    if terminated && offset == leaf.utf16_len && leaf.ends_with_newline() {
        // Insertion directly after the terminator: a new sibling paragraph
        // under the same indentation. The existing paragraph keeps its fold.
        let sibling = Leaf::new(text.to_string(), leaf.indentation);
        return Node::Internal(Internal::new(Node::Leaf(leaf), Node::Leaf(sibling)));
    }

    if terminated && offset < leaf.utf16_len {
        // Terminated insertion mid-paragraph splits the leaf around the
        // offset. Both halves keep the indentation; the left half keeps the
        // collapsed subtree.
        let (prefix, suffix) = leaf.split_content(offset);
        let mut head = Leaf::new(format!("{prefix}{text}"), leaf.indentation);
        head.collapsed = leaf.collapsed.take();
        let tail = Leaf::new(suffix, leaf.indentation);
        return Node::Internal(Internal::new(Node::Leaf(head), Node::Leaf(tail)));
    }

    // Interior character run; the paragraph keeps its terminator and fold.
    leaf.insert_text(offset, text);
    Node::Leaf(leaf)
}

/// Delete `length` visible UTF-16 units starting at `location`. Returns
/// `None` when the whole subtree is consumed.
pub(crate) fn delete_range(node: Node, location: usize, length: usize) -> Option<Node> {
    match node {
        Node::Leaf(mut leaf) => {
            if location == 0 && length >= leaf.utf16_len {
                return None;
            }
            // Losing the terminator also discards the hidden subtree; the
            // fold dies with the logical end of its paragraph.
            let removes_terminator = location + length >= leaf.utf16_len;
            leaf.remove_range(location, length);
            if removes_terminator {
                leaf.collapsed = None;
            }
            Some(Node::Leaf(leaf))
        }
        Node::Internal(int) => {
            let Internal {
                left, right, weight, ..
            } = int;
            if location >= weight {
                let new_right = delete_range(*right, location - weight, length);
                Some(match new_right {
                    None => *left,
                    Some(r) => concat(*left, r),
                })
            } else if location + length < weight {
                let new_left = delete_range(*left, location, length);
                Some(match new_left {
                    None => *right,
                    Some(l) => concat(l, *right),
                })
            } else {
                // The deletion reaches the last code unit of the left
                // subtree, or beyond it into the right.
                let left_len = weight - location;
                let right_len = length - left_len;
                let new_left = delete_range(*left, location, left_len);
                let new_right = if right_len > 0 {
                    delete_range(*right, 0, right_len)
                } else {
                    Some(*right)
                };
                match (new_left, new_right) {
                    (None, rest) => rest,
                    (rest, None) => rest,
                    (Some(l), Some(r)) => Some(repair_and_join(l, r, location)),
                }
            }
        }
    }
}

/// Join the two halves of a spanning deletion, first restoring the
/// paragraph invariant if the left half's tail lost its terminator.
fn repair_and_join(left: Node, right: Node, seam: usize) -> Node {
    if last_leaf(&left).ends_with_newline() {
        return concat(left, right);
    }
    let (cut, rest) = cut_leftmost(right);
    let mut left = left;
    splice_cut_leaf(&mut left, seam, cut);
    match rest {
        None => left,
        Some(rest) => concat(left, rest),
    }
}

fn last_leaf(node: &Node) -> &Leaf {
    match node {
        Node::Leaf(leaf) => leaf,
        Node::Internal(int) => last_leaf(&int.right),
    }
}

/// Append a cut paragraph onto the damaged leaf whose content ends at
/// `offset`, updating weights and resetting text caches along the path.
///
/// Merge policy: the receiving leaf keeps its own collapsed subtree; the cut
/// leaf's collapsed subtree transfers only when the receiver has none and is
/// discarded otherwise.
fn splice_cut_leaf(node: &mut Node, offset: usize, cut: Leaf) {
    match node {
        Node::Leaf(leaf) => {
            debug_assert_eq!(offset, leaf.utf16_len, "splice must target the damaged tail");
            leaf.content.push_str(&cut.content);
            leaf.utf16_len += cut.utf16_len;
            if leaf.collapsed.is_none() {
                leaf.collapsed = cut.collapsed;
            }
        }
        Node::Internal(int) => {
            int.reset_cache();
            let added = cut.utf16_len;
            if offset <= int.weight {
                splice_cut_leaf(&mut int.left, offset, cut);
                int.weight += added;
            } else {
                splice_cut_leaf(&mut int.right, offset - int.weight, cut);
            }
        }
    }
}
