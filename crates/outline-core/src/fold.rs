//! Collapse and expand of outline subtrees.
//!
//! Collapsing carves the contiguous run of deeper paragraphs out of the tree
//! with two boundary splits and parks it under the parent leaf; expanding
//! splices it back. Hidden indentations are stored relative to the holding
//! paragraph, so folded subtrees stay portable when the parent is indented
//! or outdented while folded.

use crate::error::OutlineError;
use crate::node::{Leaf, Node};
use crate::traverse::{
    children_width, has_children, leaf_at, leaf_mut_at, parent_of, visit_leaves, Direction,
};
use crate::tree::{concat, split};

/// Fold the subtrees of every candidate parent intersecting the range.
///
/// Each visited paragraph contributes a candidate: itself when it has
/// children, otherwise its nearest shallower ancestor. Candidates are folded
/// in descending offset order, so earlier folds do not perturb the offsets
/// of later ones; child runs are re-resolved at processing time, which lets
/// nested candidates fold correctly in one call.
pub(crate) fn collapse_range(
    root: &mut Node,
    location: usize,
    length: usize,
) -> Result<(), OutlineError> {
    let mut candidates: Vec<usize> = Vec::new();
    {
        let tree: &Node = root;
        visit_leaves(tree, location, location + length, Direction::Forward, |leaf, start| {
            let end = start + leaf.utf16_len;
            if has_children(tree, end, leaf.indentation) {
                candidates.push(start);
            } else if let Some(parent) = parent_of(tree, start, leaf.indentation) {
                candidates.push(parent);
            }
            true
        });
    }
    candidates.sort_unstable_by(|a, b| b.cmp(a));
    candidates.dedup();
    if candidates.is_empty() {
        return Err(OutlineError::CannotCollapse);
    }

    for start in candidates {
        let (_, leaf) = leaf_at(root, start);
        let width = leaf.utf16_len;
        let indentation = leaf.indentation;
        let child_width = children_width(root, start + width, indentation);
        if child_width == 0 {
            continue;
        }

        let tree = std::mem::replace(root, Node::Leaf(Leaf::sentinel()));
        let (left, mid) = split(tree, start + width);
        let mut left = left.expect("candidate paragraph precedes the carve");
        let mid = mid.expect("candidate children follow the carve");
        let (block, right) = split(mid, child_width);
        let mut block = block.expect("candidate has a non-empty child run");

        shift_indentation(&mut block, -(indentation as isize));

        let holder = leaf_mut_at(&mut left, start);
        holder.collapsed = Some(Box::new(match holder.collapsed.take() {
            // An earlier fold already parked descendants here; the newly
            // carved block follows them.
            Some(existing) => concat(*existing, block),
            None => block,
        }));

        *root = match right {
            Some(right) => concat(left, right),
            None => left,
        };
    }

    Ok(())
}

/// Unfold every paragraph in the range that holds a collapsed subtree.
pub(crate) fn expand_range(
    root: &mut Node,
    location: usize,
    length: usize,
) -> Result<(), OutlineError> {
    let mut targets: Vec<usize> = Vec::new();
    visit_leaves(root, location, location + length, Direction::Forward, |leaf, start| {
        if leaf.collapsed.is_some() {
            targets.push(start);
        }
        true
    });
    if targets.is_empty() {
        return Err(OutlineError::CannotExpand);
    }

    // Descending offsets keep the remaining targets' offsets stable.
    for start in targets.into_iter().rev() {
        let holder = leaf_mut_at(root, start);
        let Some(saved) = holder.collapsed.take() else {
            continue;
        };
        let indentation = holder.indentation;
        let width = holder.utf16_len;

        let mut saved = *saved;
        shift_indentation(&mut saved, indentation as isize);

        let tree = std::mem::replace(root, Node::Leaf(Leaf::sentinel()));
        let (left, right) = split(tree, start + width);
        let mut assembled = match left {
            Some(left) => concat(left, saved),
            None => saved,
        };
        if let Some(right) = right {
            assembled = concat(assembled, right);
        }
        *root = assembled;
    }

    Ok(())
}

/// Whether any visible paragraph currently holds a collapsed subtree.
pub(crate) fn any_collapsed(node: &Node) -> bool {
    match node {
        Node::Leaf(leaf) => leaf.collapsed.is_some(),
        Node::Internal(int) => any_collapsed(&int.left) || any_collapsed(&int.right),
    }
}

/// Shift the indentation of every paragraph in the subtree, clamping at 0.
/// Nested collapsed subtrees stay relative to their own holders and are not
/// touched.
fn shift_indentation(node: &mut Node, delta: isize) {
    match node {
        Node::Leaf(leaf) => {
            leaf.indentation = (leaf.indentation as isize + delta).max(0) as usize;
        }
        Node::Internal(int) => {
            shift_indentation(&mut int.left, delta);
            shift_indentation(&mut int.right, delta);
        }
    }
}
