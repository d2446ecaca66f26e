//! Parsing tab-indented text and the serialization views.
//!
//! The file form is plain text: one line per paragraph, indentation
//! materialized as leading tab characters. Parsing strips the tabs into
//! indentation counts and builds a perfectly balanced tree middle-out; the
//! final (possibly empty) line becomes the sentinel leaf whose trailing
//! newline is structural but not visible.

use crate::node::{Leaf, Node};
use crate::tree::build_balanced;

fn leading_tabs(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b'\t').count()
}

/// One `\n`-terminated paragraph into a leaf: leading tabs become the
/// indentation, the remainder (terminator included) becomes the content.
pub(crate) fn parse_paragraph(paragraph: &str) -> Leaf {
    let tabs = leading_tabs(paragraph);
    Leaf::new(paragraph[tabs..].to_string(), tabs)
}

/// Parse a whole document into a balanced tree.
///
/// The input is conceptually terminated with one `\n` before splitting, so
/// the result always has at least the sentinel leaf and an empty input
/// parses to the empty document.
pub(crate) fn parse_tree(text: &str) -> Node {
    let leaves: Vec<Leaf> = text
        .split('\n')
        .map(|line| {
            let tabs = leading_tabs(line);
            Leaf::new(format!("{}\n", &line[tabs..]), tabs)
        })
        .collect();
    build_balanced(leaves).unwrap_or_else(|| Node::Leaf(Leaf::sentinel()))
}

/// The canonical serialized form: every paragraph prefixed with its
/// indentation in tabs, without the sentinel newline.
pub(crate) fn file_string(root: &Node) -> String {
    let mut out = String::new();
    write_file(root, &mut out);
    out.pop();
    out
}

fn write_file(node: &Node, out: &mut String) {
    match node {
        Node::Leaf(leaf) => {
            for _ in 0..leaf.indentation {
                out.push('\t');
            }
            out.push_str(&leaf.content);
        }
        Node::Internal(int) => {
            write_file(&int.left, out);
            write_file(&int.right, out);
        }
    }
}

/// UTF-16 length of the file form.
pub(crate) fn file_len(root: &Node) -> usize {
    fn sum(node: &Node) -> usize {
        match node {
            Node::Leaf(leaf) => leaf.indentation + leaf.utf16_len,
            Node::Internal(int) => sum(&int.left) + sum(&int.right),
        }
    }
    sum(root) - 1
}
