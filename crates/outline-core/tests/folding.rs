use outline_core::{OutlineDocument, OutlineError};

#[test]
fn test_collapse_hides_children() {
    let mut doc = OutlineDocument::from_text("A\n\tB\n\tC\nD");
    doc.collapse(0, 1).unwrap();
    assert_eq!(doc.visible_string(), "A\nD");
    assert!(doc.is_collapsed(0).unwrap());
    doc.check_invariants();
}

#[test]
fn test_collapse_hides_nested_descendants() {
    let mut doc = OutlineDocument::from_text("A\n\tB\n\t\tC\n\tD\nE");
    doc.collapse(0, 1).unwrap();
    assert_eq!(doc.visible_string(), "A\nE");
    doc.check_invariants();
}

#[test]
fn test_collapse_climbs_to_parent_from_inside_child() {
    let mut doc = OutlineDocument::from_text("A\n\tB\n\tC\nD");
    doc.collapse(2, 1).unwrap();
    assert_eq!(doc.visible_string(), "A\nD");
}

#[test]
fn test_collapse_flat_document_fails() {
    let mut doc = OutlineDocument::from_text("A\nB\nC");
    assert_eq!(doc.collapse(0, 1), Err(OutlineError::CannotCollapse));
    assert_eq!(doc.visible_string(), "A\nB\nC");
}

#[test]
fn test_collapse_empty_document_fails() {
    let mut doc = OutlineDocument::new();
    assert_eq!(doc.collapse(0, 0), Err(OutlineError::CannotCollapse));
    assert_eq!(doc.visible_string(), "");
}

#[test]
fn test_collapse_then_expand_restores_both_views() {
    let original = "A\n\tB\n\t\tC\n\tD\nE";
    let mut doc = OutlineDocument::from_text(original);
    let visible = doc.visible_string();

    doc.collapse(0, 1).unwrap();
    assert_ne!(doc.visible_string(), visible);

    doc.expand(0, 1).unwrap();
    assert_eq!(doc.visible_string(), visible);
    assert_eq!(doc.file_string(), original);
    doc.check_invariants();
}

#[test]
fn test_collapsed_parents_stay_visible() {
    let mut doc = OutlineDocument::from_text("A\n\tB\nC\n\tD");
    doc.collapse(0, doc.len()).unwrap();
    // Both parents fold; no descendant line survives in the visible text.
    assert_eq!(doc.visible_string(), "A\nC");
    assert!(doc.is_collapsed(0).unwrap());
    assert!(doc.is_collapsed(2).unwrap());
    doc.check_invariants();
}

#[test]
fn test_expand_without_fold_fails() {
    let mut doc = OutlineDocument::from_text("A\n\tB");
    assert_eq!(doc.expand(0, 1), Err(OutlineError::CannotExpand));
}

#[test]
fn test_fold_survives_indenting_the_parent() {
    let mut doc = OutlineDocument::from_text("A\n\tB\n\t\tC\nD");
    doc.collapse(0, 0).unwrap();
    assert_eq!(doc.visible_string(), "A\nD");

    // Indent the folded parent; hidden indentations are relative, so the
    // subtree follows.
    doc.indent(3, 0, 0).unwrap();
    doc.expand(0, 0).unwrap();
    assert_eq!(doc.file_string(), "\t\t\tA\n\t\t\t\tB\n\t\t\t\t\tC\nD");
    doc.check_invariants();
}

#[test]
fn test_fold_survives_outdenting_the_parent_to_zero() {
    let mut doc = OutlineDocument::from_text("\t\tA\n\t\t\tB\nC");
    doc.collapse(0, 0).unwrap();
    doc.indent(-2, 0, 0).unwrap();
    doc.expand(0, 0).unwrap();
    assert_eq!(doc.file_string(), "A\n\tB\nC");
    doc.check_invariants();
}

#[test]
fn test_unrelated_edits_leave_fold_in_place() {
    let mut doc = OutlineDocument::from_text("A\n\tB\nC");
    doc.collapse(0, 0).unwrap();
    assert_eq!(doc.visible_string(), "A\nC");

    doc.insert("x", 3).unwrap();
    doc.delete(3, 1).unwrap();
    assert!(doc.is_collapsed(0).unwrap());

    doc.expand(0, 0).unwrap();
    assert_eq!(doc.file_string(), "A\n\tB\nC");
    doc.check_invariants();
}

#[test]
fn test_merging_paragraphs_adopts_second_fold() {
    let mut doc = OutlineDocument::from_text("a\nc\n\td");
    doc.collapse(2, 0).unwrap();
    assert_eq!(doc.visible_string(), "a\nc");

    // Deleting a's terminator merges "a" and "c"; the merged paragraph
    // takes over c's fold.
    doc.delete(1, 1).unwrap();
    assert_eq!(doc.visible_string(), "ac");
    assert!(doc.is_collapsed(0).unwrap());

    doc.expand_all();
    assert_eq!(doc.file_string(), "ac\n\td");
    doc.check_invariants();
}

#[test]
fn test_merging_paragraphs_discards_first_fold() {
    let mut doc = OutlineDocument::from_text("a\n\tb\nc");
    doc.collapse(0, 0).unwrap();
    assert_eq!(doc.visible_string(), "a\nc");

    // a's fold dies with its terminator; "c" has nothing to contribute.
    doc.delete(1, 1).unwrap();
    assert_eq!(doc.visible_string(), "ac");
    assert!(!doc.is_collapsed(0).unwrap());
    assert_eq!(doc.expand(0, doc.len()), Err(OutlineError::CannotExpand));
    assert_eq!(doc.file_string(), "ac");
}

#[test]
fn test_deleting_folded_paragraph_drops_its_subtree() {
    let mut doc = OutlineDocument::from_text("a\n\tb\nc");
    doc.collapse(0, 0).unwrap();
    assert_eq!(doc.visible_string(), "a\nc");

    // Remove the folded paragraph entirely, terminator included.
    doc.delete(0, 2).unwrap();
    assert_eq!(doc.visible_string(), "c");
    assert_eq!(doc.expand(0, doc.len()), Err(OutlineError::CannotExpand));
    doc.check_invariants();
}

#[test]
fn test_zero_length_range_targets_single_paragraph() {
    let mut doc = OutlineDocument::from_text("A\n\tB\nC\n\tD");
    // Point range at C's start folds only C's subtree.
    doc.collapse(4, 0).unwrap();
    assert_eq!(doc.visible_string(), "A\nB\nC");
    assert!(!doc.is_collapsed(0).unwrap());
    assert!(doc.is_collapsed(4).unwrap());
}

#[test]
fn test_repeated_collapse_accumulates_under_parent() {
    let mut doc = OutlineDocument::from_text("A\n\tB\nC");
    doc.collapse(0, 0).unwrap();

    // Pull C under A, then fold again.
    doc.indent(1, 2, 0).unwrap();
    doc.collapse(0, 0).unwrap();
    assert_eq!(doc.visible_string(), "A");

    doc.expand(0, 0).unwrap();
    assert_eq!(doc.file_string(), "A\n\tB\n\tC");
    doc.check_invariants();
}
