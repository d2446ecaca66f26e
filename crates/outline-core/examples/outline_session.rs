use outline_core::OutlineDocument;

fn main() {
    let mut doc = OutlineDocument::from_text(
        "Groceries\n\tMilk\n\tBread\nErrands\n\tPost office\n\tHardware store",
    );

    // Offsets address the visible text; indentation tabs are virtual.
    assert_eq!(
        doc.visible_string(),
        "Groceries\nMilk\nBread\nErrands\nPost office\nHardware store"
    );
    assert_eq!(doc.depth(10).unwrap(), 1);

    // Fold the groceries; the errands shift up in the visible text but the
    // file form still owns every paragraph.
    doc.collapse(0, 0).unwrap();
    assert_eq!(
        doc.visible_string(),
        "Groceries\nErrands\nPost office\nHardware store"
    );
    println!("folded:\n{}\n", doc.visible_string());

    // Edits elsewhere leave the fold alone.
    doc.insert("Call plumber\n", 10).unwrap();
    assert!(doc.is_collapsed(0).unwrap());

    // Indent the new paragraph one level; only the file form moves.
    doc.indent(1, 10, 0).unwrap();
    assert_eq!(doc.depth(10).unwrap(), 1);

    doc.expand_all();
    println!("expanded:\n{}", doc.file_string());
}
