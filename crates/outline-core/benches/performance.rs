use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use outline_core::OutlineDocument;

fn large_outline(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 48);
    for i in 0..line_count {
        // Two levels of children under every tenth line.
        let depth = match i % 10 {
            0 => 0,
            1..=6 => 1,
            _ => 2,
        };
        for _ in 0..depth {
            out.push('\t');
        }
        out.push_str(&format!("{i:06} outline paragraph with some body text\n"));
    }
    // Remove the final '\n' to avoid an extra trailing empty paragraph.
    out.pop();
    out
}

fn bench_parse_large_outline(c: &mut Criterion) {
    let text = large_outline(50_000);
    c.bench_function("parse/50k_lines", |b| {
        b.iter(|| {
            let doc = OutlineDocument::from_text(black_box(&text));
            black_box(doc.len());
        })
    });
}

fn bench_typing_in_middle(c: &mut Criterion) {
    let text = large_outline(50_000);
    c.bench_function("typing_middle/100_inserts", |b| {
        b.iter_batched(
            || OutlineDocument::from_text(&text),
            |mut doc| {
                let mut offset = doc.len() / 2;
                for _ in 0..100 {
                    doc.insert("x", offset).unwrap();
                    offset += 1;
                }
                black_box(doc.len());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_collapse_expand_cycle(c: &mut Criterion) {
    let text = large_outline(20_000);
    c.bench_function("fold_cycle/20k_lines", |b| {
        b.iter_batched(
            || OutlineDocument::from_text(&text),
            |mut doc| {
                let len = doc.len();
                doc.collapse(0, len).unwrap();
                doc.expand_all();
                black_box(doc.len());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_visible_snapshot(c: &mut Criterion) {
    let doc = OutlineDocument::from_text(&large_outline(50_000));
    c.bench_function("visible_string/50k_lines", |b| {
        b.iter(|| {
            // The first call pays for the cache; later calls reuse it until
            // the next edit.
            black_box(doc.visible_string());
        })
    });
}

criterion_group!(
    benches,
    bench_parse_large_outline,
    bench_typing_in_middle,
    bench_collapse_expand_cycle,
    bench_visible_snapshot
);
criterion_main!(benches);
