use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;
use trellis::*;

/// A list of `n` rows, each with a handful of attributes and a text cell.
fn rows(n: usize, seed_offset: usize) -> Node {
    let items: Vec<Element> = (0..n)
        .map(|i| {
            el(
                "li",
                &[("dataRow", format!("{}", i + seed_offset).into())],
                format!("row {}", i + seed_offset),
            )
        })
        .collect();
    Node::from(wrap("ul", items))
}

/// A tree where a random subset of rows changed text.
fn mutate(base: &Node, fraction: f64) -> Node {
    let mut rng = rand::rng();
    let Some(e) = base.as_element() else {
        return base.clone();
    };
    let children = e
        .children
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if rng.random_bool(fraction) {
                Node::from(wrap("li", format!("changed {i}")))
            } else {
                c.clone()
            }
        })
        .collect();
    Node::Element(Element::new(e.tag(), e.attrs.clone(), children))
}

fn bench_diff(c: &mut Criterion) {
    let old = rows(1000, 0);
    let same = old.clone();
    let sparse = mutate(&old, 0.05);
    let grown = rows(1100, 0);

    c.bench_function("diff_unchanged_1000", |b| {
        b.iter(|| black_box(diff(black_box(&old), black_box(&same))))
    });
    c.bench_function("diff_sparse_change_1000", |b| {
        b.iter(|| black_box(diff(black_box(&old), black_box(&sparse))))
    });
    c.bench_function("diff_grow_1000_to_1100", |b| {
        b.iter(|| black_box(diff(black_box(&old), black_box(&grown))))
    });
}

fn bench_patch(c: &mut Criterion) {
    let old = rows(1000, 0);
    let sparse = mutate(&old, 0.05);
    let ops = diff(&old, &sparse);

    c.bench_function("materialize_1000", |b| {
        b.iter(|| black_box(materialize::<LiveNode>(black_box(&old)).unwrap()))
    });
    c.bench_function("patch_sparse_change_1000", |b| {
        b.iter_batched(
            || materialize::<LiveNode>(&old).unwrap(),
            |live| black_box(patch(live, black_box(&ops)).unwrap()),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_diff, bench_patch);
criterion_main!(benches);
