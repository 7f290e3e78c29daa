use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use drizzle_sort::prelude::*;
use drizzle_sort::{JoinPlan, parse};
use std::hint::black_box;

const TOKENS: &[&str] = &[
    "title,desc",
    "posts.comments.post_id.created_at,desc",
    "posts.users.author_id.name.flip",
    "posts.payables.payable_id.methods.method_id.label.flip,asc",
    "posts.tags.tag_id.label.pivot.post_tag.post_id",
    "posts.tags.tag_id.label.pivot.post_tag.post_id.groups.group_id.name.flip,desc",
];

fn parse_tokens(c: &mut Criterion) {
    c.bench_function("parse", |b| {
        b.iter(|| {
            for token in TOKENS {
                black_box(parse(black_box(token), Direction::Asc).unwrap());
            }
        })
    });
}

fn classify_paths(c: &mut Criterion) {
    let directives: Vec<Directive> = TOKENS
        .iter()
        .map(|token| parse(token, Direction::Asc).unwrap())
        .collect();

    c.bench_function("classify", |b| {
        b.iter(|| {
            for directive in &directives {
                black_box(JoinPlan::classify(black_box(directive.field())).unwrap());
            }
        })
    });
}

fn apply_tokens(c: &mut Criterion) {
    let sorter = Sorter::default();

    c.bench_function("sort_all", |b| {
        b.iter_batched(
            || SelectQuery::from("posts"),
            |mut query| {
                sorter.sort_all(TOKENS, &mut query, &NoHooks).unwrap();
                black_box(query.to_sql())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, parse_tokens, classify_paths, apply_tokens);
criterion_main!(benches);
