//! Benchmarks for style expansion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

use style_expand::{expand_style, ExpandPlugin, Rule, Schema, StyleObject};

fn card_style() -> StyleObject {
    serde_json::from_value(json!({
        "display": "flex",
        "margin": [0, "auto"],
        "padding": {"top": "8px", "bottom": "8px"},
        "border": {"color": "#ccc", "width": "1px", "style": "solid"},
        "background": {"color": "#fff", "position": ["center", "top"], "repeat": "no-repeat"},
        "box-shadow": [
            {"x": 0, "y": "1px", "blur": "2px", "color": "rgba(0, 0, 0, 0.2)"},
            {"x": 0, "y": "4px", "blur": "8px", "color": "rgba(0, 0, 0, 0.1)"}
        ],
        "transition": {"property": ["opacity", "transform"], "duration": "200ms"},
        "transform": [["translateX(10px)", "rotate(5deg)"]],
        "fallbacks": [
            {"background": {"color": "white"}},
            {"border": {"width": "2px", "style": "solid"}}
        ]
    }))
    .unwrap()
}

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");

    let schema = Schema::builtin();
    let style = card_style();

    group.bench_function("expand_style_card", |b| {
        b.iter(|| expand_style(black_box(&style), &schema).unwrap())
    });

    let plugin = ExpandPlugin::new(schema.clone());
    let rules: Vec<Rule> = (0..100).map(|_| Rule::regular(card_style())).collect();

    group.bench_function("process_rules_100", |b| {
        b.iter(|| {
            let mut batch = rules.clone();
            plugin.process_rules(black_box(&mut batch)).unwrap();
            batch
        })
    });

    group.finish();
}

fn bench_schema(c: &mut Criterion) {
    c.bench_function("schema_builtin", |b| b.iter(Schema::builtin));
}

criterion_group!(benches, bench_expand, bench_schema);
criterion_main!(benches);
