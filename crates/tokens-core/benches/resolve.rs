use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Map, Value};
use tokens_core::{resolve, ResolveOptions};

fn definition(props: usize, aliases: usize) -> Value {
    let mut alias_map = Map::new();
    alias_map.insert("alias-0".to_string(), json!({ "value": "4px" }));
    for i in 1..aliases {
        alias_map.insert(
            format!("alias-{}", i),
            json!({ "value": format!("{{!alias-{}}}", i - 1) }),
        );
    }

    let mut prop_map = Map::new();
    for i in 0..props {
        prop_map.insert(
            format!("prop-{}", i),
            json!({ "value": format!("{{!alias-{}}} solid", i % aliases), "type": "border" }),
        );
    }

    json!({
        "props": prop_map,
        "aliases": alias_map,
        "global": { "category": "border" },
        "imports": [{
            "props": { "imported": { "value": "1px", "type": "size", "category": "space" } },
            "aliases": {},
            "global": {}
        }]
    })
}

fn bench_resolve(c: &mut Criterion) {
    let options = ResolveOptions::default();
    let small = definition(50, 5);
    let large = definition(1_000, 20);

    c.bench_function("resolve_50_props", |b| {
        b.iter(|| resolve(black_box(Some(&small)), &options))
    });
    c.bench_function("resolve_1000_props", |b| {
        b.iter(|| resolve(black_box(Some(&large)), &options))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
