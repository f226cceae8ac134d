use criterion::{Criterion, criterion_group, criterion_main};
use jsonmend::{Options, repair_to_string};

fn bench_repair(c: &mut Criterion) {
    let mut group = c.benchmark_group("repair");
    let code_doc = "{\"fileTree\":{\"main.rs\":{\"file\":{\"contents\":\"fn main() {\n    println!(\"hi\");\n}\"}}}";
    let cases = vec![
        r#"{"a": 1, "b": [1, 2, 3]}"#, // fast path
        r#"{"a":1,,}"#,                // comma runs, needs the fallback re-strip
        r#"{"a":{"b":1}"#,             // missing closer
        r#"{"a":1}}"#,                 // extra closer
        code_doc,                      // escaping work on embedded code
        "{name: 'x', other: 'y',}",    // aggressive rewrites
    ];
    let opts = Options::default();
    for (i, s) in cases.into_iter().enumerate() {
        group.bench_function(format!("case_{}", i), |b| {
            b.iter(|| {
                let out = repair_to_string(std::hint::black_box(s), &opts).unwrap();
                std::hint::black_box(out);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_repair);
criterion_main!(benches);
