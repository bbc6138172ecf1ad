use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ordver::prelude::*;

fn parse_ok_inputs() -> Vec<&'static str> {
    vec![
        "1",
        "1.2",
        "1.2.3",
        "1.2.3-alpha.1",
        "1.2.3-alpha.1+linux.x86-64",
        "10.20.30-rc.1.oddity+exp.sha.5114f85",
    ]
}

fn parse_ok(inputs: &[&str]) {
    for input in inputs {
        let res = SemanticVersion::parse(input);
        assert!(res.is_ok());
    }
}

fn parse_err_inputs() -> Vec<&'static str> {
    vec!["", "1.01.0", "1.2.3.4", "1.0.0-alpha..1", "1.0.0-alpha.alpha"]
}

fn parse_err(inputs: &[&str]) {
    for input in inputs {
        let res = SemanticVersion::parse(input);
        assert!(res.is_err());
    }
}

fn precedence_pairs() -> Vec<(SemanticVersion, SemanticVersion)> {
    [
        ("1.0.0-alpha", "1.0.0-alpha.1"),
        ("1.0.0-alpha.beta", "1.0.0-beta.11"),
        ("1.0.0-rc.1", "1.0.0"),
        ("1.0.0+build1", "1.0.0+build2"),
    ]
    .iter()
    .map(|(left, right)| {
        (
            SemanticVersion::parse(left).unwrap(),
            SemanticVersion::parse(right).unwrap(),
        )
    })
    .collect()
}

fn precedence(pairs: &[(SemanticVersion, SemanticVersion)]) {
    for (left, right) in pairs {
        black_box(left.precedence(right));
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("parse_ok", |b| {
        b.iter(|| parse_ok(black_box(&parse_ok_inputs())))
    });
    c.bench_function("parse_err", |b| {
        b.iter(|| parse_err(black_box(&parse_err_inputs())))
    });
    let pairs = precedence_pairs();
    c.bench_function("precedence", |b| b.iter(|| precedence(black_box(&pairs))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
