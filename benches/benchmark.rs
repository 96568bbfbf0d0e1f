use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mentionize::{config::TokenizerConfig, ParserOptions};

fn sample_text(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("line {i}: ping @user{i} and ##team about {{{{ item_{i} }}}} today\n"))
        .collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let tokenizer = TokenizerConfig::default().build().unwrap();
    let mut config = TokenizerConfig::default();
    config.options = ParserOptions::with_newlines();
    let newline_tokenizer = config.build().unwrap();
    let text = sample_text(500);

    c.bench_function("tokenize 500 lines", |b| {
        b.iter(|| tokenizer.tokenize(black_box(&text)))
    });
    c.bench_function("tokenize 500 lines with newlines", |b| {
        b.iter(|| newline_tokenizer.tokenize(black_box(&text)))
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
