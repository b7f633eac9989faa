use criterion::{criterion_group, criterion_main, Criterion};
use legal_corpus_search::text_processing::Tokenizer;

fn bench_tokenize(c: &mut Criterion) {
    let tokenizer = Tokenizer::new().unwrap();
    let text = "Breach of contract occurs when a party fails to perform their \
                obligations as specified in the agreement. "
        .repeat(50);
    c.bench_function("tokenize_corpus_page", |b| b.iter(|| tokenizer.tokenize(&text)));
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
