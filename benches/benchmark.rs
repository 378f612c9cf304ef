use criterion::{criterion_group, criterion_main, Criterion};
use text_representation::{
    embedding::presets::DEFAULT_SELECTION, vectorize, EmbeddingModel, Pipeline, PipelineConfig, Scheme,
    TokenizeOptions,
};

const WORDS: &[&str] = &[
    "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "outpaces", "sleeps", "day", "long", "foxes",
    "known", "being", "clever", "animals", "king", "queen", "computer",
];

/// Deterministic synthetic corpus
fn corpus(docs: usize, len: usize) -> Vec<String> {
    (0..docs)
        .map(|d| {
            (0..len)
                .map(|i| WORDS[(d * 7 + i * 13 + i / 3) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn vectorize_and_rank_benchmark(c: &mut Criterion) {
    let docs = corpus(200, 300);
    let opts = TokenizeOptions::default();

    for scheme in [Scheme::BagOfWords, Scheme::NGram(2), Scheme::TfIdf] {
        let vocab = scheme.vocabulary(&docs, &opts).expect("vocabulary");
        c.bench_function(&format!("vectorize_{scheme:?}"), |b| {
            b.iter(|| vectorize(&docs, &vocab, scheme, &opts).expect("vectorize"));
        });
    }

    // Full run, including pairwise ranking of all document pairs
    let pipeline = Pipeline::new(PipelineConfig::default());
    c.bench_function("pipeline_run", |b| {
        b.iter(|| pipeline.run(&docs).expect("run"));
    });

    let table = EmbeddingModel::Explorer.table();
    c.bench_function("analogy", |b| {
        b.iter(|| table.solve("king", "man", "woman"));
    });
    let demo = EmbeddingModel::Demo.table();
    c.bench_function("embedding_similarities", |b| {
        b.iter(|| demo.similarities(&DEFAULT_SELECTION));
    });
}

criterion_group!(benches, vectorize_and_rank_benchmark);
criterion_main!(benches);
