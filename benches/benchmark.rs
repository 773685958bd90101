use criterion::{criterion_group, criterion_main, Criterion};
use tf_idf_retrieval::{chunk_fixed, chunk_semantic, cosine_similarity, fit};

// ネットワークなしで再現可能なコーパスを生成
fn synthetic_corpus(doc_num: usize, words_per_doc: usize) -> Vec<String> {
    let mut seed = 0x1234_5678u32;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        seed
    };
    (0..doc_num)
        .map(|i| {
            let mut doc = format!("# Section {i}\n");
            for w in 0..words_per_doc {
                doc.push_str(&format!("term{} ", next() % 2000));
                if w % 40 == 39 {
                    doc.push_str("\n## Sub\n");
                }
            }
            doc
        })
        .collect()
}

fn vectorize_and_rank_benchmark(c: &mut Criterion) {
    let texts = synthetic_corpus(200, 400);

    c.bench_function("fit", |b| {
        b.iter(|| fit(&texts).unwrap());
    });

    let state = fit(&texts).unwrap();
    c.bench_function("transform_batch", |b| {
        b.iter(|| state.transform_batch(&texts));
    });

    let vectors = state.transform_batch(&texts);
    let query = state.transform("term1 term42 term1999");
    c.bench_function("rank_by_cosine", |b| {
        b.iter(|| {
            let mut scores: Vec<(usize, f64)> = vectors
                .iter()
                .enumerate()
                .map(|(i, v)| (i, cosine_similarity(&query, v).unwrap()))
                .collect();
            scores.sort_by(|a, b| b.1.total_cmp(&a.1));
            scores.truncate(10);
            scores
        });
    });
}

fn chunking_benchmark(c: &mut Criterion) {
    let text = synthetic_corpus(20, 2000).join("\n");

    c.bench_function("chunk_fixed", |b| {
        b.iter(|| chunk_fixed(&text, 200, 50).unwrap());
    });

    c.bench_function("chunk_semantic", |b| {
        b.iter(|| chunk_semantic(&text));
    });
}

criterion_group!(benches, vectorize_and_rank_benchmark, chunking_benchmark);
criterion_main!(benches);
