use tf_idf_retrieval::{cosine_similarity, euclidean_distance, fit};
use tracing_subscriber::EnvFilter;

fn main() -> tf_idf_retrieval::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // build corpus
    let documents = [
        "Rust is a systems programming language focused on safety.",
        "Python is a popular language for data science and machine learning.",
        "The cat sat on the mat.",
        "Dogs and cats are common household pets.",
        "Memory safety without garbage collection is a key Rust feature.",
    ];
    let state = fit(&documents)?;
    println!("vocabulary size: {}, documents: {}", state.vocab_size(), state.doc_num());

    // vectorize documents
    let vectors = state.transform_batch(&documents);

    // rank documents for a query
    let query = "rust memory safety";
    let query_vec = state.transform(query);
    let mut hits = Vec::with_capacity(documents.len());
    for (doc, vector) in documents.iter().zip(&vectors) {
        let score = cosine_similarity(&query_vec, vector)?;
        let distance = euclidean_distance(&query_vec, vector)?;
        hits.push((score, distance, *doc));
    }
    hits.sort_by(|a, b| b.0.total_cmp(&a.0));

    // print result
    println!("query: {query:?}");
    for (score, distance, doc) in hits.iter().take(3) {
        println!("  {score:.4} (dist {distance:.4})  {doc}");
    }
    Ok(())
}
