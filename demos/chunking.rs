use tf_idf_retrieval::{cosine_similarity, fit, Chunk, ChunkStrategy, Chunker};
use tracing_subscriber::EnvFilter;

const GUIDE: &str = "# Database Configuration Guide

## Introduction

This guide explains how to configure database connections for your application.

## Connection Pooling

Connection pooling improves application performance by reusing database connections.
Set the pool_size parameter to the maximum number of connections you want to maintain.

## SSL Configuration

For production environments, always use SSL to encrypt database connections.
Add sslmode=require to your connection string.

## Performance Tuning

Increase the shared_buffers setting to allocate more memory for caching data.
Use EXPLAIN ANALYZE to understand query execution plans.";

fn print_chunks(label: &str, chunks: &[Chunk]) {
    println!("== {label}: {} chunks", chunks.len());
    for chunk in chunks {
        println!(
            "  #{} [{}..{}] {:?}",
            chunk.sequence_number, chunk.start_index, chunk.end_index, chunk.text
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 設定は JSON などからも読める
    let fixed: ChunkStrategy =
        serde_json::from_str(r#"{"strategy": "fixed_size", "chunk_size": 12, "overlap": 3}"#)?;
    let fixed_chunks = Chunker::new(fixed)?.chunk(GUIDE);
    print_chunks("fixed size", &fixed_chunks);

    let semantic = ChunkStrategy::Semantic { header_marker: '#' };
    let semantic_chunks = Chunker::new(semantic)?.chunk(GUIDE);
    print_chunks("semantic", &semantic_chunks);

    // index sections and retrieve the best one
    let sections: Vec<&str> = semantic_chunks.iter().map(|c| c.text.as_str()).collect();
    let state = fit(&sections)?;
    let vectors = state.transform_batch(&sections);
    let query = state.transform("how do I enable ssl?");
    let mut best: Option<(f64, &str)> = None;
    for (section, vector) in sections.iter().zip(&vectors) {
        let score = cosine_similarity(&query, vector)?;
        if best.map_or(true, |(s, _)| score > s) {
            best = Some((score, *section));
        }
    }
    if let Some((score, section)) = best {
        println!("best section ({score:.4}):\n{section}");
    }
    Ok(())
}
