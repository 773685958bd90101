use crate::{chunker::{validate_window, Chunk}, error::Result};

/// Split text into overlapping windows of words
///
/// Words are whitespace separated, punctuation is kept. Each window holds
/// `chunk_size` words and the next one starts `chunk_size - overlap` words
/// later. When fewer than `chunk_size` words remain, one final short chunk
/// covers exactly the rest. No window starts past the end of the input and
/// no trailing word is dropped.
///
/// # Arguments
/// * `text` - 入力テキスト
/// * `chunk_size` - 1チャンクの単語数 (> 0)
/// * `overlap` - 隣接チャンク間で共有する単語数 (< chunk_size)
///
/// # Errors
/// * `Error::InvalidInput` - `chunk_size == 0` or `overlap >= chunk_size`,
///   checked before the text is looked at
///
/// # Examples
/// ```
/// use tf_idf_retrieval::chunk_fixed;
/// let chunks = chunk_fixed("w1 w2 w3 w4 w5", 2, 0).unwrap();
/// let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
/// assert_eq!(texts, vec!["w1 w2", "w3 w4", "w5"]);
/// ```
pub fn chunk_fixed(text: &str, chunk_size: usize, overlap: usize) -> Result<Vec<Chunk>> {
    validate_window(chunk_size, overlap)?;
    Ok(chunk_words(text, chunk_size, overlap))
}

/// window パラメータは検証済みであること
pub(crate) fn chunk_words(text: &str, chunk_size: usize, overlap: usize) -> Vec<Chunk> {
    debug_assert!(chunk_size > overlap);
    let words: Vec<&str> = text.split_whitespace().collect();
    let stride = chunk_size - overlap;
    let mut chunks = Vec::new();
    let mut start = 0usize;
    while start < words.len() {
        let end = (start + chunk_size).min(words.len());
        chunks.push(Chunk {
            text: words[start..end].join(" "),
            start_index: start,
            end_index: end,
            sequence_number: chunks.len(),
        });
        // 末尾に到達したら終了
        if end == words.len() {
            break;
        }
        start += stride;
    }
    tracing::trace!(
        word_num = words.len(),
        chunk_num = chunks.len(),
        chunk_size,
        overlap,
        "fixed-size chunking"
    );
    chunks
}
