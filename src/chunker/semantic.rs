use crate::chunker::{Chunk, DEFAULT_HEADER_MARKER};

/// Split text into header-delimited sections
///
/// Uses `#` as the header marker, see `chunk_semantic_with_marker`.
///
/// # Examples
/// ```
/// use tf_idf_retrieval::chunk_semantic;
/// let chunks = chunk_semantic("# A\nfoo\n# B\nbar\nbaz");
/// let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
/// assert_eq!(texts, vec!["foo", "bar\nbaz"]);
/// ```
pub fn chunk_semantic(text: &str) -> Vec<Chunk> {
    chunk_semantic_with_marker(text, DEFAULT_HEADER_MARKER)
}

/// Split text into sections delimited by header lines
///
/// A line is a header when its trimmed form starts with `header_marker`.
/// Header lines only mark boundaries, they are not part of any chunk. Every
/// non-empty run of non-header lines becomes one chunk, its lines joined with
/// `\n` and trimmed (a run of blank lines gives a chunk with empty text).
/// `start_index..end_index` is the section's line range: from its first line
/// up to the closing header (or the line count). A text without header lines
/// gives exactly one chunk with the whole trimmed text.
pub fn chunk_semantic_with_marker(text: &str, header_marker: char) -> Vec<Chunk> {
    let lines: Vec<&str> = text.lines().collect();
    let mut chunks = Vec::new();
    let mut section: Vec<&str> = Vec::new();
    let mut section_start = 0usize;

    for (i, &line) in lines.iter().enumerate() {
        if line.trim_start().starts_with(header_marker) {
            flush_section(&mut chunks, &mut section, section_start, i);
            // 次のセクションはヘッダーの次の行から
            section_start = i + 1;
        } else {
            section.push(line);
        }
    }
    flush_section(&mut chunks, &mut section, section_start, lines.len());

    tracing::trace!(
        line_num = lines.len(),
        chunk_num = chunks.len(),
        %header_marker,
        "semantic chunking"
    );
    chunks
}

fn flush_section(chunks: &mut Vec<Chunk>, section: &mut Vec<&str>, start: usize, end: usize) {
    if section.is_empty() {
        return;
    }
    let text = section.join("\n").trim().to_string();
    section.clear();
    chunks.push(Chunk {
        text,
        start_index: start,
        end_index: end,
        sequence_number: chunks.len(),
    });
}
