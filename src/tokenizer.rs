/// word character かどうか
/// unicode alphanumeric と '_' を word character とする
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Tokenize text into lowercase word tokens
///
/// Punctuation is replaced by a space before splitting, so it separates
/// words instead of fusing them ("a,b" -> ["a", "b"]).
///
/// # Arguments
/// * `text` - 入力テキスト
///
/// # Returns
/// * `Vec<String>` - トークン列 (空文字列なら空)
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) || c.is_whitespace() { c } else { ' ' })
        .collect();
    normalized
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
