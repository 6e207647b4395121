//! 自由文からファイル名に使える slug を作る

use unicode_normalization::char::is_combining_mark;

/// ファイル名に含める slug の最大文字数（呼び出し側で適用する）
pub const FILENAME_SLUG_MAX_CHARS: usize = 50;

/// 小文字の英数字（Unicode の文字・数字）の連なりをハイフン 1 つで区切った文字列にする。
///
/// 1 文字ずつ小文字化し、小文字化後も大文字のままの文字（例: `ϒ`）は英数字として扱わない。
/// 結合文字（`İ` の小文字化で付く U+0307 など）は区切りにせず捨てる。
/// 英数字以外の連続はハイフン 1 つに畳み、先頭・末尾のハイフンは除く。空入力は空文字列。
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_hyphen = false;
    for c in s.chars().flat_map(char::to_lowercase) {
        if is_combining_mark(c) {
            continue;
        }
        if c.is_alphanumeric() && !c.is_uppercase() {
            out.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen {
            out.push('-');
            prev_hyphen = true;
        }
    }
    out.trim_matches('-').to_string()
}

/// 先頭から最大 `max_chars` 文字を返す（文字境界で切る）
pub fn cap(slug: &str, max_chars: usize) -> &str {
    match slug.char_indices().nth(max_chars) {
        Some((i, _)) => &slug[..i],
        None => slug,
    }
}
