//! Visual separator line detection

/// Glyphs that may form a delimiter run
const DELIMITER_GLYPHS: [char; 9] = ['-', '─', '━', '=', '＝', '_', '*', '★', '☆'];

/// Check whether a line is a visual separator.
///
/// A separator consists (after trimming) solely of delimiter glyphs, with at
/// least one glyph repeated three or more times in a row. Decorative
/// terminators built from other glyphs in the set are allowed, so `★---★`
/// qualifies while `詳細は---をご確認` does not.
#[must_use]
pub fn is_separator_line(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }
    if !trimmed.chars().all(|c| DELIMITER_GLYPHS.contains(&c)) {
        return false;
    }
    longest_glyph_run(trimmed) >= 3
}

fn longest_glyph_run(s: &str) -> usize {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if prev == Some(c) {
            run += 1;
        } else {
            run = 1;
            prev = Some(c);
        }
        longest = longest.max(run);
    }
    longest
}
