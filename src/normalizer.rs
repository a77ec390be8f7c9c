//! Text normalization for Japanese emails
//!
//! Applies, in order: line-ending unification, a neologdn-style
//! Japanese-aware transform (dash unification, prolonged-sound-mark
//! collapsing, tilde removal), Unicode NFKC, and zero-width stripping.
//! Visual separator lines are preserved verbatim so that a `---` run is
//! never collapsed out of existence.

use crate::error::{ExtractionError, Result};
use crate::patterns::is_separator_line;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Result of normalizing an email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEmail {
    /// Normalized lines, one per source line, without line endings.
    /// Whitespace-only lines are the empty string.
    pub lines: Vec<String>,

    /// Full normalized text joined with `\n`
    pub text: String,
}

/// Zero-width characters stripped from every line
const ZERO_WIDTH: [char; 5] = ['\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}', '\u{2060}'];

/// Hyphen-like variants unified to ASCII `-`
const HYPHEN_VARIANTS: [char; 10] =
    ['˗', '֊', '‐', '‑', '‒', '–', '⁃', '⁻', '₋', '−'];

/// Prolonged-sound-mark variants unified to `ー`
const PROLONGED_VARIANTS: [char; 7] = ['﹣', '－', 'ｰ', '—', '―', '─', '━'];

/// Tilde/wave-dash variants removed outright
const TILDE_VARIANTS: [char; 6] = ['~', '∼', '∽', '〜', '〰', '～'];

/// Normalize raw email text into lines ready for pattern matching.
///
/// Fails with [`ExtractionError::InvalidInput`] when the input is empty or
/// contains no non-whitespace character.
pub fn normalize(text: &str) -> Result<NormalizedEmail> {
    if text.is_empty() || text.chars().all(char::is_whitespace) {
        return Err(ExtractionError::InvalidInput("empty input".into()));
    }

    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<String> = unified.split('\n').map(normalize_line).collect();

    if lines.iter().all(String::is_empty) {
        return Err(ExtractionError::InvalidInput(
            "no content after normalization".into(),
        ));
    }

    let text = lines.join("\n");
    Ok(NormalizedEmail { lines, text })
}

fn normalize_line(line: &str) -> String {
    // Delimiter runs must survive untouched: the transform below would
    // collapse ───── to a single character.
    if is_separator_line(line) {
        return line.to_string();
    }

    let transformed = japanese_transform(line);
    let folded: String = transformed
        .nfkc()
        .filter(|c| !ZERO_WIDTH.contains(c))
        .collect();

    if folded.trim().is_empty() {
        String::new()
    } else {
        folded
    }
}

/// The neologdn-style pass: dash unification, prolonged-sound-mark
/// collapsing, tilde removal. Width folding is left to NFKC.
///
/// Ambiguous dash-like characters (－, —, ―, ...) read as a prolonged sound
/// mark after Japanese text and as a plain hyphen otherwise, so ０３－１２３４
/// becomes 03-1234 while スーーパー keeps its ー.
fn japanese_transform(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut prev_prolonged = false;
    let mut prev_japanese = false;

    for c in line.chars() {
        let c = if HYPHEN_VARIANTS.contains(&c) {
            '-'
        } else if PROLONGED_VARIANTS.contains(&c) {
            if prev_japanese { 'ー' } else { '-' }
        } else {
            c
        };

        if TILDE_VARIANTS.contains(&c) {
            prev_prolonged = false;
            prev_japanese = false;
            continue;
        }

        if c == 'ー' {
            if prev_prolonged {
                continue;
            }
            prev_prolonged = true;
        } else {
            prev_prolonged = false;
        }
        prev_japanese = is_japanese_char(c);
        out.push(c);
    }

    out
}

fn is_japanese_char(c: char) -> bool {
    matches!(c,
        'ー'
        | '\u{3040}'..='\u{309F}'
        | '\u{30A0}'..='\u{30FF}'
        | '\u{31F0}'..='\u{31FF}'
        | '\u{FF66}'..='\u{FF9F}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}')
}
