//! Japanese email greeting detection

use regex::Regex;
use std::sync::LazyLock;

static GREETING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Business staples
        r"お世話になっております",
        r"お世話になります",
        // Formal letter openings
        r"^拝啓[、,]?",
        r"^前略[、,]?",
        r"^謹啓[、,]?",
        // Internal greetings
        r"^お疲れ様です[。.]?",
        r"^お疲れさまです[。.]?",
        r"^おつかれさまです[。.]?",
        r"^お疲れ様でございます",
        // First contact
        r"初めてご連絡",
        r"初めてメール",
        r"突然のご連絡",
        r"突然のメール",
        r"突然メール",
        // Long time no see
        r"ご無沙汰",
        // Thanks used as an opener
        r"ご連絡(を)?ありがとう",
        r"ご返信(を)?ありがとう",
        r"ご対応(を)?ありがとう",
        r"メール(を)?ありがとう",
        // Addressee lines
        r"^.+様[、,]?$",
        r"^.+さん[、,]?$",
        r"^.+殿[、,]?$",
        r"^.+御中[、,]?$",
        // Plain greetings
        r"^こんにちは[。.]?$",
        r"^おはようございます[。.]?$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Check whether a line matches a greeting formula.
#[must_use]
pub fn is_greeting_line(line: &str) -> bool {
    let stripped = line.trim();
    if stripped.is_empty() {
        return false;
    }
    GREETING_PATTERNS.iter().any(|p| p.is_match(stripped))
}
