//! Japanese email closing detection

use regex::Regex;
use std::sync::LazyLock;

static CLOSING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Business staples
        r"よろしくお願い(いた|致)します[。.]?$",
        r"よろしくお願い申し上げます[。.]?$",
        r"よろしくお願いします[。.]?$",
        r"^以上[、,]?.*よろしくお願い",
        r"何卒よろしくお願い",
        r"どうぞよろしくお願い",
        r"引き続きよろしくお願い",
        r"今後(とも)?よろしくお願い",
        // Requests for review
        r"ご確認.*よろしくお願い",
        r"ご検討.*よろしくお願い",
        r"ご対応.*よろしくお願い",
        // Apologies for trouble
        r"お手数をおかけしますが",
        r"お手数ですが",
        r"ご面倒をおかけしますが",
        // Formal letter closings
        r"^敬具[。.]?$",
        r"^草々[。.]?$",
        r"^敬白[。.]?$",
        r"^謹白[。.]?$",
        r"^早々[。.]?$",
        // 以上 variants
        r"^以上です[。.]?$",
        r"^以上となります[。.]?$",
        r"^以上[。.]?$",
        // Waiting for a reply
        r"ご返信.*お待ち",
        r"お返事.*お待ち",
        // Thanks
        r"ありがとうございます[。.]?$",
        r"ありがとうございました[。.]?$",
        // Sign-off
        r"失礼いたします[。.]?$",
        r"失礼します[。.]?$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Check whether a line matches a closing formula.
#[must_use]
pub fn is_closing_line(line: &str) -> bool {
    let stripped = line.trim();
    if stripped.is_empty() {
        return false;
    }
    CLOSING_PATTERNS.iter().any(|p| p.is_match(stripped))
}
