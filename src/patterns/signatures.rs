//! Contact, company, and position patterns found in signature blocks

use regex::Regex;
use std::sync::LazyLock;

static CONTACT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Phone labels (ASCII after normalization)
        r"(?i)TEL\s*[:：]",
        r"電話\s*[:：]",
        r"携帯\s*[:：]",
        r"直通\s*[:：]",
        r"内線\s*[:：]",
        // Fax labels
        r"(?i)FAX\s*[:：]",
        r"ファックス\s*[:：]",
        r"ファクス\s*[:：]",
        // Japanese phone number shapes
        r"\d{2,4}-\d{2,4}-\d{4}",
        r"\(\d{2,4}\)\s*\d{2,4}-\d{4}",
        // Email labels and addresses
        r"(?i)E-?mail\s*[:：]",
        r"(?i)\bmail\s*[:：]",
        r"メール\s*[:：]",
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}",
        // URLs
        r"https?://",
        r"www\.",
        r"(?i)URL\s*[:：]",
        r"HP\s*[:：]",
        r"ホームページ\s*[:：]",
        // Postal codes
        r"〒\s*\d{3}-?\d{4}",
        r"郵便番号\s*[:：]?\s*\d{3}-?\d{4}",
        // Address labels
        r"住所\s*[:：]",
        r"所在地\s*[:：]",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static COMPANY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"株式会社",
        r"有限会社",
        r"合同会社",
        r"合資会社",
        r"合名会社",
        r"\(株\)",
        r"\(有\)",
        r"(?i)\bInc\.?",
        r"(?i)\bCorp\.?",
        r"(?i)\bCo\.,?\s*Ltd\.?",
        r"(?i)\bLLC\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static POSITION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"代表取締役",
        r"取締役",
        r"部長",
        r"課長",
        r"係長",
        r"主任",
        r"マネージャー",
        r"リーダー",
        r"担当",
        r"スタッフ",
        r"チーフ",
        r"ディレクター",
        r"エンジニア",
        r"(?i)\bManager\b",
        r"(?i)\bDirector\b",
        r"(?i)\bEngineer\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Check whether a line contains contact information: phone, fax, email
/// address, URL, or postal code shapes.
#[must_use]
pub fn is_contact_info_line(line: &str) -> bool {
    if line.trim().is_empty() {
        return false;
    }
    CONTACT_PATTERNS.iter().any(|p| p.is_match(line))
}

/// Check whether a line contains a company suffix such as 株式会社 or Inc.
#[must_use]
pub fn is_company_line(line: &str) -> bool {
    if line.trim().is_empty() {
        return false;
    }
    COMPANY_PATTERNS.iter().any(|p| p.is_match(line))
}

/// Check whether a line contains a position/title such as 部長 or Manager.
#[must_use]
pub fn is_position_line(line: &str) -> bool {
    if line.trim().is_empty() {
        return false;
    }
    POSITION_PATTERNS.iter().any(|p| p.is_match(line))
}
