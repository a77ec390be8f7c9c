//! Japanese personal name detection for signature identification
//!
//! Combines structural shapes (name with katakana reading, name with romaji,
//! romaji-only) with membership checks against a bundled list of common
//! surnames and given names.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// 田中太郎 (タナカタロウ) or 田中太郎(タナカタロウ)
static NAME_WITH_READING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s(（]+\s*[（(][ァ-ヶー\s]+[）)]$").unwrap());

// 田中太郎 / Taro Tanaka or 田中 / Tanaka
static NAME_WITH_ROMAJI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s/]+\s*[/／]\s*[A-Za-z][A-Za-z\s]*$").unwrap());

// Taro Tanaka
static ROMAJI_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+$").unwrap());

/// Common Japanese surnames in kanji
const SURNAMES_KANJI: [&str; 100] = [
    "佐藤", "鈴木", "高橋", "田中", "伊藤", "渡辺", "山本", "中村", "小林", "加藤",
    "吉田", "山田", "佐々木", "山口", "松本", "井上", "木村", "林", "斎藤", "清水",
    "山崎", "森", "池田", "橋本", "阿部", "石川", "山下", "中島", "石井", "小川",
    "前田", "岡田", "長谷川", "藤田", "後藤", "近藤", "村上", "遠藤", "青木", "坂本",
    "斉藤", "福田", "太田", "西村", "藤井", "金子", "岡本", "藤原", "中野", "三浦",
    "原田", "中川", "松田", "竹内", "小野", "田村", "中山", "和田", "石田", "森田",
    "上田", "原", "内田", "柴田", "酒井", "宮崎", "横山", "高木", "安藤", "宮本",
    "大野", "小島", "谷口", "今井", "工藤", "高田", "増田", "丸山", "杉山", "村田",
    "大塚", "新井", "小山", "平野", "藤本", "河野", "上野", "野口", "武田", "松井",
    "千葉", "岩崎", "菅原", "木下", "久保", "佐野", "野村", "松尾", "菊地", "市川",
];

/// Common given names in kanji
const GIVEN_NAMES_KANJI: [&str; 60] = [
    "太郎", "次郎", "一郎", "健太", "翔太", "大輔", "拓也", "直樹", "亮", "剛",
    "誠", "学", "修", "薫", "豊", "進", "勝", "隆", "茂", "清",
    "博", "明", "浩", "正", "勇", "和也", "達也", "哲也", "智也", "雅之",
    "裕子", "恵子", "京子", "幸子", "和子", "久美子", "由美子", "真由美", "陽子", "直美",
    "愛", "恵", "舞", "彩", "美咲", "さくら", "葵", "凛", "結衣", "陽菜",
    "大翔", "蓮", "悠真", "陸", "駿", "海斗", "優斗", "颯太", "悠人", "湊",
];

/// Katakana readings of common surnames
const SURNAMES_KATAKANA: [&str; 40] = [
    "サトウ", "スズキ", "タカハシ", "タナカ", "イトウ", "ワタナベ", "ヤマモト", "ナカムラ",
    "コバヤシ", "カトウ", "ヨシダ", "ヤマダ", "ササキ", "ヤマグチ", "マツモト", "イノウエ",
    "キムラ", "ハヤシ", "サイトウ", "シミズ", "ヤマザキ", "モリ", "イケダ", "ハシモト",
    "アベ", "イシカワ", "ヤマシタ", "ナカジマ", "イシイ", "オガワ", "マエダ", "オカダ",
    "ハセガワ", "フジタ", "ゴトウ", "コンドウ", "ムラカミ", "エンドウ", "アオキ", "サカモト",
];

/// Romaji forms of common surnames
const SURNAMES_ROMAJI: [&str; 40] = [
    "sato", "suzuki", "takahashi", "tanaka", "ito", "watanabe", "yamamoto", "nakamura",
    "kobayashi", "kato", "yoshida", "yamada", "sasaki", "yamaguchi", "matsumoto", "inoue",
    "kimura", "hayashi", "saito", "shimizu", "yamazaki", "mori", "ikeda", "hashimoto",
    "abe", "ishikawa", "yamashita", "nakajima", "ishii", "ogawa", "maeda", "okada",
    "hasegawa", "fujita", "goto", "kondo", "murakami", "endo", "aoki", "sakamoto",
];

static SURNAME_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SURNAMES_KANJI.into_iter().collect());

static GIVEN_NAME_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| GIVEN_NAMES_KANJI.into_iter().collect());

static KATAKANA_NAME_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SURNAMES_KATAKANA.into_iter().collect());

const NAME_LINE_MAX_CHARS: usize = 15;
const PUNCTUATION: [char; 10] = ['。', '、', '！', '？', '!', '?', ',', '.', ':', ';'];

/// Check whether a line appears to be a personal name on its own, the way
/// names appear in signatures.
#[must_use]
pub fn is_name_line(line: &str) -> bool {
    let stripped = line.trim();
    if stripped.is_empty() {
        return false;
    }

    if NAME_WITH_READING.is_match(stripped)
        || NAME_WITH_ROMAJI.is_match(stripped)
        || ROMAJI_NAME.is_match(stripped)
    {
        return true;
    }

    // Short punctuation-free lines may be a bare name
    if stripped.chars().count() > NAME_LINE_MAX_CHARS || stripped.contains(&PUNCTUATION[..]) {
        return false;
    }

    let compact: String = stripped.chars().filter(|c| !c.is_whitespace()).collect();

    for surname in SURNAME_SET.iter() {
        if let Some(rest) = compact.strip_prefix(surname) {
            if rest.is_empty() || GIVEN_NAME_SET.contains(rest) {
                return true;
            }
        }
    }

    KATAKANA_NAME_SET.contains(compact.as_str())
}

/// Check whether a line contains a known Japanese name anywhere.
///
/// Broader than [`is_name_line`]: useful for spotting signature blocks that
/// mix a name with other information on one line.
#[must_use]
pub fn contains_known_name(line: &str) -> bool {
    let stripped = line.trim();
    if stripped.is_empty() {
        return false;
    }

    if SURNAME_SET.iter().any(|n| stripped.contains(n)) {
        return true;
    }
    if KATAKANA_NAME_SET.iter().any(|n| stripped.contains(n)) {
        return true;
    }

    let lower = stripped.to_lowercase();
    SURNAMES_ROMAJI
        .iter()
        .any(|n| lower.split(|c: char| !c.is_ascii_alphabetic()).any(|w| w == *n))
}
