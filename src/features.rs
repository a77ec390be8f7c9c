//! Per-line feature extraction for CRF sequence labeling
//!
//! Produces the 37-feature vector per content line: positional, content,
//! whitespace-context, structural, pattern, windowed-aggregate, and
//! bracket-block features. All indices here are content-line indices, not
//! original document indices.

use crate::patterns::{
    contains_known_name, has_meta_discussion, is_closing_line, is_company_line,
    is_contact_info_line, is_greeting_line, is_name_line, is_position_line, is_separator_line,
};
use crate::structural::{AnnotatedLine, StructuralAnalysis};
use serde::{Deserialize, Serialize};

/// Size of the contextual window on each side of a line
const CONTEXT_WINDOW: usize = 2;

/// Maximum content-line distance between the two separators of a bracket
const BRACKET_MAX_SPAN: usize = 15;

/// Feature vector for a single content line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineFeatures {
    // Positional
    /// 0.0 at the first content line, 1.0 at the last
    pub position_normalized: f64,
    /// 1.0 at the first content line, 0.0 at the last
    pub position_reverse: f64,
    pub lines_from_start: usize,
    pub lines_from_end: usize,
    /// Signed normalized distance to the first quoted line, 0 if none
    pub position_rel_first_quote: f64,
    /// Signed normalized distance to the last quoted line, 0 if none
    pub position_rel_last_quote: f64,

    // Content
    /// Length in characters
    pub line_length: usize,
    pub kanji_ratio: f64,
    pub hiragana_ratio: f64,
    pub katakana_ratio: f64,
    pub ascii_ratio: f64,
    pub digit_ratio: f64,
    pub symbol_ratio: f64,
    pub leading_whitespace: usize,
    pub trailing_whitespace: usize,

    // Whitespace context
    pub blank_lines_before: usize,
    pub blank_lines_after: usize,

    // Structural
    pub quote_depth: usize,
    pub is_forward_reply_header: bool,
    pub preceded_by_delimiter: bool,
    pub is_delimiter: bool,

    // Pattern flags
    pub is_greeting: bool,
    pub is_closing: bool,
    pub has_contact_info: bool,
    pub has_company_pattern: bool,
    pub has_position_pattern: bool,
    pub has_name_pattern: bool,
    pub is_visual_separator: bool,
    pub has_meta_discussion: bool,
    pub is_inside_quotation_marks: bool,

    // Contextual window (±2 lines, current line included)
    pub context_greeting_count: usize,
    pub context_closing_count: usize,
    pub context_contact_count: usize,
    pub context_quote_count: usize,
    pub context_separator_count: usize,

    // Bracket block
    pub in_bracketed_section: bool,
    pub bracket_has_signature_patterns: bool,
}

/// A run of content lines bounded by two visual separators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketBlock {
    /// Content index of the opening separator
    pub start: usize,
    /// Content index of the closing separator
    pub end: usize,
}

/// Result of feature extraction for an entire email
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFeatures {
    /// One feature vector per content line
    pub line_features: Vec<LineFeatures>,

    /// Number of content lines
    pub total_lines: usize,

    /// Bracketed blocks, shared with CRF post-processing
    pub bracket_blocks: Vec<BracketBlock>,
}

#[derive(Debug, Clone, Copy, Default)]
struct PatternFlags {
    is_greeting: bool,
    is_closing: bool,
    has_contact_info: bool,
    has_company_pattern: bool,
    has_position_pattern: bool,
    has_name_pattern: bool,
    is_visual_separator: bool,
    has_meta_discussion: bool,
    is_inside_quotation_marks: bool,
}

impl PatternFlags {
    fn compute(text: &str) -> Self {
        Self {
            is_greeting: is_greeting_line(text),
            is_closing: is_closing_line(text),
            has_contact_info: is_contact_info_line(text),
            has_company_pattern: is_company_line(text),
            has_position_pattern: is_position_line(text),
            has_name_pattern: is_name_line(text) || contains_known_name(text),
            is_visual_separator: is_separator_line(text),
            has_meta_discussion: has_meta_discussion(text),
            is_inside_quotation_marks: is_inside_quotation_marks(text),
        }
    }

    fn any_signature_pattern(self) -> bool {
        self.has_contact_info
            || self.has_company_pattern
            || self.has_position_pattern
            || self.has_name_pattern
    }
}

/// Extract feature vectors for all content lines.
#[must_use]
pub fn extract(analysis: &StructuralAnalysis) -> ExtractedFeatures {
    let lines = &analysis.lines;
    let total = lines.len();

    if total == 0 {
        return ExtractedFeatures {
            line_features: Vec::new(),
            total_lines: 0,
            bracket_blocks: Vec::new(),
        };
    }

    let flags: Vec<PatternFlags> = lines.iter().map(|l| PatternFlags::compute(l.text())).collect();
    let blocks = bracket_blocks(lines);

    let line_features = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            line_features(line, idx, total, analysis, &flags, &blocks)
        })
        .collect();

    ExtractedFeatures {
        line_features,
        total_lines: total,
        bracket_blocks: blocks,
    }
}

fn line_features(
    line: &AnnotatedLine,
    idx: usize,
    total: usize,
    analysis: &StructuralAnalysis,
    flags: &[PatternFlags],
    blocks: &[BracketBlock],
) -> LineFeatures {
    let text = line.text();

    let position_normalized = idx as f64 / (total.max(2) - 1) as f64;
    let position_rel_first_quote = analysis
        .first_quote_index
        .map_or(0.0, |q| (idx as f64 - q as f64) / total as f64);
    let position_rel_last_quote = analysis
        .last_quote_index
        .map_or(0.0, |q| (idx as f64 - q as f64) / total as f64);

    let ratios = character_ratios(text);
    let char_count = text.chars().count();
    let leading_whitespace = char_count - text.trim_start().chars().count();
    let trailing_whitespace = char_count - text.trim_end().chars().count();

    let window = context_counts(idx, analysis, flags);
    let bracket = blocks.iter().find(|b| b.start <= idx && idx <= b.end);
    let bracket_has_signature_patterns = bracket.is_some_and(|b| {
        flags[b.start..=b.end].iter().any(|f| f.any_signature_pattern())
    });

    let f = flags[idx];

    LineFeatures {
        position_normalized,
        position_reverse: 1.0 - position_normalized,
        lines_from_start: idx,
        lines_from_end: total - 1 - idx,
        position_rel_first_quote,
        position_rel_last_quote,
        line_length: char_count,
        kanji_ratio: ratios.kanji,
        hiragana_ratio: ratios.hiragana,
        katakana_ratio: ratios.katakana,
        ascii_ratio: ratios.ascii,
        digit_ratio: ratios.digit,
        symbol_ratio: ratios.symbol,
        leading_whitespace,
        trailing_whitespace,
        blank_lines_before: line.content.blank_lines_before,
        blank_lines_after: line.content.blank_lines_after,
        quote_depth: line.quote_depth,
        is_forward_reply_header: line.is_forward_reply_header,
        preceded_by_delimiter: line.preceded_by_delimiter,
        is_delimiter: line.is_delimiter,
        is_greeting: f.is_greeting,
        is_closing: f.is_closing,
        has_contact_info: f.has_contact_info,
        has_company_pattern: f.has_company_pattern,
        has_position_pattern: f.has_position_pattern,
        has_name_pattern: f.has_name_pattern,
        is_visual_separator: f.is_visual_separator,
        has_meta_discussion: f.has_meta_discussion,
        is_inside_quotation_marks: f.is_inside_quotation_marks,
        context_greeting_count: window.greeting,
        context_closing_count: window.closing,
        context_contact_count: window.contact,
        context_quote_count: window.quote,
        context_separator_count: window.separator,
        in_bracketed_section: bracket.is_some(),
        bracket_has_signature_patterns,
    }
}

#[derive(Debug, Default)]
struct ContextCounts {
    greeting: usize,
    closing: usize,
    contact: usize,
    quote: usize,
    separator: usize,
}

fn context_counts(idx: usize, analysis: &StructuralAnalysis, flags: &[PatternFlags]) -> ContextCounts {
    let start = idx.saturating_sub(CONTEXT_WINDOW);
    let end = (idx + CONTEXT_WINDOW + 1).min(flags.len());

    let mut counts = ContextCounts::default();
    for i in start..end {
        let f = flags[i];
        if f.is_greeting {
            counts.greeting += 1;
        }
        if f.is_closing {
            counts.closing += 1;
        }
        if f.has_contact_info {
            counts.contact += 1;
        }
        if analysis.lines[i].quote_depth > 0 {
            counts.quote += 1;
        }
        if f.is_visual_separator || analysis.lines[i].is_delimiter {
            counts.separator += 1;
        }
    }
    counts
}

#[derive(Debug, Default)]
struct CharRatios {
    kanji: f64,
    hiragana: f64,
    katakana: f64,
    ascii: f64,
    digit: f64,
    symbol: f64,
}

/// Character class ratios over the non-whitespace characters of a line.
/// The sum can fall below 1.0 when other scripts are present.
fn character_ratios(text: &str) -> CharRatios {
    let mut kanji = 0usize;
    let mut hiragana = 0usize;
    let mut katakana = 0usize;
    let mut ascii = 0usize;
    let mut digit = 0usize;
    let mut symbol = 0usize;
    let mut total = 0usize;

    for c in text.chars() {
        if c.is_whitespace() {
            continue;
        }
        total += 1;
        if c.is_ascii() {
            if c.is_ascii_digit() {
                digit += 1;
            } else if c.is_ascii_alphabetic() {
                ascii += 1;
            } else {
                symbol += 1;
            }
        } else if is_kanji(c) {
            kanji += 1;
        } else if is_hiragana(c) {
            hiragana += 1;
        } else if is_katakana(c) {
            katakana += 1;
        } else if c.is_numeric() {
            digit += 1;
        } else {
            symbol += 1;
        }
    }

    if total == 0 {
        return CharRatios::default();
    }

    let denom = total as f64;
    CharRatios {
        kanji: kanji as f64 / denom,
        hiragana: hiragana as f64 / denom,
        katakana: katakana as f64 / denom,
        ascii: ascii as f64 / denom,
        digit: digit as f64 / denom,
        symbol: symbol as f64 / denom,
    }
}

fn is_kanji(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{3005}')
}

fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}')
}

fn is_katakana(c: char) -> bool {
    matches!(c,
        '\u{30A0}'..='\u{30FF}'
        | '\u{31F0}'..='\u{31FF}'
        | '\u{FF66}'..='\u{FF9F}')
}

/// Japanese quotation pairs checked by [`is_inside_quotation_marks`]
const QUOTATION_PAIRS: [(char, char); 3] = [('「', '」'), ('『', '』'), ('"', '"')];

/// A line counts as quoted prose when it is wrapped in matching quotation
/// marks, or contains a complete open-before-close quoted segment.
fn is_inside_quotation_marks(text: &str) -> bool {
    let stripped = text.trim();

    QUOTATION_PAIRS.iter().any(|&(open, close)| {
        if stripped.starts_with(open) && stripped.ends_with(close) {
            return true;
        }
        match (stripped.find(open), stripped.rfind(close)) {
            (Some(o), Some(c)) => o < c,
            _ => false,
        }
    })
}

/// Pair up visual separators into bracketed blocks.
///
/// Separators are paired greedily in document order when they sit within
/// [`BRACKET_MAX_SPAN`] content lines of each other; a separator with no
/// partner in range is skipped. Nesting cannot arise by construction.
fn bracket_blocks(lines: &[AnnotatedLine]) -> Vec<BracketBlock> {
    let separators: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.is_delimiter)
        .map(|(i, _)| i)
        .collect();

    let mut blocks = Vec::new();
    let mut i = 0;
    while i + 1 < separators.len() {
        let (start, end) = (separators[i], separators[i + 1]);
        if end - start <= BRACKET_MAX_SPAN {
            blocks.push(BracketBlock { start, end });
            i += 2;
        } else {
            i += 1;
        }
    }
    blocks
}
