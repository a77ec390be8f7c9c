use honbun::content_filter::filter;
use honbun::normalizer::normalize;
use honbun::structural::{AnnotatedLine, StructuralAnalysis, analyze, is_forward_reply_header, quote_depth};

fn analyze_text(text: &str) -> StructuralAnalysis {
    let normalized = normalize(text).unwrap();
    let filtered = filter(&normalized);
    analyze(&filtered)
}

// --- quote depth ---

#[test]
fn test_quote_depth_counts_markers() {
    assert_eq!(quote_depth("> 引用です"), 1);
    assert_eq!(quote_depth(">> 二重引用"), 2);
    assert_eq!(quote_depth("> > 二重引用"), 2);
    assert_eq!(quote_depth("| パイプ引用"), 1);
    assert_eq!(quote_depth("  > インデント付き"), 1);
    assert_eq!(quote_depth("本文です"), 0);
}

#[test]
fn test_quote_depth_three_deep() {
    assert_eq!(quote_depth("> > > 三重引用"), 3);
    assert_eq!(quote_depth(">>> 三重引用"), 3);
}

#[test]
fn test_fullwidth_marker_folds_to_quote() {
    // ＞ becomes > under NFKC before the analyzer sees it
    let analysis = analyze_text("本文\n＞ 引用です");
    assert_eq!(analysis.lines[1].quote_depth, 1);
}

// --- forward/reply headers ---

#[test]
fn test_english_attribution_headers() {
    assert!(is_forward_reply_header("-----Original Message-----"));
    assert!(is_forward_reply_header("---------- Forwarded message ----------"));
    assert!(is_forward_reply_header("On 2024/01/15 Taro Yamada wrote:"));
    assert!(is_forward_reply_header("On Monday, Jan 15, Yamada wrote:"));
}

#[test]
fn test_japanese_attribution_headers() {
    assert!(is_forward_reply_header("2024年1月15日 10:30 田中太郎 wrote:"));
    assert!(is_forward_reply_header("差出人: 田中太郎"));
    assert!(is_forward_reply_header("送信者: yamada@example.com"));
    assert!(is_forward_reply_header("転送: 会議の件"));
    assert!(is_forward_reply_header("田中さんからのメール:"));
}

#[test]
fn test_body_is_not_attribution() {
    assert!(!is_forward_reply_header("資料を添付いたします。"));
    assert!(!is_forward_reply_header(""));
}

// --- delimiter flags ---

#[test]
fn test_delimiter_flags() {
    let analysis = analyze_text("本文\n----------\n署名");

    assert!(!analysis.lines[0].is_delimiter);
    assert!(analysis.lines[1].is_delimiter);
    assert!(!analysis.lines[2].is_delimiter);
    assert!(analysis.lines[2].preceded_by_delimiter);
    assert!(!analysis.lines[1].preceded_by_delimiter);
}

#[test]
fn test_preceded_by_delimiter_skips_blanks() {
    // Blanks are filtered before analysis, so the line after a delimiter
    // plus a blank still sees the delimiter as its predecessor.
    let analysis = analyze_text("本文\n----------\n\n署名");
    assert!(analysis.lines[2].preceded_by_delimiter);
}

// --- aggregates ---

#[test]
fn test_quote_extents() {
    let analysis = analyze_text("本文\n> 引用1\n> 引用2\n返信です");

    assert!(analysis.has_quotes);
    assert_eq!(analysis.first_quote_index, Some(1));
    assert_eq!(analysis.last_quote_index, Some(2));
}

#[test]
fn test_no_quotes() {
    let analysis = analyze_text("本文\n続き");

    assert!(!analysis.has_quotes);
    assert_eq!(analysis.first_quote_index, None);
    assert_eq!(analysis.last_quote_index, None);
    assert!(!analysis.has_forward_reply);
}

#[test]
fn test_has_forward_reply() {
    let analysis = analyze_text("本文\n-----Original Message-----\n> 引用");
    assert!(analysis.has_forward_reply);
    assert!(analysis.lines[1].is_forward_reply_header);
}

#[test]
fn test_annotated_line_keeps_original_index() {
    let analysis = analyze_text("一行目\n\n三行目");
    let lines: Vec<&AnnotatedLine> = analysis.lines.iter().collect();

    assert_eq!(lines[0].content.original_index, 0);
    assert_eq!(lines[1].content.original_index, 2);
}
