use honbun::content_filter::filter;
use honbun::normalizer::normalize;

#[test]
fn test_partitions_content_and_blanks() {
    let normalized = normalize("一行目\n\n二行目\n\n\n三行目").unwrap();
    let filtered = filter(&normalized);

    assert_eq!(filtered.content_lines.len(), 3);
    assert_eq!(filtered.whitespace_map.blank_positions.len(), 3);
    assert_eq!(
        filtered.content_lines.len() + filtered.whitespace_map.blank_positions.len(),
        filtered.whitespace_map.original_line_count
    );
}

#[test]
fn test_blank_counts_around_content() {
    let normalized = normalize("一行目\n\n\n二行目").unwrap();
    let filtered = filter(&normalized);

    assert_eq!(filtered.content_lines[0].blank_lines_before, 0);
    assert_eq!(filtered.content_lines[0].blank_lines_after, 2);
    assert_eq!(filtered.content_lines[1].blank_lines_before, 2);
    assert_eq!(filtered.content_lines[1].blank_lines_after, 0);
}

#[test]
fn test_adjacent_content_lines_have_zero_counts() {
    let normalized = normalize("一行目\n二行目").unwrap();
    let filtered = filter(&normalized);

    assert_eq!(filtered.content_lines[0].blank_lines_after, 0);
    assert_eq!(filtered.content_lines[1].blank_lines_before, 0);
}

#[test]
fn test_trailing_blanks_counted_on_last_content_line() {
    let normalized = normalize("本文\n\n\n").unwrap();
    let filtered = filter(&normalized);

    assert_eq!(filtered.content_lines.len(), 1);
    assert_eq!(filtered.content_lines[0].blank_lines_after, 3);
}

#[test]
fn test_leading_blanks_counted_on_first_content_line() {
    let normalized = normalize("\n\n本文").unwrap();
    let filtered = filter(&normalized);

    assert_eq!(filtered.content_lines[0].blank_lines_before, 2);
    assert_eq!(filtered.content_lines[0].original_index, 2);
}

#[test]
fn test_content_indices_strictly_increase() {
    let normalized = normalize("a\n\nb\nc\n\n\nd").unwrap();
    let filtered = filter(&normalized);

    let indices = &filtered.whitespace_map.content_to_original;
    assert!(indices.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_interleaving_restores_original_lines() {
    let normalized = normalize("一行目\n\n二行目\n\n\n三行目\n").unwrap();
    let filtered = filter(&normalized);
    let map = &filtered.whitespace_map;

    let mut restored = vec![None; map.original_line_count];
    for (content_idx, &orig_idx) in map.content_to_original.iter().enumerate() {
        restored[orig_idx] = Some(filtered.content_lines[content_idx].text.clone());
    }
    for &blank_idx in &map.blank_positions {
        restored[blank_idx] = Some(String::new());
    }

    let restored: Vec<String> = restored.into_iter().map(Option::unwrap).collect();
    assert_eq!(restored, normalized.lines);
}

#[test]
fn test_single_line_document() {
    let normalized = normalize("唯一の行").unwrap();
    let filtered = filter(&normalized);

    assert_eq!(filtered.content_lines.len(), 1);
    assert_eq!(filtered.content_lines[0].blank_lines_before, 0);
    assert_eq!(filtered.content_lines[0].blank_lines_after, 0);
    assert!(filtered.whitespace_map.blank_positions.is_empty());
}
