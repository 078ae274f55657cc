use super::*;

#[test]
fn single_line() {
    let index = LineIndex::build("hello world");
    assert_eq!(index.line_count(), 1);
    assert_eq!(index.line_of(0), 1);
    assert_eq!(index.line_of(10), 1);
}

#[test]
fn multiple_lines() {
    let source = "line1\nline2\nline3";
    let index = LineIndex::build(source);
    assert_eq!(index.line_of(0), 1);
    assert_eq!(index.line_of(5), 1); // the '\n' itself
    assert_eq!(index.line_of(6), 2);
    assert_eq!(index.line_of(11), 2);
    assert_eq!(index.line_of(12), 3);
}

#[test]
fn line_col_ascii() {
    let source = "abc\ndefgh\nij";
    let index = LineIndex::build(source);
    assert_eq!(index.line_col(source, 0), (1, 1));
    assert_eq!(index.line_col(source, 2), (1, 3));
    assert_eq!(index.line_col(source, 4), (2, 1));
    assert_eq!(index.line_col(source, 7), (2, 4));
    assert_eq!(index.line_col(source, 10), (3, 1));
}

#[test]
fn line_col_counts_characters() {
    let source = "αβγ\nδε";
    let index = LineIndex::build(source);
    // 'γ' starts at byte 4 but is the third character.
    assert_eq!(index.line_col(source, 4), (1, 3));
    // 'ε' starts at byte 9.
    assert_eq!(index.line_col(source, 9), (2, 2));
}

#[test]
fn empty_source() {
    let index = LineIndex::build("");
    assert_eq!(index.line_count(), 1);
    assert_eq!(index.line_col("", 0), (1, 1));
}

#[test]
fn trailing_newline_starts_new_line() {
    let source = "a\n";
    let index = LineIndex::build(source);
    assert_eq!(index.line_count(), 2);
    assert_eq!(index.line_col(source, 2), (2, 1));
}

#[test]
fn offset_past_end_is_clamped() {
    let source = "ab";
    let index = LineIndex::build(source);
    assert_eq!(index.line_col(source, 50), (1, 3));
}

#[test]
fn line_start_lookup() {
    let index = LineIndex::build("a\nbb\nccc");
    assert_eq!(index.line_start(0), None);
    assert_eq!(index.line_start(1), Some(0));
    assert_eq!(index.line_start(2), Some(2));
    assert_eq!(index.line_start(3), Some(5));
    assert_eq!(index.line_start(4), None);
}
