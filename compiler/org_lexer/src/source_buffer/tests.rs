use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert_eq!(buf.text(), "");
    assert_eq!(buf.encoding_issue(), None);
}

#[test]
fn text_source_has_no_issue() {
    let buf = SourceBuffer::new("* header\n");
    assert_eq!(buf.len(), 9);
    assert!(!buf.is_empty());
    assert_eq!(buf.encoding_issue(), None);
}

#[test]
fn valid_bytes_match_text_construction() {
    let source = "héllo wörld ✓\n";
    let from_bytes = SourceBuffer::from_bytes(source.as_bytes());
    assert_eq!(from_bytes.text(), source);
    assert_eq!(from_bytes.encoding_issue(), None);
}

#[test]
fn text_is_borrowed_not_copied() {
    let source = String::from("borrowed");
    let buf = SourceBuffer::new(&source);
    assert!(std::ptr::eq(buf.text().as_ptr(), source.as_ptr()));
}

// === Encoding issues ===

#[test]
fn invalid_byte_stops_scannable_text() {
    let bytes = b"ok \xFF rest";
    let buf = SourceBuffer::from_bytes(bytes);
    assert_eq!(buf.text(), "ok ");
    assert_eq!(buf.len(), 3);
    assert_eq!(
        buf.encoding_issue(),
        Some(EncodingIssue {
            kind: EncodingIssueKind::InvalidUtf8,
            pos: 3,
            len: 1,
        })
    );
}

#[test]
fn stray_continuation_byte_is_invalid() {
    let buf = SourceBuffer::from_bytes(b"\x80abc");
    assert_eq!(buf.text(), "");
    let issue = buf.encoding_issue();
    assert_eq!(issue.map(|i| i.kind), Some(EncodingIssueKind::InvalidUtf8));
    assert_eq!(issue.map(|i| i.span()), Some(Span::new(0, 1)));
}

#[test]
fn truncated_sequence_at_end() {
    // First two bytes of the three-byte encoding of '€'.
    let buf = SourceBuffer::from_bytes(b"price \xE2\x82");
    assert_eq!(buf.text(), "price ");
    assert_eq!(
        buf.encoding_issue(),
        Some(EncodingIssue {
            kind: EncodingIssueKind::TruncatedUtf8,
            pos: 6,
            len: 2,
        })
    );
}

#[test]
fn only_first_issue_is_recorded() {
    let buf = SourceBuffer::from_bytes(b"a\xFFb\xFEc");
    assert_eq!(buf.text(), "a");
    assert_eq!(buf.encoding_issue().map(|i| i.pos), Some(1));
}

#[test]
fn issue_descriptions() {
    assert_eq!(EncodingIssueKind::InvalidUtf8.description(), "invalid UTF-8");
    assert_eq!(
        EncodingIssueKind::TruncatedUtf8.description(),
        "truncated UTF-8 sequence"
    );
}

// === Cursor ===

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.source_len(), 3);
}

#[test]
fn cursor_ends_before_encoding_issue() {
    let buf = SourceBuffer::from_bytes(b"ab\xFF");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    assert!(cursor.is_eof());
}
