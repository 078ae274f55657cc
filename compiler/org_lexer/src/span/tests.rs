use super::*;

#[test]
fn basic_span() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(15));
    assert!(!span.contains(20));
}

#[test]
fn point_span_is_empty() {
    let span = Span::point(7);
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
    assert!(!span.contains(7));
}

#[test]
fn try_from_range_ok() {
    assert_eq!(Span::try_from_range(3..9), Ok(Span::new(3, 9)));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn try_from_range_overflow() {
    let big = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(big..big),
        Err(SpanError::StartTooLarge(big))
    );
    assert_eq!(
        Span::try_from_range(0..big),
        Err(SpanError::EndTooLarge(big))
    );
}

#[test]
fn to_range_slices_source() {
    let source = "uni-gopher";
    assert_eq!(&source[Span::new(4, 10).to_range()], "gopher");
}

#[test]
fn display_and_debug_match() {
    let span = Span::new(1, 4);
    assert_eq!(format!("{span}"), "1..4");
    assert_eq!(format!("{span:?}"), "1..4");
}

#[test]
fn span_hash() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Span::new(0, 10));
    set.insert(Span::new(0, 10));
    set.insert(Span::new(5, 15));
    assert_eq!(set.len(), 2);
}
