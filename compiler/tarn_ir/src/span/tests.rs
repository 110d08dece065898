use super::*;

#[test]
fn merge_covers_both() {
    let merged = Span::new(10, 20).merge(Span::new(4, 12));
    assert_eq!(merged, Span::new(4, 20));
}

#[test]
fn try_from_range_rejects_inverted() {
    assert_eq!(
        Span::try_from_range(8..3),
        Err(SpanError::Inverted { start: 8, end: 3 })
    );
}

#[test]
fn try_from_range_accepts_u32_bounds() {
    let max = u32::MAX as usize;
    assert_eq!(
        Span::try_from_range(max..max),
        Ok(Span::new(u32::MAX, u32::MAX))
    );
}

#[cfg(target_pointer_width = "64")]
#[test]
fn try_from_range_rejects_overflow() {
    let too_big = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(0..too_big),
        Err(SpanError::EndTooLarge(too_big))
    );
}

#[test]
fn ordering_is_by_start_then_end() {
    let mut spans = vec![Span::new(5, 9), Span::new(1, 30), Span::new(5, 6)];
    spans.sort();
    assert_eq!(spans, vec![Span::new(1, 30), Span::new(5, 6), Span::new(5, 9)]);
}

#[test]
fn contains_span_is_inclusive_of_edges() {
    let outer = Span::new(0, 10);
    assert!(outer.contains_span(Span::new(0, 10)));
    assert!(outer.contains_span(Span::new(3, 4)));
    assert!(!outer.contains_span(Span::new(3, 11)));
}
