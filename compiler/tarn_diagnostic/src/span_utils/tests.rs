use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_line_offset_table_build_multiple_lines() {
    let table = LineOffsetTable::build("ab\ncd\n\nef");
    assert_eq!(table.line_count(), 4);
    assert_eq!(table.line_start_offset(1), Some(0));
    assert_eq!(table.line_start_offset(2), Some(3));
    assert_eq!(table.line_start_offset(3), Some(6));
    assert_eq!(table.line_start_offset(4), Some(7));
    assert_eq!(table.line_start_offset(0), None);
    assert_eq!(table.line_start_offset(5), None);
}

#[test]
fn test_line_from_offset() {
    let table = LineOffsetTable::build("ab\ncd\nef");
    assert_eq!(table.line_from_offset(0), 1);
    assert_eq!(table.line_from_offset(2), 1);
    assert_eq!(table.line_from_offset(3), 2);
    assert_eq!(table.line_from_offset(7), 3);
    assert_eq!(table.line_from_offset(100), 3);
}

#[test]
fn test_offset_to_line_col() {
    let source = "let x = 1\nlet y = 2";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    assert_eq!(table.offset_to_line_col(source, 4), (1, 5));
    assert_eq!(table.offset_to_line_col(source, 10), (2, 1));
    assert_eq!(table.offset_to_line_col(source, 14), (2, 5));
}

#[test]
fn test_offset_to_line_col_empty_source() {
    let table = LineOffsetTable::build("");
    assert_eq!(table.offset_to_line_col("", 0), (1, 1));
    assert_eq!(table.offset_to_line_col("", 5), (1, 1));
}

#[test]
fn test_offset_to_line_col_counts_characters() {
    // 'é' is two bytes
    let source = "'é' x";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 4), (1, 4));
    assert_eq!(table.offset_to_line_col(source, 5), (1, 5));
}

#[test]
fn test_offset_inside_multibyte_char_does_not_panic() {
    let source = "'é'";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 2), (1, 2));
}

#[test]
fn test_table_matches_one_shot_lookup() {
    let source = "a\nbb\nccc\n";
    let table = LineOffsetTable::build(source);
    for offset in 0..=u32::try_from(source.len()).unwrap_or(0) {
        assert_eq!(
            table.offset_to_line_col(source, offset),
            offset_to_line_col(source, offset)
        );
    }
}

#[test]
fn test_span_to_range() {
    let source = "let x = 1\nlet y =\n  2";
    let table = LineOffsetTable::build(source);
    let range = table.span_to_range(source, Span::new(14, 21));
    assert_eq!(
        range,
        SourceRange {
            start_line: 2,
            start_col: 5,
            end_line: 3,
            end_col: 4,
        }
    );
    assert_eq!(range.to_string(), "2:5-3:4");
}

#[test]
fn test_source_range_display() {
    let point = SourceRange {
        start_line: 3,
        start_col: 7,
        end_line: 3,
        end_col: 7,
    };
    assert_eq!(point.to_string(), "3:7");
    let same_line = SourceRange {
        end_col: 12,
        ..point
    };
    assert_eq!(same_line.to_string(), "3:7-12");
}
