use crate::TemplateBuffer;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buffer = TemplateBuffer::new("abc");
    let cursor = buffer.cursor();
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buffer = TemplateBuffer::new("abc");
    let mut cursor = buffer.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_through_entire_source() {
    let buffer = TemplateBuffer::new("hi");
    let mut cursor = buffer.cursor();
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn peek_probes_are_sentinel_safe_at_end() {
    let buffer = TemplateBuffer::new("a");
    let cursor = buffer.cursor();
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek2(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let buffer = TemplateBuffer::new("\0a");
    let mut cursor = buffer.cursor();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.current(), b'a');
}

// === Line & Column Tracking ===

#[test]
fn advance_bumps_column() {
    let buffer = TemplateBuffer::new("abc");
    let mut cursor = buffer.cursor();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.line(), 1);
    assert_eq!(cursor.column(), 3);
}

#[test]
fn newline_increments_line_and_resets_column() {
    let buffer = TemplateBuffer::new("a\nb");
    let mut cursor = buffer.cursor();
    cursor.advance(); // 'a'
    cursor.advance(); // '\n'
    assert_eq!(cursor.line(), 2);
    assert_eq!(cursor.column(), 1);
    cursor.advance(); // 'b'
    assert_eq!(cursor.line(), 2);
    assert_eq!(cursor.column(), 2);
}

#[test]
fn advance_char_moves_column_once_for_multibyte() {
    let buffer = TemplateBuffer::new("é!");
    let mut cursor = buffer.cursor();
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2); // 'é' is two bytes
    assert_eq!(cursor.column(), 2); // but one character
    assert_eq!(cursor.current(), b'!');
}

#[test]
fn advance_ascii_moves_column_by_n() {
    let buffer = TemplateBuffer::new("{{!rest");
    let mut cursor = buffer.cursor();
    cursor.advance_ascii(3);
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.column(), 4);
    assert_eq!(cursor.current(), b'r');
}

// === Bulk Jumps ===

#[test]
fn skip_to_byte_lands_on_target() {
    let buffer = TemplateBuffer::new("abc{def");
    let mut cursor = buffer.cursor();
    assert!(cursor.skip_to_byte(b'{'));
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.column(), 4);
    assert_eq!(cursor.current(), b'{');
}

#[test]
fn skip_to_byte_counts_skipped_newlines() {
    let buffer = TemplateBuffer::new("ab\ncd\nef{x");
    let mut cursor = buffer.cursor();
    assert!(cursor.skip_to_byte(b'{'));
    assert_eq!(cursor.pos(), 8);
    assert_eq!(cursor.line(), 3);
    assert_eq!(cursor.column(), 3);
}

#[test]
fn skip_to_byte_counts_characters_not_bytes() {
    let buffer = TemplateBuffer::new("héllo{x");
    let mut cursor = buffer.cursor();
    assert!(cursor.skip_to_byte(b'{'));
    assert_eq!(cursor.pos(), 6); // five characters, six bytes
    assert_eq!(cursor.column(), 6);
}

#[test]
fn skip_to_byte_missing_target_rests_at_eof() {
    let buffer = TemplateBuffer::new("a\nbc");
    let mut cursor = buffer.cursor();
    assert!(!cursor.skip_to_byte(b'{'));
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.line(), 2);
    assert_eq!(cursor.column(), 3);
}

#[test]
fn skip_to_byte_at_target_is_a_no_op() {
    let buffer = TemplateBuffer::new("{a");
    let mut cursor = buffer.cursor();
    assert!(cursor.skip_to_byte(b'{'));
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.column(), 1);
}

#[test]
fn skip_to_byte_skips_interior_nulls() {
    let buffer = TemplateBuffer::new("a\0b{");
    let mut cursor = buffer.cursor();
    assert!(cursor.skip_to_byte(b'{'));
    assert_eq!(cursor.pos(), 3);
}

// === Slicing ===

#[test]
fn slice_extracts_substring() {
    let buffer = TemplateBuffer::new("hello world");
    let cursor = buffer.cursor();
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
}

#[test]
fn slice_from_extends_to_current_position() {
    let buffer = TemplateBuffer::new("hello");
    let mut cursor = buffer.cursor();
    cursor.advance();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.slice_from(0), "hel");
    assert_eq!(cursor.slice_from(1), "el");
}

#[test]
fn slice_handles_multibyte_boundaries() {
    let buffer = TemplateBuffer::new("aéb");
    let mut cursor = buffer.cursor();
    cursor.advance(); // 'a'
    cursor.advance_char(); // 'é'
    assert_eq!(cursor.slice_from(0), "aé");
}

// === UTF-8 Widths ===

#[test]
fn utf8_char_width_covers_all_classes() {
    assert_eq!(super::Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(super::Cursor::utf8_char_width(0xC3), 2); // é lead
    assert_eq!(super::Cursor::utf8_char_width(0xE2), 3); // — lead
    assert_eq!(super::Cursor::utf8_char_width(0xF0), 4); // emoji lead
    assert_eq!(super::Cursor::utf8_char_width(0x85), 1); // continuation
    assert_eq!(super::Cursor::utf8_char_width(0), 1); // sentinel
}

// === Property tests ===

mod proptest_positions {
    use crate::TemplateBuffer;
    use proptest::prelude::*;

    /// Reference position computed straight from the text.
    fn expected_position(text: &str) -> (u32, u32) {
        let line = 1 + text.matches('\n').count();
        let column = 1 + match text.rfind('\n') {
            Some(i) => text[i + 1..].chars().count(),
            None => text.chars().count(),
        };
        (
            u32::try_from(line).unwrap_or(u32::MAX),
            u32::try_from(column).unwrap_or(u32::MAX),
        )
    }

    proptest! {
        #[test]
        fn char_walk_matches_reference(text in "[ -~\né]{0,64}") {
            let buffer = TemplateBuffer::new(&text);
            let mut cursor = buffer.cursor();
            while !cursor.is_eof() {
                cursor.advance_char();
            }
            let (line, column) = expected_position(&text);
            prop_assert_eq!(cursor.pos(), buffer.len());
            prop_assert_eq!(cursor.line(), line);
            prop_assert_eq!(cursor.column(), column);
        }

        #[test]
        fn bulk_jump_matches_char_walk(text in "[a-zé \n]{0,64}", target in "[a-z]") {
            let target_byte = target.as_bytes()[0];
            let buffer = TemplateBuffer::new(&text);

            let mut jumped = buffer.cursor();
            jumped.skip_to_byte(target_byte);

            let mut walked = buffer.cursor();
            while !walked.is_eof() && walked.current() != target_byte {
                walked.advance_char();
            }

            prop_assert_eq!(jumped.pos(), walked.pos());
            prop_assert_eq!(jumped.line(), walked.line());
            prop_assert_eq!(jumped.column(), walked.column());
        }
    }
}
