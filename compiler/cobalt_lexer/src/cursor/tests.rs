use crate::{SourceBuffer, Span, TokenKind};

fn buffer(source: &str) -> SourceBuffer<'_> {
    let Ok(buf) = SourceBuffer::new(source) else {
        panic!("test source should fit in a buffer");
    };
    buf
}

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = buffer("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), Some(b'a'));
}

#[test]
fn skip_moves_forward() {
    let buf = buffer("abc");
    let mut cursor = buf.cursor();
    cursor.skip();
    assert_eq!(cursor.current(), Some(b'b'));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn skip_n_moves_multiple() {
    let buf = buffer("abcdef");
    let mut cursor = buf.cursor();
    cursor.skip_n(3);
    assert_eq!(cursor.current(), Some(b'd'));
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_through_entire_source() {
    let buf = buffer("hi");
    let mut cursor = buf.cursor();
    cursor.skip();
    cursor.skip();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
}

// === EOF Asymmetry ===

#[test]
fn skip_at_eof_is_noop() {
    let buf = buffer("x");
    let mut cursor = buf.cursor();
    cursor.skip();
    assert!(cursor.is_eof());
    cursor.skip();
    cursor.skip_n(10);
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn skip_n_clamps_at_end() {
    let buf = buffer("abc");
    let mut cursor = buf.cursor();
    cursor.skip();
    cursor.skip_n(10);
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
}

#[test]
fn matches_byte_at_eof_is_false() {
    let buf = buffer("");
    let cursor = buf.cursor();
    assert!(!cursor.matches_byte(b'a'));
    assert!(!cursor.matches_byte(0));
}

#[test]
fn next_char_is_pre_increment() {
    let buf = buffer("abc");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.next_char(), Some(b'b'));
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.next_char(), Some(b'c'));
    assert_eq!(cursor.next_char(), None); // stepped onto EOF
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.next_char(), None); // stays at EOF
    assert_eq!(cursor.pos(), 3);
}

// === Matching ===

#[test]
fn matches_str_checks_remaining_length() {
    let buf = buffer("/*");
    let mut cursor = buf.cursor();
    assert!(cursor.matches_str("/*"));
    assert!(cursor.matches_str("/"));
    assert!(!cursor.matches_str("//"));
    cursor.skip();
    assert!(!cursor.matches_str("*/"));
    assert!(cursor.matches_str("*"));
}

#[test]
fn matches_empty_str_everywhere() {
    let buf = buffer("a");
    let mut cursor = buf.cursor();
    assert!(cursor.matches_str(""));
    cursor.skip();
    assert!(cursor.matches_str(""));
}

// === skip_until ===

#[test]
fn skip_until_stops_on_predicate() {
    let buf = buffer("aaab");
    let mut cursor = buf.cursor();
    cursor.skip_until(|b| b != b'a');
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), Some(b'b'));
}

#[test]
fn skip_until_stays_when_already_satisfied() {
    let buf = buffer("b");
    let mut cursor = buf.cursor();
    cursor.skip_until(|b| b == b'b');
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn skip_until_runs_to_eof() {
    let buf = buffer("aaaa");
    let mut cursor = buf.cursor();
    cursor.skip_until(|b| b == b'z');
    assert!(cursor.is_eof());
}

#[test]
fn skip_until_byte_finds_newline() {
    let buf = buffer("// note\nnext");
    let mut cursor = buf.cursor();
    cursor.skip_until_byte(b'\n');
    assert_eq!(cursor.pos(), 7);
    assert!(cursor.matches_byte(b'\n'));
}

#[test]
fn skip_until_byte_without_match_goes_to_eof() {
    let buf = buffer("// trailing");
    let mut cursor = buf.cursor();
    cursor.skip_until_byte(b'\n');
    assert!(cursor.is_eof());
}

#[test]
fn skip_until_str_finds_first_occurrence() {
    let buf = buffer("/* a */ b */");
    let mut cursor = buf.cursor();
    cursor.skip_until_str("*/");
    assert_eq!(cursor.pos(), 5);
}

// === skip_beyond ===

#[test]
fn skip_beyond_lands_past_match() {
    let buf = buffer("abc;def");
    let mut cursor = buf.cursor();
    cursor.skip_beyond(|b| b == b';');
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.current(), Some(b'd'));
}

#[test]
fn skip_beyond_byte_lands_past_match() {
    let buf = buffer("abc;def");
    let mut cursor = buf.cursor();
    cursor.skip_beyond_byte(b';');
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn skip_beyond_str_lands_past_terminator() {
    let buf = buffer("/* x */y");
    let mut cursor = buf.cursor();
    cursor.skip_beyond_str("*/");
    assert_eq!(cursor.pos(), 7);
    assert_eq!(cursor.current(), Some(b'y'));
}

#[test]
fn skip_beyond_str_unterminated_parks_at_eof() {
    let buf = buffer("/* never closed");
    let mut cursor = buf.cursor();
    cursor.skip_beyond_str("*/");
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), buf.len());
}

// === try_tokenize ===

#[test]
fn try_tokenize_consumes_symbol() {
    let buf = buffer("(x");
    let mut cursor = buf.cursor();
    let Some(tok) = cursor.try_tokenize("(", TokenKind::ParameterListBegin) else {
        panic!("expected `(` to tokenize");
    };
    assert_eq!(tok.kind, TokenKind::ParameterListBegin);
    assert_eq!(tok.span, Span::new(0, 1));
    assert_eq!(tok.lexeme, "(");
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn try_tokenize_mismatch_does_not_move() {
    let buf = buffer("x(");
    let mut cursor = buf.cursor();
    assert!(cursor.try_tokenize("(", TokenKind::ParameterListBegin).is_none());
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn try_tokenize_at_eof_is_none() {
    let buf = buffer("");
    let mut cursor = buf.cursor();
    assert!(cursor.try_tokenize("\n", TokenKind::EndOfLine).is_none());
}

// === UTF-8 ===

#[test]
fn utf8_char_width_by_leading_byte() {
    assert_eq!(super::Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(super::Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(super::Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(super::Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(super::Cursor::utf8_char_width(0x80), 1);
}

#[test]
fn advance_char_skips_whole_character() {
    let source = "\u{e9}\u{1F600}a";
    let buf = buffer(source);
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    cursor.advance_char();
    assert_eq!(cursor.pos(), 6);
    assert_eq!(cursor.slice_from(2), "\u{1F600}");
    cursor.advance_char();
    assert!(cursor.is_eof());
    cursor.advance_char();
    assert_eq!(cursor.pos(), 7);
}

// === Property tests ===

mod proptest_search {
    use super::buffer;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn skip_until_byte_matches_predicate(source in "[ab\n]{0,64}", start in 0u32..64) {
            let buf = buffer(&source);
            let mut fast = buf.cursor();
            fast.skip_n(start);
            let mut slow = fast;
            fast.skip_until_byte(b'\n');
            slow.skip_until(|b| b == b'\n');
            prop_assert_eq!(fast.pos(), slow.pos());
        }

        #[test]
        fn skip_until_str_matches_stepwise(source in "[*/a]{0,64}") {
            let buf = buffer(&source);
            let mut fast = buf.cursor();
            fast.skip_until_str("*/");
            let mut slow = buf.cursor();
            while !slow.is_eof() && !slow.matches_str("*/") {
                slow.skip();
            }
            prop_assert_eq!(fast.pos(), slow.pos());
        }
    }
}
