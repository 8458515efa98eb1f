use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let Ok(buf) = SourceBuffer::new("") else {
        panic!("empty source should be accepted");
    };
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    assert_eq!(buf.byte_at(0), None);
}

#[test]
fn ascii_source() {
    let Ok(buf) = SourceBuffer::new("hello") else {
        panic!("ascii source should be accepted");
    };
    assert_eq!(buf.len(), 5);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_str(), "hello");
    assert_eq!(buf.as_bytes(), b"hello");
}

#[test]
fn does_not_copy_text() {
    let source = String::from("x = 1");
    let Ok(buf) = SourceBuffer::new(&source) else {
        panic!("source should be accepted");
    };
    assert!(std::ptr::eq(buf.as_str(), source.as_str()));
}

#[test]
fn utf8_multibyte_source() {
    let source = "a \u{e9} b"; // 'é' is 2 bytes
    let Ok(buf) = SourceBuffer::new(source) else {
        panic!("utf-8 source should be accepted");
    };
    assert_eq!(buf.len() as usize, source.len());
}

// === Byte access ===

#[test]
fn byte_at_is_bounds_checked() {
    let Ok(buf) = SourceBuffer::new("ab") else {
        panic!("source should be accepted");
    };
    assert_eq!(buf.byte_at(0), Some(b'a'));
    assert_eq!(buf.byte_at(1), Some(b'b'));
    assert_eq!(buf.byte_at(2), None); // sentinel position
    assert_eq!(buf.byte_at(100), None);
}

// === Slicing ===

#[test]
fn slice_extracts_substring() {
    let Ok(buf) = SourceBuffer::new("hello world") else {
        panic!("source should be accepted");
    };
    assert_eq!(buf.slice(Span::new(0, 5)), "hello");
    assert_eq!(buf.slice(Span::new(6, 11)), "world");
    assert_eq!(buf.slice(Span::new(2, 2)), "");
}

#[test]
fn slice_of_sentinel_is_empty() {
    let Ok(buf) = SourceBuffer::new("abc") else {
        panic!("source should be accepted");
    };
    assert_eq!(buf.slice(Span::new(3, 4)), "");
}

#[test]
fn slice_off_char_boundary_is_empty() {
    let Ok(buf) = SourceBuffer::new("\u{e9}") else {
        panic!("source should be accepted");
    };
    assert_eq!(buf.slice(Span::new(0, 1)), "");
    assert_eq!(buf.slice(Span::new(0, 2)), "\u{e9}");
}

// === Cursor Creation ===

#[test]
fn cursor_starts_at_zero() {
    let Ok(buf) = SourceBuffer::new("hello") else {
        panic!("source should be accepted");
    };
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), Some(b'h'));
}

#[test]
fn cursor_on_empty_source_is_eof() {
    let Ok(buf) = SourceBuffer::new("") else {
        panic!("empty source should be accepted");
    };
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
}
