//! Integration tests for the bytesio stream
//!
//! Exercises the public API end to end: construction, reads, writes, line
//! scanning, iteration, closing and std::io interop.

use bytesio::logging::init_test_logging;
use bytesio::{BufferConfig, BufferError, ByteBuffer, ReadSize};
use std::borrow::Cow;
use std::io::{self, BufRead};

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_empty_stream_has_zero_size() {
    let buf = ByteBuffer::new();
    assert_eq!(buf.size().unwrap(), 0);
}

#[test]
fn test_initial_content_line_by_line() {
    let mut buf = ByteBuffer::with_initial(b"hello\nworld").unwrap();
    assert_eq!(buf.size().unwrap(), 11);
    assert_eq!(buf.read_line().unwrap(), b"hello\n");
    assert_eq!(buf.read_line().unwrap(), b"world");
    assert_eq!(buf.read_line().unwrap(), b"");
}

#[test]
fn test_write_then_read_hits_eof() {
    let mut buf = ByteBuffer::new();
    assert_eq!(buf.write(b"abcde").unwrap(), 5);
    assert_eq!(buf.size().unwrap(), 5);
    assert_eq!(buf.read(ReadSize::ToEnd).unwrap(), b"");

    // A fresh logical stream over the same bytes reads them back.
    let content = buf.contents().unwrap().to_vec();
    buf.reinit(&content).unwrap();
    assert_eq!(buf.read(ReadSize::ToEnd).unwrap(), b"abcde");
}

#[test]
fn test_sized_read_then_read_to_end() {
    let mut buf = ByteBuffer::with_initial(b"hello\nworld").unwrap();
    assert_eq!(buf.read(ReadSize::AtMost(4)).unwrap(), b"hell");
    assert_eq!(buf.read(ReadSize::from(-1i64)).unwrap(), b"o\nworld");
}

#[test]
fn test_write_past_end_zero_fills_gap() {
    let mut buf = ByteBuffer::new();
    buf.write(b"AB").unwrap();
    // Step the cursor three bytes beyond the end of the stream.
    buf.consume(3);
    assert_eq!(buf.position().unwrap(), 5);
    assert_eq!(buf.size().unwrap(), 2);

    assert_eq!(buf.write(b"XY").unwrap(), 2);
    assert_eq!(buf.size().unwrap(), 7);
    assert_eq!(buf.contents().unwrap(), b"AB\0\0\0XY");
}

#[test]
fn test_iteration_yields_lines_then_stops() {
    let mut buf = ByteBuffer::with_initial(b"a\nb\nc").unwrap();
    let mut lines = buf.iter_lines().unwrap();
    assert_eq!(lines.next(), Some(&b"a\n"[..]));
    assert_eq!(lines.next(), Some(&b"b\n"[..]));
    assert_eq!(lines.next(), Some(&b"c"[..]));
    assert_eq!(lines.next(), None);
    assert_eq!(lines.next(), None);
}

// ============================================================================
// Properties on fixed inputs
// ============================================================================

#[test]
fn test_eof_reads_are_idempotent() {
    let mut buf = ByteBuffer::with_initial("abc").unwrap();
    assert_eq!(buf.read(ReadSize::ToEnd).unwrap(), b"abc");
    for _ in 0..5 {
        assert!(buf.read(ReadSize::ToEnd).unwrap().is_empty());
        assert!(buf.read(ReadSize::AtMost(10)).unwrap().is_empty());
        assert!(buf.read_line().unwrap().is_empty());
    }
    assert_eq!(buf.position().unwrap(), 3);
}

#[test]
fn test_blank_lines_are_kept() {
    let mut buf = ByteBuffer::with_initial(b"\n\nx\n").unwrap();
    let lines: Vec<Vec<u8>> = buf.iter_lines().unwrap().map(<[u8]>::to_vec).collect();
    assert_eq!(lines, vec![b"\n".to_vec(), b"\n".to_vec(), b"x\n".to_vec()]);
}

#[test]
fn test_iteration_matches_read_line() {
    let input = b"GET / HTTP/1.1\r\nHost: example\r\n\r\nbody without newline";

    let mut by_line = ByteBuffer::with_initial(input).unwrap();
    let mut expected = Vec::new();
    loop {
        let line = by_line.read_line().unwrap();
        if line.is_empty() {
            break;
        }
        expected.push(line);
    }

    let mut iterated = ByteBuffer::with_initial(input).unwrap();
    let actual: Vec<Vec<u8>> = iterated.iter_lines().unwrap().map(<[u8]>::to_vec).collect();
    assert_eq!(actual, expected);
    assert_eq!(actual.len(), 4);
}

#[test]
fn test_multiple_writes_then_reinit_read() {
    init_test_logging();

    let mut buf = ByteBuffer::new();
    for chunk in ["alpha\n", "beta\n", "gamma"] {
        buf.write(chunk).unwrap();
        assert!(buf.size().unwrap() <= buf.capacity().unwrap());
    }
    let content = buf.contents().unwrap().to_vec();
    assert_eq!(content, b"alpha\nbeta\ngamma");

    buf.reinit(&content).unwrap();
    let lines: Vec<&[u8]> = buf.iter_lines().unwrap().collect();
    assert_eq!(lines, vec![&b"alpha\n"[..], &b"beta\n"[..], &b"gamma"[..]]);
}

#[test]
fn test_many_source_types() {
    let mut buf = ByteBuffer::new();
    assert_eq!(buf.write("str ").unwrap(), 4);
    assert_eq!(buf.write(&String::from("string ")).unwrap(), 7);
    assert_eq!(buf.write(&vec![b'v', b' ']).unwrap(), 2);
    assert_eq!(buf.write(&Cow::Borrowed(&b"cow "[..])).unwrap(), 4);
    let boxed: Box<[u8]> = Box::from(&b"box"[..]);
    assert_eq!(buf.write(&boxed).unwrap(), 3);
    assert_eq!(buf.contents().unwrap(), b"str string v cow box");
}

// ============================================================================
// Limits and lifecycle
// ============================================================================

#[test]
fn test_configured_limit() {
    let config = BufferConfig { max_size: 10 };
    let mut buf = ByteBuffer::with_config(&config);
    assert_eq!(buf.write(b"0123456789").unwrap(), 10);

    let err = buf.write(b"x").unwrap_err();
    assert!(matches!(err, BufferError::Overflow { requested: 11 }));
    assert_eq!(buf.size().unwrap(), 10);
}

#[test]
fn test_close_releases_and_rejects() {
    let mut buf = ByteBuffer::with_initial(b"payload").unwrap();
    buf.close();
    assert!(buf.is_closed());
    assert!(matches!(buf.write(b"x"), Err(BufferError::Closed)));
    assert!(matches!(buf.read(ReadSize::ToEnd), Err(BufferError::Closed)));
    assert!(matches!(buf.read_line(), Err(BufferError::Closed)));
    assert!(matches!(buf.size(), Err(BufferError::Closed)));
    assert!(matches!(buf.iter_lines(), Err(BufferError::Closed)));
    assert!(matches!(buf.capacity(), Err(BufferError::Closed)));
    assert!(matches!(buf.position(), Err(BufferError::Closed)));
    assert!(matches!(buf.remaining(), Err(BufferError::Closed)));
    assert!(matches!(buf.reinit(b"again"), Err(BufferError::Closed)));
}

// ============================================================================
// std::io interop
// ============================================================================

#[test]
fn test_io_copy_into_buffer() {
    let mut source = io::Cursor::new(b"line one\nline two\n".to_vec());
    let mut buf = ByteBuffer::new();
    let copied = io::copy(&mut source, &mut buf).unwrap();
    assert_eq!(copied, 18);
    assert_eq!(buf.size().unwrap(), 18);
}

#[test]
fn test_bufread_lines() {
    let buf = ByteBuffer::with_initial(b"one\ntwo\nthree").unwrap();
    let lines: Vec<String> = BufRead::lines(buf).map(Result::unwrap).collect();
    assert_eq!(lines, vec!["one", "two", "three"]);
}

#[test]
fn test_io_write_on_closed_buffer() {
    let mut buf = ByteBuffer::new();
    buf.close();
    let err = io::Write::write(&mut buf, b"x").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Other);
}
