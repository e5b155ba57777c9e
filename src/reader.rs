use std::io::{self, Read};
use std::str;

const BUF_SIZE: usize = 16 * 1024;

/// Incremental UTF-8 decoding over any type that implements `std::io::Read`.
///
/// No I/O buffering is required around the input; the reader maintains its
/// own buffer (16kb, heap-allocated) and yields the longest valid UTF-8
/// prefix of what it has. A multi-byte sequence split across reads is
/// carried over to the next chunk, so chunk boundaries never fall inside a
/// character.
///
/// Bytes that are not valid UTF-8, and input that ends in the middle of a
/// sequence, surface as `std::io::ErrorKind::InvalidData`.
#[derive(Debug)]
pub struct Utf8Reader<R: Read> {
    buf: Box<[u8; BUF_SIZE]>,
    /// Start of the bytes not yet yielded (the carried-over tail).
    buf_offset: usize,
    buf_len: usize,
    reader: R,
}

impl<R: Read> Utf8Reader<R> {
    /// Construct a new `Utf8Reader` from any type that implements `Read`.
    pub fn new(reader: R) -> Self {
        Utf8Reader {
            buf: Box::new([0; BUF_SIZE]),
            buf_offset: 0,
            buf_len: 0,
            reader,
        }
    }

    /// Read more input and return it as a string slice.
    ///
    /// Returns `Ok(None)` at end of input. The returned slice is never empty
    /// and is only valid until the next call.
    pub fn next_chunk(&mut self) -> io::Result<Option<&str>> {
        loop {
            // move the pending tail to the front so the whole rest of the
            // buffer is available to read into
            if self.buf_offset > 0 {
                self.buf.copy_within(self.buf_offset..self.buf_len, 0);
                self.buf_len -= self.buf_offset;
                self.buf_offset = 0;
            }
            let n = self.reader.read(&mut self.buf[self.buf_len..])?;
            if n == 0 {
                if self.buf_len > 0 {
                    return Err(invalid_utf8("input ends inside a UTF-8 sequence"));
                }
                return Ok(None);
            }
            self.buf_len += n;

            let chunk_len = utf8_prefix(&self.buf[..self.buf_len])?.len();
            if chunk_len == 0 {
                // only the start of a multi-byte sequence so far
                continue;
            }
            self.buf_offset = chunk_len;
            // re-borrow at the return point (the prefix was just validated)
            // so the borrow does not overlap the next iteration's writes
            let chunk = str::from_utf8(&self.buf[..chunk_len]).expect("validated prefix");
            return Ok(Some(chunk));
        }
    }
}

/// The longest prefix of `bytes` that is valid UTF-8.
///
/// Trailing bytes that merely *begin* a sequence are fine (the caller keeps
/// them for later), anything else is an error.
fn utf8_prefix(bytes: &[u8]) -> io::Result<&str> {
    match str::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) if e.error_len().is_none() => {
            // valid_up_to is a char boundary, so this second pass succeeds
            match str::from_utf8(&bytes[..e.valid_up_to()]) {
                Ok(s) => Ok(s),
                Err(_) => Err(invalid_utf8("input is not valid UTF-8")),
            }
        }
        Err(_) => Err(invalid_utf8("input is not valid UTF-8")),
    }
}

fn invalid_utf8(msg: &'static str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn drain<R: Read>(mut reader: Utf8Reader<R>) -> io::Result<String> {
        let mut out = String::new();
        while let Some(chunk) = reader.next_chunk()? {
            out.push_str(chunk);
        }
        Ok(out)
    }

    #[test]
    fn ascii_roundtrip() {
        let reader = Utf8Reader::new(Cursor::new("<a>hello</a>"));
        assert_eq!(drain(reader).unwrap(), "<a>hello</a>");
    }

    #[test]
    fn multibyte_split_across_reads() {
        // one byte per read() call, so every multi-byte character is split
        struct OneByte<R: Read>(R);
        impl<R: Read> Read for OneByte<R> {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                let n = 1.min(buf.len());
                self.0.read(&mut buf[..n])
            }
        }
        let reader = Utf8Reader::new(OneByte(Cursor::new("<ä>προς 😀</ä>")));
        assert_eq!(drain(reader).unwrap(), "<ä>προς 😀</ä>");
    }

    #[test]
    fn invalid_bytes() {
        let reader = Utf8Reader::new(Cursor::new(b"ab\xffcd".to_vec()));
        let err = drain(reader).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn truncated_sequence_at_eof() {
        // first two bytes of a three-byte character
        let reader = Utf8Reader::new(Cursor::new(b"ab\xe2\x82".to_vec()));
        let err = drain(reader).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
