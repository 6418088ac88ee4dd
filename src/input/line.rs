use std::io::{self, BufRead};

pub trait LineReader {
    /// Appends the next line to `buf`, delimiter included. Returns 0 at EOF.
    fn read(&mut self, buf: &mut Vec<u8>) -> io::Result<usize>;

    /// The byte that terminates each line.
    fn delimiter(&self) -> u8;
}

pub struct DelimReader<R> {
    inner: R,
    delim: u8,
}

impl<R: BufRead> DelimReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            delim: b'\n',
        }
    }

    pub fn with_delimiter(inner: R, delim: u8) -> Self {
        Self { inner, delim }
    }
}

impl<R: BufRead> LineReader for DelimReader<R> {
    fn read(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        self.inner.read_until(self.delim, buf)
    }

    fn delimiter(&self) -> u8 {
        self.delim
    }
}

/// Strips one trailing delimiter and a carriage return preceding it, if any.
pub fn trim_line(buf: &[u8], delim: u8) -> &[u8] {
    let buf = match buf.split_last() {
        Some((last, rest)) if *last == delim => rest,
        _ => buf,
    };
    match buf.split_last() {
        Some((b'\r', rest)) => rest,
        _ => buf,
    }
}
