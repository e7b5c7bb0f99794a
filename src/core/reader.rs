use crate::utils::error::Result;
use std::io::BufRead;

/// Iterates the raw lines of a reader without a length limit.
///
/// Line terminators are kept; invalid UTF-8 is replaced rather than treated as fatal.
pub struct LineSource<R: BufRead> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => Some(Ok(String::from_utf8_lossy(&self.buf).into_owned())),
            Err(e) => Some(Err(e.into())),
        }
    }
}

/// Strips leading and trailing whitespace, newline included. Interior spacing is untouched.
pub fn trim_line(raw: &str) -> &str {
    raw.trim()
}
