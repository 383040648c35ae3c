//! Buffered file I/O
//!
//! Thin wrappers over `BufReader`/`BufWriter` used by the FASTA reader and
//! the report writer.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

// Default buffer sizes
const DEFAULT_READ_BUFFER_SIZE: usize = 64 * 1024; // 64KB
const DEFAULT_WRITE_BUFFER_SIZE: usize = 64 * 1024; // 64KB

/// Buffered file reader
pub struct FastReader {
    reader: BufReader<File>,
    path: String,
}

impl FastReader {
    /// Open `path` for reading
    pub fn new<P: AsRef<Path>>(path: P, buffer_size: Option<usize>) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        let buf_size = buffer_size.unwrap_or(DEFAULT_READ_BUFFER_SIZE);

        Ok(Self {
            reader: BufReader::with_capacity(buf_size, file),
            path: path.as_ref().to_string_lossy().to_string(),
        })
    }

    /// Iterate over the lines of the file with terminators stripped
    pub fn read_lines(&mut self) -> Lines<'_, BufReader<File>> {
        Lines::new(&mut self.reader)
    }

    /// Get the path of the file being read
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Iterator over the raw lines of any buffered reader
///
/// Lines are bytes, not text, so input that is not valid UTF-8 is passed
/// through untouched. Strips a trailing `\n` and, if present, the `\r`
/// before it. Nothing else is trimmed.
pub struct Lines<'a, R: BufRead> {
    reader: &'a mut R,
    buffer: Vec<u8>,
}

impl<'a, R: BufRead> Lines<'a, R> {
    pub fn new(reader: &'a mut R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
        }
    }
}

impl<'a, R: BufRead> Iterator for Lines<'a, R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => None, // EOF
            Ok(_) => {
                if self.buffer.ends_with(b"\n") {
                    self.buffer.pop();
                    if self.buffer.ends_with(b"\r") {
                        self.buffer.pop();
                    }
                }

                Some(Ok(self.buffer.clone()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Buffered file writer that truncates its target
pub struct FastWriter {
    writer: BufWriter<File>,
    path: String,
}

impl FastWriter {
    /// Create (or truncate) `path` for writing
    pub fn new<P: AsRef<Path>>(path: P, buffer_size: Option<usize>) -> io::Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path.as_ref())?;

        let buf_size = buffer_size.unwrap_or(DEFAULT_WRITE_BUFFER_SIZE);

        Ok(Self {
            writer: BufWriter::with_capacity(buf_size, file),
            path: path.as_ref().to_string_lossy().to_string(),
        })
    }

    /// Write all of `data`
    pub fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.writer.write_all(data)
    }

    /// Flush any buffered data to disk
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Get the path of the file being written
    pub fn path(&self) -> &str {
        &self.path
    }
}
