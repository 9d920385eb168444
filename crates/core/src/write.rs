use crate::{err::Error, line::OutputLine, Result};
use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::Path,
};

/// How many lines pass between progress reports.
pub const PROGRESS_INTERVAL: u64 = 100_000;

/// Buffered sink that writes [OutputLine]s in the order they arrive.
pub struct LogWriter<W: Write> {
    writer: BufWriter<W>,
    lines: u64,
}

impl LogWriter<File> {
    /// Creates or truncates the file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|source| Error::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(file))
    }
}

impl<W: Write> LogWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::new(inner),
            lines: 0,
        }
    }

    pub fn write_line(&mut self, line: &OutputLine) -> Result<()> {
        line.write_to(&mut self.writer)?;
        self.lines += 1;
        Ok(())
    }

    /// Lines written so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Flushes buffered lines and hands back the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|err| Error::Io(err.into_error()))
    }
}
