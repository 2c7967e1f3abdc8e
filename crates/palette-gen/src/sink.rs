//! Destinations for generated documents.
//!
//! - [`FileSink`]: writes a file atomically, creating its directory first
//! - [`WriterSink`]: streams to any [`Write`] (stdout for dry runs)
//! - [`MemorySink`]: keeps the text in memory

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::document::Document;
use crate::error::SinkError;

/// A destination that receives a complete [`Document`].
pub trait Sink {
    /// Writes the header, every line, then the footer.
    fn write_document(&mut self, document: &Document) -> Result<(), SinkError>;
}

fn write_to<W: Write>(writer: &mut W, document: &Document) -> std::io::Result<()> {
    writer.write_all(document.header.as_bytes())?;
    for line in &document.lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.write_all(document.footer.as_bytes())?;
    writer.flush()
}

/// Writes a document to a file path.
///
/// Content goes to a temporary file in the target directory, which then
/// replaces the target in one rename. Prior content is discarded; if anything
/// fails the target is left as it was and the temporary file is removed.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Sink for FileSink {
    fn write_document(&mut self, document: &Document) -> Result<(), SinkError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            tracing::debug!("Creating output directory {}", dir.display());
        }
        fs::create_dir_all(&dir).map_err(|e| self.io_error(e))?;

        let mut temp = NamedTempFile::new_in(&dir).map_err(|e| self.io_error(e))?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            write_to(&mut writer, document).map_err(|e| self.io_error(e))?;
        }
        temp.persist(&self.path).map_err(|e| SinkError::Persist {
            path: self.path.clone(),
            source: e.error,
        })?;

        tracing::info!("Wrote {}", self.path.display());
        Ok(())
    }
}

/// Streams a document to a writer.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn write_document(&mut self, document: &Document) -> Result<(), SinkError> {
        write_to(&mut self.writer, document)?;
        Ok(())
    }
}

/// Collects documents into a string.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: String,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Sink for MemorySink {
    fn write_document(&mut self, document: &Document) -> Result<(), SinkError> {
        self.buffer.push_str(&document.render());
        Ok(())
    }
}
