//! Where the structured backend writes its lines.

use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Output destination of the structured backend.
#[derive(Debug)]
pub enum Destination {
    Stdout,
    File(BufWriter<File>),
}

impl Destination {
    pub fn file(file: File) -> Self {
        Destination::File(BufWriter::new(file))
    }
}

impl Write for Destination {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Destination::Stdout => io::stdout().lock().write(buf),
            Destination::File(writer) => writer.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Destination::Stdout => io::stdout().lock().write_all(buf),
            Destination::File(writer) => writer.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Destination::Stdout => io::stdout().flush(),
            Destination::File(writer) => writer.flush(),
        }
    }
}
