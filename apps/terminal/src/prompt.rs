//! # Prompt: The Terminal Interaction Collaborator
//!
//! One small struct owns all line I/O, generic over `BufRead` + `Write` so
//! menu flows run against `&[u8]` / `Vec<u8>` buffers in tests and against
//! locked stdio in production.
//!
//! The prompt never validates: it hands back the trimmed raw line, and the
//! menu layer parses it through `forno_core::validation`. A closed input
//! stream surfaces as `UnexpectedEof`, which the menu loops treat as fatal.

use std::io::{self, BufRead, Write};

/// Line-based question/answer over arbitrary reader/writer pairs.
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Prompt { reader, writer }
    }

    /// Prints one line of output.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }

    /// Prints a question without a newline and reads the answer line.
    ///
    /// Returns the answer with surrounding whitespace trimmed. End of
    /// input is an `UnexpectedEof` error: there is nobody left to ask.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.writer, "{question}")?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }

        Ok(line.trim().to_string())
    }

    /// Consumes the prompt, returning the writer (used by tests to inspect
    /// the produced output).
    pub fn into_writer(self) -> W {
        self.writer
    }
}
