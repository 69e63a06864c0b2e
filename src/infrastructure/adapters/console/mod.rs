//! Console adapter - writes lines to a terminal stream

use std::io::{self, Write};
use crate::application::errors::EntryError;
use crate::domain::traits::Output;

/// Console output adapter over any writer
pub struct ConsoleAdapter<W: Write> {
    writer: W,
}

impl ConsoleAdapter<io::Stdout> {
    /// Adapter bound to the process's standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleAdapter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for ConsoleAdapter<W> {
    fn write_line(&mut self, text: &str) -> Result<(), EntryError> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }
}
