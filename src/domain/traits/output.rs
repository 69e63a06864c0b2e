use crate::application::errors::EntryError;

/// Output trait - abstraction over where user-facing lines are written
pub trait Output {
    /// Write one line of text, terminated by a newline
    fn write_line(&mut self, text: &str) -> Result<(), EntryError>;
}

impl<O: Output + ?Sized> Output for &mut O {
    fn write_line(&mut self, text: &str) -> Result<(), EntryError> {
        (**self).write_line(text)
    }
}
