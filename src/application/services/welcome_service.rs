use crate::application::errors::EntryError;
use crate::domain::entities::Greeting;
use crate::domain::traits::Output;

/// Service for greeting the user on launch
pub struct WelcomeService<O: Output> {
    output: O,
    greeting: Greeting,
}

impl<O: Output> WelcomeService<O> {
    pub fn new(output: O) -> Self {
        Self {
            output,
            greeting: Greeting::welcome(),
        }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Write the greeting as a single line
    pub fn greet(&mut self) -> Result<(), EntryError> {
        tracing::debug!("Writing greeting");
        self.output.write_line(self.greeting.text())?;
        Ok(())
    }
}
