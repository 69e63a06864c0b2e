/// Welcome line shown when the CLI entry is launched.
pub const WELCOME: &str = "Welcome to the JunAiKey CLI entry point!";

/// A single line of greeting text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting {
    text: &'static str,
}

impl Greeting {
    pub const fn welcome() -> Self {
        Self { text: WELCOME }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::welcome()
    }
}

impl std::fmt::Display for Greeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)
    }
}
