//! JunAiKey CLI entry point
//!
//! Linking this crate has no side effects; the greeting is only written
//! when [`run`] is called, which the `junai-key-cli` binary does once on
//! launch.

pub mod domain;
pub mod application;
pub mod infrastructure;

use application::errors::EntryError;
use application::services::WelcomeService;
use domain::traits::Output;
use infrastructure::adapters::ConsoleAdapter;

pub use domain::entities::{Greeting, WELCOME};

/// Print the welcome line to standard output.
///
/// A failed write is not recovered from: it panics with the same message
/// `println!` uses.
pub fn run() {
    if let Err(e) = run_with(ConsoleAdapter::stdout()) {
        panic!("failed printing to stdout: {}", e);
    }
}

/// Write the welcome line to `output` instead of standard output.
pub fn run_with<O: Output>(output: O) -> Result<(), EntryError> {
    WelcomeService::new(output).greet()
}
