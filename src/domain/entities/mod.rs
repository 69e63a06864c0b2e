//! Domain entities - Core objects with no external dependencies

pub mod greeting;

pub use greeting::{Greeting, WELCOME};
