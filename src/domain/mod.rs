//! Domain layer - Core objects with no external dependencies
//! 
//! This layer contains:
//! - Entities: The greeting shown on launch
//! - Traits: Abstractions for infrastructure (Output)

pub mod entities;
pub mod traits;
