//! Application layer - Use cases
//! 
//! This layer contains:
//! - Services: Greeting orchestration
//! - Errors: Entry point errors

pub mod errors;
pub mod services;
