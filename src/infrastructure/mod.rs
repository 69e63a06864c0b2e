//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Adapters: Terminal output

pub mod adapters;
