//! Application services - Use case orchestration

pub mod welcome_service;

pub use welcome_service::WelcomeService;
