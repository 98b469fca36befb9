// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the domain, repositories and services
// - It provides the boundary between HTTP and the core
// - It owns locking, configuration and error-to-response mapping
// - It translates between forms/DTOs and domain entities

pub mod commands;
pub mod config;
pub mod dto;
pub mod error_handling;
pub mod request_validation;
pub mod routes;
pub mod state;

pub use config::{CliArgs, ServerConfig};
pub use error_handling::{ErrorResponse, ErrorType};
pub use routes::create_router;
pub use state::AppState;
