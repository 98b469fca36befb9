// src/application/commands/mod.rs
//
// HTTP Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the pages and the repositories
// - Commands accept forms and query strings, return DTOs
// - Commands handle error conversion for HTTP
// - Commands NEVER contain business logic

pub mod inventory_commands;
pub mod recipe_commands;

pub use inventory_commands::*;
pub use recipe_commands::*;
