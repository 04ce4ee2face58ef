//! Task Manager Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and the SQLite implementation
//! - routes: HTTP handlers bridging JSON requests to the repository

pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod routes;
pub mod server;
mod state;

pub use server::{build_router, run};
pub use state::AppState;
