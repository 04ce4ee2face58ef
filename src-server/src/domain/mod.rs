//! Domain Layer
//!
//! Contains the task entity and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod task;

pub use entity::{Entity, DomainError, DomainResult};
pub use task::{Task, TaskId};
