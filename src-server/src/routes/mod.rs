//! HTTP route groups.

pub mod tasks;
