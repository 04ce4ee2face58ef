//! Task Service Bindings
//!
//! Frontend bindings to the backend HTTP API, plus the browser dialogs
//! used to report their outcome.

mod task;
mod dialog;

pub use task::*;
pub use dialog::*;

/// Base URL of the task service; set `TASKS_API_URL` at build time to override
pub const API_BASE_URL: &str = match option_env!("TASKS_API_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

fn endpoint(path: &str) -> String {
    format!("{}{}", API_BASE_URL.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let url = endpoint("/tasks/7");
        assert!(url.ends_with("/tasks/7"));
        assert!(!url.contains("//tasks"));
    }
}
