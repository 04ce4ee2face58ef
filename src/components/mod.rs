//! UI Components
//!
//! Reusable Leptos components.

mod new_task_form;
mod task_row;
mod task_table;

pub use new_task_form::NewTaskForm;
pub use task_row::TaskRow;
pub use task_table::TaskTable;
