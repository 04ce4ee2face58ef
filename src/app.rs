//! Task Manager Frontend App
//!
//! Provides the store, loads the task list once on mount and lays out the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{NewTaskForm, TaskTable};
use crate::store::{store_set_tasks, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    // Load tasks on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_tasks().await {
                Ok(loaded) => {
                    commands::console_log(&format!("[APP] Loaded {} tasks", loaded.len()));
                    store_set_tasks(&store, loaded);
                }
                Err(e) => commands::console_error(&format!("Error loading tasks: {}", e)),
            }
        });
    });

    view! {
        <main class="container">
            <h1>"Task Manager"</h1>
            <NewTaskForm />
            <TaskTable />
        </main>
    }
}
