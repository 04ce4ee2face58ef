//! Task Table Component
//!
//! Renders the store's task list as table rows, plus the empty-state message.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::task_list::shows_empty_state;

#[component]
pub fn TaskTable() -> impl IntoView {
    let store = use_app_store();

    view! {
        <table class="task-table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Description"</th>
                    <th>"Done"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody id="task-list">
                <For
                    each=move || store.tasks().get()
                    // Every persisted field is part of the key so a saved change re-renders the row
                    key=|task| (task.id, task.title.clone(), task.description.clone(), task.completed)
                    children=move |task| view! { <TaskRow task=task /> }
                />
            </tbody>
        </table>
        <Show when=move || shows_empty_state(&store.tasks().read())>
            <p class="no-tasks-message">"No tasks yet. Add one above!"</p>
        </Show>
    }
}
