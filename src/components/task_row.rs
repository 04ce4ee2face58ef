//! Task Row Component
//!
//! One table row. Whether its controls are enabled is derived from the
//! store's edit lock and the row's in-flight writes; the row never disables
//! other rows directly.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::Task;
use crate::store::{
    editing_id, store_begin_edit, store_begin_write, store_edit_draft, store_finish_edit,
    store_finish_write, store_remove_task, store_update_task, use_app_store, write_pending,
    AppStateStoreFields,
};
use crate::task_list::row_controls;

/// A single task row
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let store = use_app_store();

    let id = task.id;
    let completed = task.completed;
    let title = task.title.clone();
    let description = task.description.clone();
    let text_class = move |base: &'static str| {
        if completed {
            format!("{} completed", base)
        } else {
            base.to_string()
        }
    };

    let controls = move || row_controls(editing_id(&store), write_pending(&store, id), id);

    // Completion toggle: persists immediately, applied only if still the latest write
    let on_toggle = move |ev: web_sys::Event| {
        let updated = Task {
            completed: event_target_checked(&ev),
            ..task.clone()
        };
        let seq = store_begin_write(&store, id);
        spawn_local(async move {
            match commands::update_task(&updated).await {
                Ok(_) => {
                    if store_finish_write(&store, id, seq) {
                        store_update_task(&store, updated);
                    } else {
                        commands::console_log(&format!("[TASKS] Dropped stale toggle for task {}", id));
                    }
                }
                Err(e) => {
                    store_finish_write(&store, id, seq);
                    commands::console_error(&format!("Error updating task completion status: {}", e));
                }
            }
        });
    };

    // Edit / Save
    let on_edit = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if *store.editing().read_untracked() != Some(id) {
            store_begin_edit(&store, id);
            return;
        }

        let Some(updated) = store.draft().read_untracked().to_task(id, completed) else {
            commands::alert("Task title cannot be empty!");
            return;
        };
        let seq = store_begin_write(&store, id);
        spawn_local(async move {
            match commands::update_task(&updated).await {
                Ok(message) => {
                    commands::console_log(&format!("[TASKS] {} (id {})", message, id));
                    store_finish_write(&store, id, seq);
                    store_finish_edit(&store, updated);
                }
                Err(e) => {
                    store_finish_write(&store, id, seq);
                    commands::console_error(&format!("Error updating task: {}", e));
                    commands::alert("Failed to update task. Please try again.");
                }
            }
        });
    };

    let on_delete = move |_| {
        if !commands::confirm("Are you sure you want to delete this task?") {
            return;
        }
        spawn_local(async move {
            match commands::delete_task(id).await {
                Ok(message) => {
                    commands::console_log(&format!("[TASKS] {} (id {})", message, id));
                    store_remove_task(&store, id);
                    commands::alert("Task successfully deleted!");
                }
                Err(e) => {
                    commands::console_error(&format!("Error deleting task: {}", e));
                    commands::alert("Failed to delete task. Please try again.");
                }
            }
        });
    };

    let title_cell = move || {
        if controls().is_editing {
            view! {
                <input
                    class="edit-input"
                    type="text"
                    prop:value=move || store.draft().read().title.clone()
                    on:input=move |ev| store_edit_draft(&store, |d| d.title = event_target_value(&ev))
                />
            }
            .into_any()
        } else {
            view! { <span>{title.clone()}</span> }.into_any()
        }
    };

    let description_cell = move || {
        if controls().is_editing {
            view! {
                <input
                    class="edit-input"
                    type="text"
                    prop:value=move || store.draft().read().description.clone()
                    on:input=move |ev| store_edit_draft(&store, |d| d.description = event_target_value(&ev))
                />
            }
            .into_any()
        } else {
            view! { <span>{description.clone()}</span> }.into_any()
        }
    };

    view! {
        <tr class="task-item">
            <td class=text_class("task-title")>{title_cell}</td>
            <td class=text_class("task-description")>{description_cell}</td>
            <td>
                <input
                    type="checkbox"
                    class="task-checkbox"
                    prop:checked=completed
                    disabled=move || !controls().checkbox_enabled
                    on:change=on_toggle
                />
            </td>
            <td>
                <div class="action-buttons">
                    <button
                        class="edit-button"
                        disabled=move || !controls().edit_enabled
                        on:click=on_edit
                    >
                        {move || if controls().is_editing { "Save" } else { "Edit" }}
                    </button>
                    <button
                        class="delete-button"
                        disabled=move || !controls().delete_enabled
                        on:click=on_delete
                    >
                        "Delete"
                    </button>
                </div>
            </td>
        </tr>
    }
}
