//! New Task Form Component
//!
//! Title + description inputs. A blank title never reaches the network.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, CreateTaskArgs};
use crate::store::{store_add_task, use_app_store};
use crate::task_list::new_task_input;

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();

    let (new_title, set_new_title) = signal(String::new());
    let (new_description, set_new_description) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some((title, description)) =
            new_task_input(&new_title.get_untracked(), &new_description.get_untracked())
        else {
            commands::alert("Please enter a task");
            return;
        };

        spawn_local(async move {
            let args = CreateTaskArgs {
                title: &title,
                description: &description,
            };
            match commands::create_task(&args).await {
                Ok(task) => {
                    store_add_task(&store, task);
                    set_new_title.set(String::new());
                    set_new_description.set(String::new());
                }
                Err(e) => {
                    commands::console_error(&format!("Error adding task: {}", e));
                    commands::alert("Failed to add task. Please try again.");
                }
            }
        });
    };

    view! {
        <form id="task-form" class="task-form" on:submit=create_task>
            <input
                id="task-input"
                type="text"
                placeholder="Add a new task..."
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <input
                id="description-input"
                type="text"
                placeholder="Description (optional)"
                prop:value=move || new_description.get()
                on:input=move |ev| set_new_description.set(event_target_value(&ev))
            />
            <button type="submit">"Add Task"</button>
        </form>
    }
}
