//! Task Row Component
//!
//! One task in the list: done checkbox, text, deadline, edit and delete.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::deadline::{classify, format_date};
use crate::models::Task;
use crate::prompt::{ask_edit, BrowserPrompt};

/// Row classes: `done` plus the deadline status decoration
fn row_class(task: &Task, today: NaiveDate) -> String {
    let mut class = String::from("task-row");
    if task.done {
        class.push_str(" done");
    }
    if let Some(status) = classify(task.deadline, today).css_class() {
        class.push(' ');
        class.push_str(status);
    }
    class
}

#[component]
pub fn TaskRow(task: Task, today: NaiveDate) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id;
    let done = task.done;
    let class = row_class(&task, today);
    let text = task.text.clone();
    let deadline = task.deadline.map(format_date);

    let edit = move |_| {
        let Some(answers) = ask_edit(&BrowserPrompt, &task) else {
            return;
        };
        ctx.apply("edit", |store| {
            store.edit_task(id, Some(&answers.text), Some(&answers.deadline))
        });
    };

    view! {
        <li class=class>
            <input
                type="checkbox"
                prop:checked=done
                on:change=move |_| { ctx.apply("toggle", |store| store.toggle_done(id)); }
            />

            <span class="task-text">{text}</span>

            {deadline.map(|d| view! { <span class="task-deadline">{d}</span> })}

            <button class="edit-btn" on:click=edit>"Edit"</button>
            <button class="delete-btn" on:click=move |_| { ctx.apply("delete", |store| store.delete_task(id)); }>
                "×"
            </button>
        </li>
    }
}
