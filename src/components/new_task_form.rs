//! New Task Form Component
//!
//! Text plus optional deadline; blank text is ignored.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());
    let (new_deadline, set_new_deadline) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        let deadline = new_deadline.get();
        let added = ctx.apply("add", |store| {
            store.add_task(&text, Some(&deadline)).map(|id| id.is_some())
        });
        if added {
            set_new_text.set(String::new());
            set_new_deadline.set(String::new());
        }
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="Add a new task..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <input
                type="date"
                prop:value=move || new_deadline.get()
                on:input=move |ev| set_new_deadline.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
