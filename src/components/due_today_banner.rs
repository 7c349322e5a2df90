//! Due-Today Banner Component
//!
//! Shown once at startup when unfinished tasks are due today. Hides itself
//! after the configured lifetime or when closed; whichever comes second is a
//! no-op.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::summary::due_today_message;

#[component]
pub fn DueTodayBanner(count: usize) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (visible, set_visible) = signal(count > 0);

    if count > 0 {
        let config = ctx.config();
        log::info!("[NOTIFY] {} due today, hiding in {:?}", count, config.notification_lifetime);
        Timeout::new(config.notification_millis(), move || set_visible.set(false)).forget();
    }

    view! {
        <Show when=move || visible.get()>
            <div class="notification" role="status">
                <span>{due_today_message(count)}</span>
                <button class="close-btn" on:click=move |_| set_visible.set(false)>"×"</button>
            </div>
        </Show>
    }
}
