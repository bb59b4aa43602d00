//! On-screen toast stack.

#[cfg(test)]
#[path = "toaster_test.rs"]
mod toaster_test;

use leptos::prelude::*;

use crate::state::notifications::{NotificationsState, Toast};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|t: &Toast| t.id
                children=move |t: Toast| {
                    let id = t.id;
                    let n = t.notification;
                    view! {
                        <div class=n.tone.css_class() data-color=n.tone.color() role="status" on:click=move |_| toasts.update(|s| s.dismiss(id))>
                            {n.title.map(|title| view! { <p class="toast__title">{title}</p> })}
                            <p class="toast__message">{n.message}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
