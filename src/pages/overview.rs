//! Dashboard landing section.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use leptos::prelude::*;

use crate::session::Session;
use crate::state::session::use_session;

pub(crate) fn greeting(state: &Session) -> String {
    match state.user.as_ref().map(|u| u.first_name.trim()).filter(|n| !n.is_empty()) {
        Some(name) => format!("Welcome back, {name}"),
        None => "Welcome back".to_owned(),
    }
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let session = use_session();

    view! {
        <section class="overview">
            <h1 class="overview__title">{move || greeting(&session.state.get())}</h1>
            <p class="overview__hint">"Pick a section from the sidebar to get started."</p>
        </section>
    }
}
