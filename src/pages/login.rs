//! Login page: email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_input::{AuthInput, email_attrs};
use crate::state::session::use_session;
use crate::util::auth::install_authed_redirect;

/// Trim the email and require both fields. The password is sent as typed.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let dashboard_path = session.store().config().dashboard_path.clone();
    install_authed_redirect(session.state, dashboard_path, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = Signal::derive(move || session.state.get().logging_in);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok((email_value, password_value)) => {
                info.set(String::new());
                session.login(email_value, password_value);
            }
            Err(msg) => info.set(msg.to_owned()),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in to your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <AuthInput
                        label="Email address"
                        id="email"
                        name="email"
                        input_type="email"
                        autocomplete="email"
                        required=true
                        value=email
                        attrs=email_attrs()
                    />
                    <AuthInput
                        label="Password"
                        id="password"
                        name="password"
                        input_type="password"
                        autocomplete="current-password"
                        required=true
                        value=password
                    />
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Not a member? "
                    <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
