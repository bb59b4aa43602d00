//! Registration page: creates a student account, then hands off to login.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_input::{AuthInput, email_attrs};
use crate::net::types::NewStudent;
use crate::state::session::use_session;
use crate::util::auth::install_authed_redirect;

/// Build the registration payload from raw form values.
pub(crate) fn build_new_student(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<NewStudent, &'static str> {
    let student = NewStudent {
        first_name: first_name.trim().to_owned(),
        last_name: last_name.trim().to_owned(),
        email: email.trim().to_owned(),
        password: password.to_owned(),
    };
    if student.first_name.is_empty()
        || student.last_name.is_empty()
        || student.email.is_empty()
        || student.password.is_empty()
    {
        return Err("Fill in every field.");
    }
    Ok(student)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let dashboard_path = session.store().config().dashboard_path.clone();
    install_authed_redirect(session.state, dashboard_path, use_navigate());

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = Signal::derive(move || session.state.get().registering);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let built = build_new_student(
            &first_name.get_untracked(),
            &last_name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        );
        match built {
            Ok(student) => {
                info.set(String::new());
                session.register(student);
            }
            Err(msg) => info.set(msg.to_owned()),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <AuthInput label="First name" id="first-name" name="firstName" autocomplete="given-name" required=true value=first_name/>
                    <AuthInput label="Last name" id="last-name" name="lastName" autocomplete="family-name" required=true value=last_name/>
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
                        autocomplete="new-password"
                        required=true
                        value=password
                    />
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
