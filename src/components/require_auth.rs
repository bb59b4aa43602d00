//! Route guard for the protected dashboard area.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session;
use crate::util::auth::install_unauth_redirect;

/// Sends anonymous visitors to the login screen once the initial fetch has
/// settled, and shows a loading line until then.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let login_path = session.store().config().login_path.clone();
    install_unauth_redirect(session.state, login_path, use_navigate());

    view! {
        <Show
            when=move || !session.state.get().initial_loading
            fallback=|| view! { <p class="loading">"Loading..."</p> }
        >
            {children()}
        </Show>
    }
}
