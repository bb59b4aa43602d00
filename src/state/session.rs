//! Leptos binding for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionProvider` builds the store inside the router (it needs the
//! navigator), mirrors its state into a signal, and kicks off the mount-time
//! current-user fetch. Components reach it through `use_session`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::ClientConfig;
use crate::net::api::HttpAuthClient;
use crate::net::types::NewStudent;
use crate::session::{Navigator, Session, SessionError, SessionStore};
use crate::state::notifications::{NotificationsState, ToastNotifier};
use crate::util::cookie::CookieTokenStore;

/// Handle given to components: the store plus a reactive view of its state.
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: StoredValue<SessionStore, LocalStorage>,
    /// Latest session snapshot.
    pub state: ReadSignal<Session>,
}

impl SessionContext {
    /// Wrap a store and mirror its changes into a signal.
    pub fn new(store: SessionStore) -> Self {
        let state = RwSignal::new(store.snapshot());
        store.subscribe(move |s| {
            let _ = state.try_set(s.clone());
        });
        Self { store: StoredValue::new_local(store), state: state.read_only() }
    }

    pub fn store(&self) -> SessionStore {
        self.store.get_value()
    }

    /// Sign in, as a future the caller drives.
    pub fn login_task(
        &self,
        email: String,
        password: String,
    ) -> impl Future<Output = Result<(), SessionError>> + use<> {
        let store = self.store();
        async move { store.login(&email, &password).await }
    }

    pub fn register_task(&self, student: NewStudent) -> impl Future<Output = Result<(), SessionError>> + use<> {
        let store = self.store();
        async move { store.register(&student).await }
    }

    pub fn logout_task(&self) -> impl Future<Output = Result<(), SessionError>> + use<> {
        let store = self.store();
        async move { store.logout().await }
    }

    /// Fire-and-forget `login_task` for event handlers.
    pub fn login(&self, email: String, password: String) {
        spawn_task(self.login_task(email, password));
    }

    pub fn register(&self, student: NewStudent) {
        spawn_task(self.register_task(student));
    }

    pub fn logout(&self) {
        spawn_task(self.logout_task());
    }
}

/// Run an operation in the background; its outcome is already surfaced as a
/// toast, so the result is dropped.
fn spawn_task(task: impl Future<Output = Result<(), SessionError>> + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let _ = task.await;
    });
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}

/// Look up the session handle.
///
/// # Errors
///
/// `SessionError::OutsideProvider` when no `SessionProvider` is above the
/// caller.
pub fn try_use_session() -> Result<SessionContext, SessionError> {
    use_context::<SessionContext>().ok_or(SessionError::OutsideProvider)
}

/// Look up the session handle.
///
/// # Panics
///
/// Panics when called outside a `SessionProvider`; that is an integration
/// bug, not a runtime condition.
pub fn use_session() -> SessionContext {
    match try_use_session() {
        Ok(ctx) => ctx,
        Err(e) => panic!("{e}"),
    }
}

/// `Navigator` over the Leptos router.
struct RouterNavigator {
    navigate: Rc<dyn Fn(&str)>,
    pathname: Memo<String>,
}

impl Navigator for RouterNavigator {
    fn current_path(&self) -> String {
        self.pathname.get_untracked()
    }

    fn navigate(&self, path: &str) {
        (self.navigate)(path);
    }
}

/// Provides the session to its subtree. Must be rendered inside `<Router>`
/// and below the toast state context.
#[component]
pub fn SessionProvider(#[prop(optional)] config: Option<ClientConfig>, children: Children) -> impl IntoView {
    let config = config.unwrap_or_default();
    let toasts = expect_context::<RwSignal<NotificationsState>>();
    let navigate = use_navigate();
    let navigator = RouterNavigator {
        navigate: Rc::new(move |path: &str| navigate(path, NavigateOptions::default())),
        pathname: use_location().pathname,
    };

    let store = SessionStore::new(
        Rc::new(HttpAuthClient::new(config.clone())),
        Rc::new(navigator),
        Rc::new(ToastNotifier::new(toasts)),
        Rc::new(CookieTokenStore::new(config.token_cookie.clone())),
        config,
    );
    let ctx = SessionContext::new(store);
    provide_context(ctx);

    #[cfg(feature = "hydrate")]
    {
        let store = ctx.store();
        leptos::task::spawn_local(async move {
            let _ = store.initialize().await;
        });
    }

    children()
}
