//! Session store: the single owner of the signed-in student's identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and the dashboard shell read the `Session` snapshot and trigger the
//! four auth operations. The store calls the `AuthApi`, updates its state,
//! persists the token cookie, shows a toast, and navigates.
//!
//! DESIGN
//! ======
//! The store is an explicit handle built from its collaborators (`AuthApi`,
//! `Navigator`, `Notifier`, `TokenStore`) instead of an ambient context
//! lookup, so tests drive it with fakes. The Leptos binding in
//! `state::session` mirrors every change into a signal via `subscribe`.
//!
//! Each operation owns an in-flight flag. A second call while the flag is set
//! returns `SessionError::Busy` without touching the network, so repeated
//! clicks cannot stack requests.
//!
//! ERROR HANDLING
//! ==============
//! Network failures are turned into toasts here and never escape as panics.
//! The returned `Err` is informational; UI callers drop it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(test)]
#[path = "test_support.rs"]
pub(crate) mod test_support;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::config::ClientConfig;
use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{LoginResponse, NewStudent, Student};
use crate::state::notifications::{Notification, Tone};
use crate::util::auth::is_protected_path;

pub const MSG_LOGIN_OK: &str = "Logged in successfully";
pub const MSG_LOGIN_FAILED: &str = "Invalid email or password";
pub const MSG_REGISTER_OK: &str = "Account created successfully";
pub const MSG_REGISTER_REJECTED: &str = "something went wrong";
pub const MSG_REGISTER_FAILED: &str = "An error occured";
pub const MSG_LOGOUT_OK: &str = "Logged out successfully";
pub const MSG_LOGOUT_FAILED: &str = "An error occurred";

/// Current identity plus the in-flight flags for each auth operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Signed-in student, or `None` when unauthenticated.
    pub user: Option<Student>,
    /// True until the first current-user fetch settles. Never set back.
    pub initial_loading: bool,
    pub logging_in: bool,
    pub registering: bool,
    pub logging_out: bool,
    /// A current-user fetch is outstanding.
    pub fetching_user: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            initial_loading: true,
            logging_in: false,
            registering: false,
            logging_out: false,
            fetching_user: false,
        }
    }
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether `op` is currently outstanding.
    pub fn in_flight(&self, op: AuthOp) -> bool {
        match op {
            AuthOp::FetchUser => self.fetching_user,
            AuthOp::Login => self.logging_in,
            AuthOp::Register => self.registering,
            AuthOp::Logout => self.logging_out,
        }
    }

    fn set_in_flight(&mut self, op: AuthOp, value: bool) {
        match op {
            AuthOp::FetchUser => self.fetching_user = value,
            AuthOp::Login => self.logging_in = value,
            AuthOp::Register => self.registering = value,
            AuthOp::Logout => self.logging_out = value,
        }
    }
}

/// The auth operations the store performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthOp {
    FetchUser,
    Login,
    Register,
    Logout,
}

impl AuthOp {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FetchUser => "fetch_user",
            Self::Login => "login",
            Self::Register => "register",
            Self::Logout => "logout",
        }
    }
}

impl fmt::Display for AuthOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("{0} already in flight")]
    Busy(AuthOp),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("registration rejected")]
    Rejected(Option<String>),
    #[error("use_session must be called within a SessionProvider")]
    OutsideProvider,
}

/// Client-side routing, as seen by the store.
pub trait Navigator {
    /// Path of the current location, e.g. `/dashboard/books`.
    fn current_path(&self) -> String;
    fn navigate(&self, path: &str);
}

/// Toast sink.
pub trait Notifier {
    fn show(&self, notification: Notification);
}

/// Persistence for the auth token outside of in-memory state.
pub trait TokenStore {
    fn store(&self, token: &str, max_age_secs: u64);
    fn clear(&self);
}

type Listener = Rc<dyn Fn(&Session)>;

struct Inner {
    state: RefCell<Session>,
    listeners: RefCell<Vec<Listener>>,
    api: Rc<dyn AuthApi>,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
    tokens: Rc<dyn TokenStore>,
    config: ClientConfig,
}

/// Cheap-clone handle to the session state and its operations.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<Inner>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &*self.inner.state.borrow())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(
        api: Rc<dyn AuthApi>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
        tokens: Rc<dyn TokenStore>,
        config: ClientConfig,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(Session::default()),
                listeners: RefCell::new(Vec::new()),
                api,
                navigator,
                notifier,
                tokens,
                config,
            }),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> Session {
        self.inner.state.borrow().clone()
    }

    /// Register a listener called with a fresh snapshot after every change.
    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Mount-time bootstrap: fetch the current student unless one is cached.
    ///
    /// # Errors
    ///
    /// Propagates the result of `fetch_current_user` when a fetch is made.
    pub async fn initialize(&self) -> Result<(), SessionError> {
        if self.inner.state.borrow().user.is_some() {
            self.finish_initial_loading();
            return Ok(());
        }
        self.fetch_current_user().await
    }

    /// Resolve the current student from the API.
    ///
    /// On failure the user is cleared and, when the current location is in
    /// the protected area, the student is sent to the login screen.
    /// `initial_loading` is cleared whatever the outcome.
    ///
    /// # Errors
    ///
    /// `Busy` if a fetch is already outstanding, `Api` if the call failed.
    pub async fn fetch_current_user(&self) -> Result<(), SessionError> {
        self.begin(AuthOp::FetchUser)?;

        let outcome = match self.inner.api.me().await {
            Ok(student) => {
                leptos::logging::log!("session: restored student {}", student.id);
                self.update(|s| s.user = Some(student));
                Ok(())
            }
            Err(e) => {
                leptos::logging::log!("session: no current student: {e}");
                self.update(|s| s.user = None);
                let path = self.inner.navigator.current_path();
                if is_protected_path(&path, &self.inner.config.dashboard_path) {
                    self.inner.navigator.navigate(&self.inner.config.login_path);
                }
                Err(e.into())
            }
        };

        self.finish(AuthOp::FetchUser);
        self.finish_initial_loading();
        outcome
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// `Busy` if a login is already outstanding, `Api` if the call failed.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), SessionError> {
        self.begin(AuthOp::Login)?;

        let outcome = match self.inner.api.login(email, password).await {
            Ok(LoginResponse { student, token }) => {
                leptos::logging::log!("session: logged in student {}", student.id);
                self.update(|s| s.user = Some(student));
                self.inner.tokens.store(&token, self.inner.config.token_max_age_secs());
                self.inner.notifier.show(Notification::success(MSG_LOGIN_OK));
                self.inner.navigator.navigate(&self.inner.config.dashboard_path);
                Ok(())
            }
            Err(e) => {
                leptos::logging::warn!("session: login failed: {e}");
                self.inner.notifier.show(Notification::error(MSG_LOGIN_FAILED));
                Err(e.into())
            }
        };

        self.finish(AuthOp::Login);
        outcome
    }

    /// Create a new student account. Does not sign the student in.
    ///
    /// # Errors
    ///
    /// `Busy` if a registration is already outstanding, `Rejected` if the API
    /// answered `success: false`, `Api` if the call failed.
    pub async fn register(&self, student: &NewStudent) -> Result<(), SessionError> {
        self.begin(AuthOp::Register)?;

        let outcome = match self.inner.api.register(student).await {
            Ok(resp) if resp.success => {
                leptos::logging::log!("session: registered {}", student.email);
                self.inner.notifier.show(Notification::success(MSG_REGISTER_OK));
                self.inner.navigator.navigate(&self.inner.config.login_path);
                Ok(())
            }
            Ok(resp) => {
                leptos::logging::warn!("session: registration rejected: {:?}", resp.message);
                self.inner
                    .notifier
                    .show(Notification::untitled(Tone::Error, MSG_REGISTER_REJECTED));
                Err(SessionError::Rejected(resp.message))
            }
            Err(e) => {
                leptos::logging::warn!("session: registration failed: {e}");
                let message = e.server_message().unwrap_or(MSG_REGISTER_FAILED);
                self.inner.notifier.show(Notification::error(message));
                Err(e.into())
            }
        };

        self.finish(AuthOp::Register);
        outcome
    }

    /// End the session on the server, then locally.
    ///
    /// When the server call fails the local user is kept, so the UI keeps
    /// reflecting a session the server may still consider live.
    ///
    /// # Errors
    ///
    /// `Busy` if a logout is already outstanding, `Api` if the call failed.
    pub async fn logout(&self) -> Result<(), SessionError> {
        self.begin(AuthOp::Logout)?;

        let outcome = match self.inner.api.logout().await {
            Ok(()) => {
                leptos::logging::log!("session: logged out");
                self.update(|s| s.user = None);
                self.inner.tokens.clear();
                self.inner.notifier.show(Notification::success(MSG_LOGOUT_OK));
                self.inner.navigator.navigate(&self.inner.config.login_path);
                Ok(())
            }
            Err(e) => {
                leptos::logging::warn!("session: logout failed: {e}");
                self.inner.notifier.show(Notification::error(MSG_LOGOUT_FAILED));
                Err(e.into())
            }
        };

        self.finish(AuthOp::Logout);
        outcome
    }

    fn begin(&self, op: AuthOp) -> Result<(), SessionError> {
        if self.inner.state.borrow().in_flight(op) {
            return Err(SessionError::Busy(op));
        }
        self.update(|s| s.set_in_flight(op, true));
        Ok(())
    }

    fn finish(&self, op: AuthOp) {
        self.update(|s| s.set_in_flight(op, false));
    }

    fn finish_initial_loading(&self) {
        if self.inner.state.borrow().initial_loading {
            self.update(|s| s.initial_loading = false);
        }
    }

    /// Mutate state, then notify listeners with no borrow held.
    fn update(&self, f: impl FnOnce(&mut Session)) {
        let snapshot = {
            let mut state = self.inner.state.borrow_mut();
            f(&mut state);
            state.clone()
        };
        let listeners = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
