//! In-memory collaborators for driving `SessionStore` in tests.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use async_trait::async_trait;

use super::{Navigator, Notifier, SessionStore, TokenStore};
use crate::config::ClientConfig;
use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{LoginResponse, NewStudent, RegisterResponse, Student};
use crate::state::notifications::Notification;

pub fn make_student() -> Student {
    Student {
        id: "s-1".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        created_at: None,
        updated_at: None,
    }
}

/// Future that stays pending until its flag is raised.
struct Gate(Rc<Cell<bool>>);

impl Future for Gate {
    type Output = ();

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
        if self.0.get() { Poll::Ready(()) } else { Poll::Pending }
    }
}

/// Scripted `AuthApi`. Every call succeeds by default.
pub struct FakeApi {
    pub me: Result<Student, ApiError>,
    pub login: Result<LoginResponse, ApiError>,
    pub register: Result<RegisterResponse, ApiError>,
    pub logout: Result<(), ApiError>,
    pub calls: RefCell<Vec<&'static str>>,
    pub last_login: RefCell<Option<(String, String)>>,
    pub last_register: RefCell<Option<NewStudent>>,
    /// When set, every call blocks until the flag is raised.
    pub gate: Option<Rc<Cell<bool>>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            me: Ok(make_student()),
            login: Ok(LoginResponse { student: make_student(), token: "tok-123".to_owned() }),
            register: Ok(RegisterResponse { success: true, message: None }),
            logout: Ok(()),
            calls: RefCell::new(Vec::new()),
            last_login: RefCell::new(None),
            last_register: RefCell::new(None),
            gate: None,
        }
    }
}

impl FakeApi {
    pub fn unauthenticated() -> Self {
        Self { me: Err(ApiError::Status { status: 401, message: None }), ..Self::default() }
    }

    pub fn call_count(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == name).count()
    }

    async fn enter(&self, name: &'static str) {
        self.calls.borrow_mut().push(name);
        if let Some(gate) = &self.gate {
            Gate(gate.clone()).await;
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeApi {
    async fn me(&self) -> Result<Student, ApiError> {
        self.enter("me").await;
        self.me.clone()
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.enter("login").await;
        *self.last_login.borrow_mut() = Some((email.to_owned(), password.to_owned()));
        self.login.clone()
    }

    async fn register(&self, student: &NewStudent) -> Result<RegisterResponse, ApiError> {
        self.enter("register").await;
        *self.last_register.borrow_mut() = Some(student.clone());
        self.register.clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.enter("logout").await;
        self.logout.clone()
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub path: RefCell<String>,
    pub visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self { path: RefCell::new(path.to_owned()), visits: RefCell::new(Vec::new()) }
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn navigate(&self, path: &str) {
        *self.path.borrow_mut() = path.to_owned();
        self.visits.borrow_mut().push(path.to_owned());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub shown: RefCell<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn show(&self, notification: Notification) {
        self.shown.borrow_mut().push(notification);
    }
}

#[derive(Default)]
pub struct MemoryTokens {
    pub token: RefCell<Option<(String, u64)>>,
}

impl TokenStore for MemoryTokens {
    fn store(&self, token: &str, max_age_secs: u64) {
        *self.token.borrow_mut() = Some((token.to_owned(), max_age_secs));
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// A store wired to fakes, with handles to inspect each collaborator.
pub struct Fixture {
    pub store: SessionStore,
    pub api: Rc<FakeApi>,
    pub navigator: Rc<RecordingNavigator>,
    pub notifier: Rc<RecordingNotifier>,
    pub tokens: Rc<MemoryTokens>,
}

impl Fixture {
    pub fn new(api: FakeApi) -> Self {
        Self::at(api, "/")
    }

    pub fn at(api: FakeApi, path: &str) -> Self {
        let api = Rc::new(api);
        let navigator = Rc::new(RecordingNavigator::at(path));
        let notifier = Rc::new(RecordingNotifier::default());
        let tokens = Rc::new(MemoryTokens::default());
        let store = SessionStore::new(
            api.clone(),
            navigator.clone(),
            notifier.clone(),
            tokens.clone(),
            ClientConfig::with_api_base_url("/api"),
        );
        Self { store, api, navigator, notifier, tokens }
    }

    pub fn visits(&self) -> Vec<String> {
        self.navigator.visits.borrow().clone()
    }

    pub fn last_notification(&self) -> Option<Notification> {
        self.notifier.shown.borrow().last().cloned()
    }
}
