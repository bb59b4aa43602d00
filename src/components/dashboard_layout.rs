//! Dashboard shell: sidebar navigation, mobile drawer, header with the
//! student badge, and the nested route outlet.
//!
//! DESIGN
//! ======
//! The shell only renders for a signed-in student and renders nothing
//! otherwise. Access control lives upstream in `RequireAuth`; the shell does
//! not redirect on its own.
//!
//! `DashboardLayout` is the only part that touches the router. It hands the
//! current path and the outlet to `DashboardShell`.

#[cfg(test)]
#[path = "dashboard_layout_test.rs"]
mod dashboard_layout_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::net::types::Student;
use crate::state::session::use_session;
use crate::state::ui::UiState;

/// A sidebar navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAVIGATION: [NavItem; 2] = [
    NavItem { name: "Overview", href: "/dashboard" },
    NavItem { name: "Books", href: "/dashboard/books" },
];

/// Exact-match active state; `/dashboard` is not active on `/dashboard/books`.
pub fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href
}

pub fn nav_link_class(current_path: &str, href: &str) -> &'static str {
    if is_active(current_path, href) {
        "sidebar__link sidebar__link--active"
    } else {
        "sidebar__link"
    }
}

pub fn logout_label(logging_out: bool) -> &'static str {
    if logging_out { "Logging out..." } else { "Logout" }
}

/// Badge lines for the header: display name, then email.
pub fn user_badge(student: &Student) -> (String, String) {
    (student.full_name(), student.email.clone())
}

/// Drawer handlers. `close` is shared by the close button, the backdrop and
/// every drawer nav link.
#[derive(Clone, Copy)]
pub struct DrawerControls {
    pub open: Callback<()>,
    pub close: Callback<()>,
}

impl DrawerControls {
    pub fn new(ui: RwSignal<UiState>) -> Self {
        Self {
            open: Callback::new(move |()| ui.update(UiState::open_sidebar)),
            close: Callback::new(move |()| ui.update(UiState::close_sidebar)),
        }
    }
}

/// Route-level shell: binds the current location and the nested outlet.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let pathname = use_location().pathname;
    let ui = RwSignal::new(UiState::default());

    view! {
        <DashboardShell pathname=pathname ui=ui>
            <Outlet/>
        </DashboardShell>
    }
}

/// Shell chrome around `children`, for the student in `use_session`.
#[component]
pub fn DashboardShell(
    #[prop(into)] pathname: Signal<String>,
    ui: RwSignal<UiState>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    let drawer = DrawerControls::new(ui);

    let has_user = move || session.state.get().is_authenticated();
    let badge = move || session.state.get().user.as_ref().map(user_badge).unwrap_or_default();

    view! {
        <Show when=has_user>
            <div class="dashboard">
                <Show when=move || ui.get().sidebar_open>
                    <div class="drawer" role="dialog" aria-modal="true">
                        <div class="drawer__backdrop" on:click=move |_| drawer.close.run(())></div>
                        <div class="drawer__panel">
                            <button type="button" class="drawer__close" on:click=move |_| drawer.close.run(())>
                                <span class="sr-only">"Close sidebar"</span>
                                "\u{2715}"
                            </button>
                            <Sidebar pathname=pathname on_navigate=drawer.close/>
                        </div>
                    </div>
                </Show>

                <div class="dashboard__sidebar">
                    <Sidebar pathname=pathname/>
                </div>

                <div class="dashboard__body">
                    <header class="dashboard__header">
                        <button type="button" class="dashboard__menu" on:click=move |_| drawer.open.run(())>
                            <span class="sr-only">"Open sidebar"</span>
                            "\u{2630}"
                        </button>
                        <span class="dashboard__spacer"></span>
                        <div class="user-badge">
                            <span class="user-badge__avatar" aria-hidden="true"></span>
                            <span class="user-badge__text">
                                <span class="user-badge__name">{move || badge().0}</span>
                                <span class="user-badge__email">{move || badge().1}</span>
                            </span>
                        </div>
                    </header>

                    <main class="dashboard__main">{children()}</main>
                </div>
            </div>
        </Show>
    }
}

/// Navigation list plus the logout button, shared by the drawer and the
/// static desktop sidebar.
#[component]
fn Sidebar(pathname: Signal<String>, #[prop(optional)] on_navigate: Option<Callback<()>>) -> impl IntoView {
    let session = use_session();
    let logging_out = move || session.state.get().logging_out;

    view! {
        <nav class="sidebar">
            <ul role="list" class="sidebar__links">
                {NAVIGATION
                    .iter()
                    .map(|item| {
                        let href = item.href;
                        view! {
                            <li>
                                <a
                                    href=href
                                    class=move || nav_link_class(&pathname.get(), href)
                                    on:click=move |_| {
                                        if let Some(cb) = on_navigate {
                                            cb.run(());
                                        }
                                    }
                                >
                                    {item.name}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <button
                type="button"
                class="btn btn--danger sidebar__logout"
                class:btn--loading=logging_out
                disabled=logging_out
                on:click=move |_| session.logout()
            >
                {move || logout_label(logging_out())}
            </button>
        </nav>
    }
}
