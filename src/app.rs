//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::require_auth::RequireAuth;
use crate::components::toaster::Toaster;
use crate::config::DASHBOARD_PATH;
use crate::pages::{books::BooksPage, login::LoginPage, overview::OverviewPage, register::RegisterPage};
use crate::state::notifications::NotificationsState;
use crate::state::session::SessionProvider;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the toast queue, then the session (inside the router, which the
/// session needs for navigation), then the routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(NotificationsState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/student-portal.css"/>
        <Title text="Student Portal"/>

        <Router>
            <SessionProvider>
                <Toaster/>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <ParentRoute path=StaticSegment("dashboard") view=ProtectedDashboard>
                        <Route path=StaticSegment("") view=OverviewPage/>
                        <Route path=StaticSegment("books") view=BooksPage/>
                    </ParentRoute>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD_PATH/> }/>
                </Routes>
            </SessionProvider>
        </Router>
    }
}

/// Dashboard shell behind the auth guard.
#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardLayout/>
        </RequireAuth>
    }
}
