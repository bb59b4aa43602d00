use super::*;
use crate::session::test_support::make_student;

#[test]
fn navigation_has_overview_then_books() {
    let hrefs: Vec<_> = NAVIGATION.iter().map(|n| n.href).collect();
    assert_eq!(hrefs, vec!["/dashboard", "/dashboard/books"]);
    assert_eq!(NAVIGATION[0].name, "Overview");
}

#[test]
fn active_link_requires_exact_path() {
    assert!(is_active("/dashboard", "/dashboard"));
    assert!(!is_active("/dashboard/books", "/dashboard"));
    assert!(is_active("/dashboard/books", "/dashboard/books"));
}

#[test]
fn nav_link_class_marks_active_item() {
    assert_eq!(nav_link_class("/dashboard/books", "/dashboard/books"), "sidebar__link sidebar__link--active");
    assert_eq!(nav_link_class("/dashboard/books", "/dashboard"), "sidebar__link");
}

#[test]
fn logout_label_reflects_loading() {
    assert_eq!(logout_label(false), "Logout");
    assert_eq!(logout_label(true), "Logging out...");
}

#[test]
fn user_badge_shows_name_and_email() {
    assert_eq!(
        user_badge(&make_student()),
        ("Ada Lovelace".to_owned(), "ada@example.com".to_owned())
    );
}

#[test]
fn drawer_controls_toggle_ui_state() {
    let owner = Owner::new();
    owner.with(|| {
        let ui = RwSignal::new(UiState::default());
        let drawer = DrawerControls::new(ui);

        drawer.open.run(());
        assert!(ui.get_untracked().sidebar_open);
        drawer.open.run(());
        assert!(ui.get_untracked().sidebar_open);
        drawer.close.run(());
        assert!(!ui.get_untracked().sidebar_open);
        drawer.close.run(());
        assert!(!ui.get_untracked().sidebar_open);
    });
}

#[cfg(feature = "ssr")]
mod render {
    use futures::executor::block_on;

    use super::*;
    use crate::session::test_support::{FakeApi, Fixture};
    use crate::state::session::SessionContext;

    fn render_shell(fixture: &Fixture, signed_in: bool, sidebar_open: bool) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = SessionContext::new(fixture.store.clone());
            provide_context(ctx);
            if signed_in {
                block_on(fixture.store.login("ada@example.com", "secret")).unwrap();
            }
            let ui = RwSignal::new(UiState { sidebar_open });
            view! {
                <DashboardShell pathname=Signal::derive(|| "/dashboard/books".to_owned()) ui=ui>
                    <p class="section">"Books section"</p>
                </DashboardShell>
            }
            .to_html()
        })
    }

    #[test]
    fn renders_nothing_without_user() {
        let fixture = Fixture::new(FakeApi::unauthenticated());
        let html = render_shell(&fixture, false, true);

        assert!(!html.contains("dashboard__body"), "{html}");
        assert!(!html.contains("user-badge"), "{html}");
        assert!(!html.contains("Books section"), "{html}");
        assert!(!html.contains("drawer"), "{html}");
    }

    #[test]
    fn signed_in_shell_shows_badge_nav_and_children() {
        let fixture = Fixture::new(FakeApi::default());
        let html = render_shell(&fixture, true, false);

        assert!(html.contains("Ada Lovelace"), "{html}");
        assert!(html.contains("ada@example.com"), "{html}");
        assert!(html.contains("Books section"), "{html}");
        assert_eq!(html.matches("sidebar__link--active").count(), 1, "{html}");
        assert!(html.contains(r#"href="/dashboard/books""#), "{html}");
        assert!(html.contains("Logout"), "{html}");
        assert!(!html.contains("drawer__backdrop"), "{html}");
    }

    #[test]
    fn open_drawer_renders_backdrop_and_second_sidebar() {
        let fixture = Fixture::new(FakeApi::default());
        let html = render_shell(&fixture, true, true);

        assert!(html.contains("drawer__backdrop"), "{html}");
        assert!(html.contains("Close sidebar"), "{html}");
        assert_eq!(html.matches(r#"class="sidebar""#).count(), 2, "{html}");
    }
}
