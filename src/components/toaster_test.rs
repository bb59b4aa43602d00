#[cfg(feature = "ssr")]
mod render {
    use super::super::*;
    use crate::state::notifications::Notification;

    #[test]
    fn toasts_render_tone_color_and_title() {
        let html = Owner::new().with(|| {
            let toasts = RwSignal::new(NotificationsState::default());
            toasts.update(|s| {
                s.push(Notification::success("Logged in successfully"));
                s.push(Notification::error("Invalid email or password"));
            });
            provide_context(toasts);
            view! { <Toaster/> }.to_html()
        });

        assert!(html.contains(r#"data-color="green""#), "{html}");
        assert!(html.contains(r#"data-color="red""#), "{html}");
        assert!(html.contains("Invalid email or password"), "{html}");
        assert_eq!(html.matches("toast__title").count(), 2, "{html}");
    }
}
