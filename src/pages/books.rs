//! Books section of the dashboard.

use leptos::prelude::*;

#[component]
pub fn BooksPage() -> impl IntoView {
    view! {
        <section class="books">
            <header class="books__header">
                <h1>"Books"</h1>
            </header>
            <p class="books__empty">"No books yet."</p>
        </section>
    }
}
