use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <ul>
                <li><a href="/">"Bill Form"</a></li>
                <li><a href="/result">"Latest Report"</a></li>
                <li><a href="/history">"History"</a></li>
            </ul>
        </nav>
    }
}
