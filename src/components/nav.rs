use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="main-nav">
            <div class="nav-brand">
                <a href="#top">
                    <img src="/images/clarify-logo-clean.png" alt="Clarify" width="36" height="36"/>
                    <span>"Clarify"</span>
                </a>
            </div>

            <div class="nav-links">
                <a href="#beta" class="btn btn-small">"Beta Tester"</a>
                <a href="#waitlist" class="btn btn-small btn-primary">"Join Waitlist"</a>
            </div>
        </nav>
    }
}
