use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="site-footer">
            <div class="footer-brand">
                <img src="/images/clarify-logo-clean.png" alt="Clarify" width="28" height="28"/>
                <span>"Clarify"</span>
            </div>
            <p class="footer-note">{format!("© {year} Clarify. All rights reserved.")}</p>
        </footer>
    }
}
