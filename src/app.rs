use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/clarify.css"/>
        <Title text="Clarify - Deepfake Detection for Everyone"/>
        <Meta name="description" content="Clarify detects deepfakes in video, audio, and images. Enterprise-grade AI detection built for everyday people."/>
        <Meta name="keywords" content="deepfake detection, AI authentication, media verification, synthetic media, clarify"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <h1>"404 - Page Not Found"</h1> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}
