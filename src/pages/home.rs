use leptos::prelude::*;

use crate::components::{BetaForm, Footer, Navbar, ScrollVideo, WaitlistForm};

struct Feature {
    title: &'static str,
    description: &'static str,
}

static FEATURES: [Feature; 4] = [
    Feature {
        title: "Video Detection",
        description: "Analyze video content frame-by-frame to identify manipulated facial expressions, unnatural movements, and synthetic artifacts invisible to the human eye.",
    },
    Feature {
        title: "Audio Detection",
        description: "Detect AI-generated voice clones, spliced audio, and synthetic speech patterns that attempt to impersonate real people.",
    },
    Feature {
        title: "Image Detection",
        description: "Spot AI-generated and manipulated images by analyzing pixel-level inconsistencies, lighting anomalies, and generative model fingerprints.",
    },
    Feature {
        title: "Invisible Stamping",
        description: "Stamp photos and videos with cryptographic technology to create a database of verified media, proving authenticity at the source.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div id="top" class="home-page">
            <Navbar/>
            <ScrollVideo/>

            <section class="features">
                <div class="intro">
                    <div class="intro-copy">
                        <h3>"Deepfake detection," <br/> "for everyone."</h3>
                        <p>
                            "In a world where AI can generate fake videos, clone voices, and fabricate images in seconds, "
                            "knowing what's real matters more than ever. Clarify puts enterprise-grade detection "
                            "technology into the hands of everyday people."
                        </p>
                        <p>
                            "No technical expertise required. Simply download the Clarify app or browser extension to "
                            "receive instant deepfake alerts as you scroll through social media, browse the internet, "
                            "or receive calls."
                        </p>
                    </div>
                    <img class="intro-mockup" src="/images/clarify-mockup-full.png" alt="Clarify App Mockup" width="316" height="558"/>
                </div>

                <h2>"See What's Real"</h2>
                <p class="subtitle">
                    "Clarify gives everyday people the power to detect deepfakes across video, audio, and images, instantly and effortlessly."
                </p>

                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|f| view! {
                            <div class="feature">
                                <h4>{f.title}</h4>
                                <p>{f.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <WaitlistForm/>
            <BetaForm/>
            <Footer/>
        </div>
    }
}
