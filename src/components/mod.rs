mod beta_form;
mod footer;
mod nav;
mod scroll_video;
mod waitlist_form;

pub use beta_form::BetaForm;
pub use footer::Footer;
pub use nav::Navbar;
pub use scroll_video::ScrollVideo;
pub use waitlist_form::WaitlistForm;

use leptos::prelude::ServerFnError;

/// Text shown under a form when its server function fails.
fn error_text(e: &ServerFnError) -> String {
    match e {
        ServerFnError::ServerError(message) => message.clone(),
        _ => "Something went wrong. Please try again.".to_string(),
    }
}
