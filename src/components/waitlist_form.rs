use leptos::prelude::*;

use crate::server_fns::JoinWaitlist;

#[component]
pub fn WaitlistForm() -> impl IntoView {
    let join_action = ServerAction::<JoinWaitlist>::new();

    view! {
        <section id="waitlist" class="lead-section">
            <div class="lead-card">
                <h2>"Join the Waitlist"</h2>
                <p class="subtitle">"Be among the first to experience the future of media authenticity."</p>

                {move || {
                    if let Some(Ok(_)) = join_action.value().get() {
                        return view! {
                            <div class="success-message">
                                <h3>"You're on the list"</h3>
                                <p>"We'll notify you as soon as Clarify launches."</p>
                            </div>
                        }.into_any();
                    }

                    view! {
                        <ActionForm action=join_action>
                            <div class="form-group">
                                <label for="full_name">"Full Name"</label>
                                <input type="text" id="full_name" name="full_name" required placeholder="John Doe"/>
                            </div>

                            <div class="form-group">
                                <label for="wl-email">"Email"</label>
                                <input type="email" id="wl-email" name="email" required placeholder="john@example.com"/>
                            </div>

                            <div class="form-group">
                                <label for="phone">"Phone " <span class="hint">"(optional)"</span></label>
                                <input type="tel" id="phone" name="phone" placeholder="+1 (555) 000-0000"/>
                            </div>

                            {move || join_action.value().get().and_then(Result::err).map(|e| {
                                view! { <p class="error">{super::error_text(&e)}</p> }
                            })}

                            <button type="submit" class="btn btn-primary" disabled=move || join_action.pending().get()>
                                {move || if join_action.pending().get() { "Joining..." } else { "Join the Waitlist" }}
                            </button>
                        </ActionForm>
                    }.into_any()
                }}
            </div>
        </section>
    }
}
