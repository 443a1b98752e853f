use leptos::prelude::*;

use crate::server_fns::ApplyForBeta;

#[component]
pub fn BetaForm() -> impl IntoView {
    let apply_action = ServerAction::<ApplyForBeta>::new();

    view! {
        <section id="beta" class="lead-section">
            <div class="lead-card">
                <h2>"Become a Beta Tester"</h2>
                <p class="subtitle">"Help shape the future of deepfake detection. Get exclusive early access."</p>

                {move || {
                    if let Some(Ok(_)) = apply_action.value().get() {
                        return view! {
                            <div class="success-message">
                                <h3>"Application received"</h3>
                                <p>"We'll be in touch with early access details."</p>
                            </div>
                        }.into_any();
                    }

                    view! {
                        <ActionForm action=apply_action>
                            <div class="form-group">
                                <label for="beta-name">"Name"</label>
                                <input type="text" id="beta-name" name="name" required placeholder="Jane Smith"/>
                            </div>

                            <div class="form-group">
                                <label for="beta-email">"Email"</label>
                                <input type="email" id="beta-email" name="email" required placeholder="jane@company.com"/>
                            </div>

                            <div class="form-group">
                                <label for="company">"Company / Role"</label>
                                <input type="text" id="company" name="company" placeholder="Acme Corp, Product Manager"/>
                            </div>

                            <div class="form-group">
                                <label for="reason">"Why are you interested?"</label>
                                <textarea
                                    id="reason"
                                    name="reason"
                                    required
                                    minlength="20"
                                    rows="4"
                                    placeholder="Tell us about your use case..."
                                ></textarea>
                            </div>

                            {move || apply_action.value().get().and_then(Result::err).map(|e| {
                                view! { <p class="error">{super::error_text(&e)}</p> }
                            })}

                            <button type="submit" class="btn btn-primary" disabled=move || apply_action.pending().get()>
                                {move || if apply_action.pending().get() { "Submitting..." } else { "Apply for Beta Access" }}
                            </button>
                        </ActionForm>
                    }.into_any()
                }}
            </div>
        </section>
    }
}
