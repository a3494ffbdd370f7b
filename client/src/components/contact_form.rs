//! Contact form posting to the email endpoint.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;

/// Delivery status shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SendState {
    Idle,
    Sending,
    Sent,
    Failed,
}

/// All four fields are required; whitespace-only entries do not count.
fn form_is_complete(name: &str, email: &str, subject: &str, message: &str) -> bool {
    !name.trim().is_empty()
        && !email.trim().is_empty()
        && !subject.trim().is_empty()
        && !message.trim().is_empty()
}

/// The contact section's form. Failures surface as a single flat notice;
/// field-level errors are left to the browser's built-in validation.
#[component]
pub fn ContactForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let state = RwSignal::new(SendState::Idle);

    let can_send = move || {
        state.get() != SendState::Sending
            && form_is_complete(&name.get(), &email.get(), &subject.get(), &message.get())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked() == SendState::Sending {
            return;
        }
        let draft_name = name.get_untracked();
        let draft_email = email.get_untracked();
        let draft_subject = subject.get_untracked();
        let draft_message = message.get_untracked();
        if !form_is_complete(&draft_name, &draft_email, &draft_subject, &draft_message) {
            return;
        }
        state.set(SendState::Sending);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let sent = crate::net::api::post_contact(
                    &draft_name,
                    &draft_email,
                    &draft_subject,
                    &draft_message,
                )
                .await;
                match sent {
                    Ok(()) => {
                        state.set(SendState::Sent);
                        name.set(String::new());
                        email.set(String::new());
                        subject.set(String::new());
                        message.set(String::new());
                    }
                    Err(err) => {
                        log::warn!("contact request failed: {err:?}");
                        state.set(SendState::Failed);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft_name, draft_email, draft_subject, draft_message);
        }
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="contact-form__row">
                <label class="contact-form__field">
                    <span>"Name"</span>
                    <input
                        type="text"
                        required
                        autocomplete="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="contact-form__field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        required
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <label class="contact-form__field">
                <span>"Subject"</span>
                <input
                    type="text"
                    required
                    prop:value=move || subject.get()
                    on:input=move |ev| subject.set(event_target_value(&ev))
                />
            </label>

            <label class="contact-form__field">
                <span>"Message"</span>
                <textarea
                    rows="5"
                    required
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </label>

            <div class="contact-form__actions">
                <button type="submit" class="btn btn--primary" disabled=move || !can_send()>
                    {move || if state.get() == SendState::Sending { "Sending..." } else { "Send message" }}
                </button>
            </div>

            {move || match state.get() {
                SendState::Sent => {
                    Some(
                        view! {
                            <p class="contact-form__notice contact-form__notice--ok">
                                "Thanks! Your message is on its way."
                            </p>
                        }
                            .into_any(),
                    )
                }
                SendState::Failed => {
                    Some(
                        view! {
                            <p class="contact-form__notice contact-form__notice--error">
                                "Something went wrong sending your message. Please try again or email me directly."
                            </p>
                        }
                            .into_any(),
                    )
                }
                SendState::Idle | SendState::Sending => None,
            }}
        </form>
    }
}
