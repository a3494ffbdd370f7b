//! Floating chat widget: launcher button, conversation panel, composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! All widget behavior lives in [`WidgetCore`] (shared via context); this
//! component renders the current core snapshot and executes the side effects
//! the core requests: focusing the input, POSTing to the chat proxy, and the
//! deferred scroll to the contact section. Closing the panel hides the UI
//! only; an in-flight request keeps running and its reply still lands.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use leptos::prelude::*;

use crate::state::widget::{Role, WidgetAction, WidgetCore, WidgetPhase};
use crate::util::markdown::render_markdown;

/// One-tap openers shown before the conversation starts.
const SUGGESTED_PROMPTS: [&str; 3] = [
    "What projects has Tanvir built?",
    "Which technologies does he work with?",
    "How can I get in touch?",
];

/// Greeting shown in the empty panel.
const GREETING: &str = "Hi! I'm Tanvir's portfolio assistant. Ask me about his \
                        projects, his stack, or how to reach him.";

type InputRef = NodeRef<leptos::html::Textarea>;

/// Apply a reducer to the shared core, then execute whatever side effects it
/// asked for.
fn dispatch(
    core: RwSignal<WidgetCore>,
    input_ref: InputRef,
    reduce: impl FnOnce(&mut WidgetCore) -> Vec<WidgetAction>,
) {
    let actions = core.try_update(reduce).unwrap_or_default();
    run_actions(core, input_ref, actions);
}

/// Execute core-requested side effects. Network and timer effects only exist
/// in the browser build; during SSR the actions are dropped.
fn run_actions(core: RwSignal<WidgetCore>, input_ref: InputRef, actions: Vec<WidgetAction>) {
    for action in actions {
        match action {
            WidgetAction::FocusInput => {
                #[cfg(feature = "hydrate")]
                {
                    if let Some(el) = input_ref.get_untracked() {
                        let _ = el.focus();
                    }
                }
            }
            WidgetAction::SendChat { seq, message, history } => {
                #[cfg(feature = "hydrate")]
                {
                    leptos::task::spawn_local(async move {
                        let followups = match crate::net::api::post_chat(&message, history).await {
                            Ok(reply) => core
                                .try_update(|c| {
                                    c.response_ok(seq, reply.content, reply.should_redirect_to_contact)
                                })
                                .unwrap_or_default(),
                            Err(crate::net::api::ApiError::Status(status)) => core
                                .try_update(|c| c.response_http_error(seq, status))
                                .unwrap_or_default(),
                            Err(crate::net::api::ApiError::Network(err)) => {
                                log::warn!("chat request failed: {err}");
                                core.try_update(|c| c.response_network_error(seq))
                                    .unwrap_or_default()
                            }
                        };
                        run_actions(core, input_ref, followups);
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (core, input_ref, seq, message, history);
                }
            }
            WidgetAction::ScrollToContact { delay_ms } => {
                #[cfg(feature = "hydrate")]
                {
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                            delay_ms,
                        )))
                        .await;
                        crate::util::browser::scroll_to_contact();
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = delay_ms;
                }
            }
        }
    }
}

/// Label for the launcher's unread badge, `None` when nothing is unread.
fn unread_badge_label(unread: u32) -> Option<String> {
    if unread == 0 {
        None
    } else if unread > 9 {
        Some("9+".to_owned())
    } else {
        Some(unread.to_string())
    }
}

/// The floating chat widget, mounted once outside the router outlet so it
/// survives navigation.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let core = expect_context::<RwSignal<WidgetCore>>();

    let input_ref: InputRef = NodeRef::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view whenever the list or the placeholder
    // changes.
    Effect::new(move || {
        let state = core.get();
        let _ = state.messages.len();
        let _ = state.in_flight;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_toggle = move |_| dispatch(core, input_ref, WidgetCore::toggle_open);

    let do_submit = move || dispatch(core, input_ref, WidgetCore::submit);
    let on_send = move |_| do_submit();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_submit();
        }
    };

    let on_input = move |ev: leptos::ev::Event| {
        core.update(|c| c.set_input(event_target_value(&ev)));
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = input_ref.get_untracked() {
                crate::util::browser::autosize_textarea(&el);
            }
        }
    };

    // AI replies render markdown where contact links become buttons; the
    // click is caught here by delegation instead of per-button listeners.
    let on_messages_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok());
            let Some(target) = target else {
                return;
            };
            if let Ok(Some(_)) = target.closest("[data-action='contact']") {
                crate::util::browser::scroll_to_contact();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_request_clear = move |_| core.update(WidgetCore::request_clear);
    let on_confirm_clear = move |_| core.update(WidgetCore::confirm_clear);
    let on_cancel_clear = move |_| core.update(WidgetCore::cancel_clear);
    let on_dismiss_banner = move |_| core.update(WidgetCore::dismiss_banner);

    view! {
        <div class="chat-widget">
            <Show when=move || core.get().open>
                <div class="chat-widget__panel">
                    <header class="chat-widget__header">
                        <div class="chat-widget__identity">
                            <span class="chat-widget__title">"Portfolio assistant"</span>
                            <span class="chat-widget__subtitle">"Usually replies instantly"</span>
                        </div>
                        <div class="chat-widget__header-actions">
                            {move || {
                                core.get()
                                    .conversation_started
                                    .then(|| {
                                        view! {
                                            <button
                                                class="chat-widget__icon-btn"
                                                title="Clear conversation"
                                                aria-label="Clear conversation"
                                                on:click=on_request_clear
                                            >
                                                "↺"
                                            </button>
                                        }
                                    })
                            }}
                            <button
                                class="chat-widget__icon-btn"
                                title="Close chat"
                                aria-label="Close chat"
                                on:click=on_toggle
                            >
                                "✕"
                            </button>
                        </div>
                    </header>

                    {move || {
                        core.get()
                            .banner
                            .map(|text| {
                                view! {
                                    <div class="chat-widget__banner">
                                        <span>{text}</span>
                                        <button
                                            class="chat-widget__banner-dismiss"
                                            aria-label="Dismiss"
                                            on:click=on_dismiss_banner
                                        >
                                            "✕"
                                        </button>
                                    </div>
                                }
                            })
                    }}

                    <div class="chat-widget__messages" node_ref=messages_ref on:click=on_messages_click>
                        {move || {
                            let messages = core.get().messages;
                            if messages.is_empty() {
                                return view! {
                                    <div class="chat-widget__empty">
                                        <p class="chat-widget__greeting">{GREETING}</p>
                                        <div class="chat-widget__suggestions">
                                            {SUGGESTED_PROMPTS
                                                .into_iter()
                                                .map(|prompt| {
                                                    view! {
                                                        <button
                                                            class="chat-widget__suggestion"
                                                            on:click=move |_| {
                                                                core.update(|c| c.set_input(prompt.to_owned()));
                                                                dispatch(core, input_ref, WidgetCore::submit);
                                                            }
                                                        >
                                                            {prompt}
                                                        </button>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    </div>
                                }
                                    .into_any();
                            }

                            messages
                                .iter()
                                .map(|msg| {
                                    let is_ai = msg.role == Role::Ai;
                                    let body = if msg.is_typing {
                                        view! {
                                            <span class="chat-widget__typing" aria-label="Assistant is typing">
                                                <span></span>
                                                <span></span>
                                                <span></span>
                                            </span>
                                        }
                                            .into_any()
                                    } else if is_ai {
                                        let rendered = render_markdown(&msg.content);
                                        view! {
                                            <div class="chat-widget__markdown" inner_html=rendered></div>
                                        }
                                            .into_any()
                                    } else {
                                        view! { <span>{msg.content.clone()}</span> }.into_any()
                                    };

                                    view! {
                                        <div
                                            class="chat-widget__message"
                                            class:chat-widget__message--ai=is_ai
                                            class:chat-widget__message--user=!is_ai
                                        >
                                            {body}
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </div>

                    <Show when=move || core.get().phase() == WidgetPhase::ConfirmingClear>
                        <div class="chat-widget__confirm">
                            <p>"Clear the whole conversation?"</p>
                            <div class="chat-widget__confirm-actions">
                                <button class="btn btn--danger" on:click=on_confirm_clear>
                                    "Clear"
                                </button>
                                <button class="btn" on:click=on_cancel_clear>
                                    "Keep it"
                                </button>
                            </div>
                        </div>
                    </Show>

                    <div class="chat-widget__composer">
                        <textarea
                            class="chat-widget__input"
                            rows="1"
                            placeholder="Ask about Tanvir's work..."
                            node_ref=input_ref
                            disabled=move || core.get().in_flight
                            prop:value=move || core.get().input
                            on:input=on_input
                            on:keydown=on_keydown
                        ></textarea>
                        <button
                            class="btn btn--primary chat-widget__send"
                            aria-label="Send message"
                            on:click=on_send
                            disabled=move || !core.get().can_submit()
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            </Show>

            <button
                class="chat-widget__launcher"
                class:chat-widget__launcher--open=move || core.get().open
                aria-label="Toggle chat"
                on:click=on_toggle
            >
                {move || {
                    if core.get().open {
                        view! { <span class="chat-widget__launcher-icon">"✕"</span> }.into_any()
                    } else {
                        view! { <span class="chat-widget__launcher-icon">"💬"</span> }.into_any()
                    }
                }}
                {move || {
                    unread_badge_label(core.get().unread)
                        .map(|label| view! { <span class="chat-widget__badge">{label}</span> })
                }}
            </button>
        </div>
    }
}
