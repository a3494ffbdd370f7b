//! Tabbed code snippet viewer with copy-to-clipboard.

use leptos::prelude::*;

use crate::data::projects::CodeSnippet;

/// How long the copy confirmation stays visible.
#[cfg(feature = "hydrate")]
const COPY_RESET_MS: u64 = 1500;

/// Snippet tabs for a project detail page. Copying goes through the async
/// clipboard API and flips the button label briefly on success.
#[component]
pub fn CodeViewer(snippets: Vec<CodeSnippet>) -> impl IntoView {
    let active = RwSignal::new(0usize);
    let copied = RwSignal::new(false);

    let on_copy = {
        #[cfg(feature = "hydrate")]
        {
            let codes: Vec<String> = snippets.iter().map(|s| s.code.clone()).collect();
            let copy_seq = RwSignal::new(0u32);
            move |_ev: leptos::ev::MouseEvent| {
                let Some(code) = codes.get(active.get_untracked()).cloned() else {
                    return;
                };
                let Some(window) = web_sys::window() else {
                    return;
                };
                let clipboard = window.navigator().clipboard();
                let seq = copy_seq.get_untracked() + 1;
                copy_seq.set(seq);
                leptos::task::spawn_local(async move {
                    let write = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&code));
                    if write.await.is_ok() {
                        copied.set(true);
                        gloo_timers::future::sleep(std::time::Duration::from_millis(
                            COPY_RESET_MS,
                        ))
                        .await;
                        // A newer copy owns the label now; leave it alone.
                        if copy_seq.get_untracked() == seq {
                            copied.set(false);
                        }
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    view! {
        <div class="code-viewer">
            <div class="code-viewer__tabs">
                {snippets
                    .iter()
                    .enumerate()
                    .map(|(i, snippet)| {
                        let title = snippet.title.clone();
                        view! {
                            <button
                                class="code-viewer__tab"
                                class:code-viewer__tab--active=move || active.get() == i
                                on:click=move |_| active.set(i)
                            >
                                {title}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
                <button class="code-viewer__copy" aria-label="Copy snippet" on:click=on_copy>
                    {move || if copied.get() { "Copied!" } else { "Copy" }}
                </button>
            </div>

            {snippets
                .iter()
                .enumerate()
                .map(|(i, snippet)| {
                    let pre_class = format!("code-viewer__pre language-{}", snippet.language);
                    let language = snippet.language.clone();
                    let code = snippet.code.clone();
                    view! {
                        <div
                            class="code-viewer__panel"
                            class:code-viewer__panel--active=move || active.get() == i
                        >
                            <span class="code-viewer__language">{language}</span>
                            <pre class=pre_class>
                                <code>{code}</code>
                            </pre>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
