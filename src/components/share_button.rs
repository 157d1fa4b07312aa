//! Copy-page-link button with transient "Link Copied!" feedback.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew::prelude::*;

use crate::config;

#[function_component(ShareButton)]
pub fn share_button() -> Html {
    let label = use_state(|| "Share".to_string());
    // A newer copy supersedes the pending revert of an older one.
    let epoch = use_mut_ref(|| 0u32);

    let onclick = {
        let label = label.clone();
        let epoch = epoch.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Ok(href) = window.location().href() else {
                return;
            };
            let clipboard = window.navigator().clipboard();
            let label = label.clone();
            let epoch = epoch.clone();
            spawn_local(async move {
                // Failure is silent; the confirmation just never shows.
                if JsFuture::from(clipboard.write_text(&href)).await.is_ok() {
                    *epoch.borrow_mut() += 1;
                    let current = *epoch.borrow();
                    label.set("Link Copied!".to_string());
                    TimeoutFuture::new(config::COPY_FEEDBACK_MS).await;
                    if *epoch.borrow() == current {
                        label.set("Share".to_string());
                    }
                }
            });
        })
    };

    html! {
        <button class="share-btn" {onclick}>
            <span>{&*label}</span>
        </button>
    }
}
