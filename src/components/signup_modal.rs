//! Signup dialog: overlay click or the close button dismisses it, and
//! body scroll is locked while it is open.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SignupModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let value = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", value);
    }
}

#[function_component(SignupModal)]
pub fn signup_modal(props: &SignupModalProps) -> Html {
    {
        let open = props.open;
        use_effect_with_deps(
            move |_| {
                set_body_scroll_locked(open);
                || ()
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="signup-modal modal-active" onclick={on_overlay_click}>
            <div class="signup-modal-content" onclick={swallow}>
                <button class="close-modal" onclick={on_close_click} aria-label="Close signup">{"×"}</button>
                <h2>{"Start your journey"}</h2>
                <p>{"Serenia is free to try. Download the app and check in with yourself today."}</p>
                <div class="store-buttons">
                    <a class="store-btn" href="https://apps.apple.com/app/serenia" target="_blank" rel="noopener noreferrer">
                        {"App Store"}
                    </a>
                    <a class="store-btn" href="https://play.google.com/store/apps/details?id=app.serenia" target="_blank" rel="noopener noreferrer">
                        {"Google Play"}
                    </a>
                </div>
            </div>
        </div>
    }
}
