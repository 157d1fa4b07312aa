//! Details view for the focused carousel card.
//!
//! Owned by the carousel: opening pauses auto-play, and `on_close`
//! (close button, overlay click, or Escape) hands control back so the
//! carousel can resume.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::carousel::CardContent;
use crate::components::share_button::ShareButton;

#[derive(Properties, PartialEq)]
pub struct CardModalProps {
    pub card: CardContent,
    pub on_close: Callback<()>,
}

#[function_component(CardModal)]
pub fn card_modal(props: &CardModalProps) -> Html {
    // Escape closes the modal for as long as it is mounted.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(document) =
                    web_sys::window().and_then(|w| w.document())
                {
                    let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            on_close.emit(());
                        }
                    });
                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                            let _ = doc.remove_event_listener_with_callback(
                                "keydown",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
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
        <div class="card-modal modal-active" onclick={on_overlay_click} aria-hidden="false">
            <div class="card-modal-content" onclick={swallow}>
                <button class="close-btn" onclick={on_close_click} aria-label="Close details">{"×"}</button>
                <img src={props.card.image_url.clone()} alt={props.card.title.clone()} />
                <span class="category-tag">{&props.card.category}</span>
                <h2>{&props.card.title}</h2>
                <p class="card-modal-desc">{&props.card.long_description}</p>
                <ul class="card-modal-features">
                    {
                        props.card.features.iter().map(|feature| html! {
                            <li>{feature}</li>
                        }).collect::<Html>()
                    }
                </ul>
                <div class="card-modal-actions">
                    <a class="download-btn" href={props.card.download_url.clone()} target="_blank" rel="noopener noreferrer">
                        {"Open in Serenia"}
                    </a>
                    <ShareButton />
                </div>
            </div>
        </div>
    }
}
