//! DOM driver for the playback policy.
//!
//! Discovers every `<video>` on the page once, then keeps each element's
//! playback state in line with viewport membership, tab visibility, and
//! the user's sound preference. Listener closures are handed to the
//! browser for the lifetime of the page, so nothing here needs explicit
//! teardown.

use std::cell::RefCell;
use std::rc::Rc;

use log::{error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlVideoElement};

use crate::storage;
use crate::video::{
    checkpoint_key, initial_attempt_result, should_retry_on_interaction, toggle_sound,
    visibility_decision, PlaybackAction, PlaybackFlags, PlaybackState,
};

struct MediaEntry {
    element: HtmlVideoElement,
    state: PlaybackState,
    flags: PlaybackFlags,
    checkpoint_key: String,
}

type Entries = Rc<RefCell<Vec<MediaEntry>>>;

/// Wires up playback management for every video currently in the
/// document. A page without videos is simply inert.
pub fn install() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let entries = discover(&document);
    if entries.borrow().is_empty() {
        return;
    }

    let count = entries.borrow().len();
    gloo_console::log!(format!("managing playback for {count} videos"));
    for index in 0..count {
        attach_element_listeners(&entries, index);
        entries.borrow_mut()[index].flags.muted_by_policy = true;
        attempt_play(&entries, index, false);
    }

    // Scroll and resize both move elements relative to the viewport.
    for event in ["scroll", "resize"] {
        let entries = entries.clone();
        let on_move = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            sweep(&entries);
        }));
        let _ = window.add_event_listener_with_callback(event, on_move.as_ref().unchecked_ref());
        on_move.forget();
    }

    {
        let entries = entries.clone();
        let doc = document.clone();
        let on_visibility = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            if doc.hidden() {
                pause_all(&entries);
            } else {
                sweep(&entries);
            }
        }));
        let _ = document
            .add_event_listener_with_callback("visibilitychange", on_visibility.as_ref().unchecked_ref());
        on_visibility.forget();
    }

    // Any click counts as the gesture that unlocks deferred autoplay.
    {
        let entries = entries.clone();
        let on_click = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            retry_awaiting(&entries);
        }));
        let _ = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    sweep(&entries);
}

fn discover(document: &Document) -> Entries {
    let mut found = Vec::new();
    if let Ok(nodes) = document.query_selector_all("video") {
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else { continue };
            let Ok(element) = node.dyn_into::<HtmlVideoElement>() else {
                continue;
            };
            let source = element.current_src();
            let source = if source.is_empty() {
                element.get_attribute("src").unwrap_or_default()
            } else {
                source
            };
            found.push(MediaEntry {
                checkpoint_key: checkpoint_key(&source),
                element,
                state: PlaybackState::Idle,
                flags: PlaybackFlags::default(),
            });
        }
    }
    Rc::new(RefCell::new(found))
}

fn attach_element_listeners(entries: &Entries, index: usize) {
    let element = entries.borrow()[index].element.clone();

    // Continuous checkpoint while playing; a reload could resume from it.
    {
        let entries = entries.clone();
        let on_timeupdate = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let (element, key) = {
                let entries = entries.borrow();
                (
                    entries[index].element.clone(),
                    entries[index].checkpoint_key.clone(),
                )
            };
            storage::set(&key, &format!("{:.3}", element.current_time()));
        }));
        let _ = element
            .add_event_listener_with_callback("timeupdate", on_timeupdate.as_ref().unchecked_ref());
        on_timeupdate.forget();
    }

    // Media errors are outside our control; report and move on.
    {
        let entries = entries.clone();
        let on_error = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let key = entries.borrow()[index].checkpoint_key.clone();
            error!("media element failed ({key})");
        }));
        let _ = element.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
        on_error.forget();
    }

    // Clicking the video toggles sound once it is actually playable;
    // before that, the generic click handler promotes it instead.
    {
        let entries = entries.clone();
        let on_click = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let state = entries.borrow()[index].state;
            if state != PlaybackState::AwaitingInteraction && state != PlaybackState::Idle {
                toggle_entry(&entries, index);
            }
        }));
        let _ = element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    // Optional dedicated mute button next to the video.
    if let Some(parent) = element.parent_element() {
        if let Ok(Some(button)) = parent.query_selector(".mute-button, [data-mute-video]") {
            let entries = entries.clone();
            let on_click = Closure::<dyn FnMut()>::wrap(Box::new(move || {
                toggle_entry(&entries, index);
            }));
            let _ =
                button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
            on_click.forget();
        }
    }
}

/// Starts playback with the requested mute setting; the state lands once
/// the play promise settles. Rejections demote to `AwaitingInteraction`.
fn attempt_play(entries: &Entries, index: usize, with_sound: bool) {
    let element = entries.borrow()[index].element.clone();
    element.set_muted(!with_sound);

    let promise = match element.play() {
        Ok(promise) => promise,
        Err(err) => {
            warn!("play() call failed: {err:?}");
            entries.borrow_mut()[index].state = PlaybackState::AwaitingInteraction;
            return;
        }
    };

    let entries = entries.clone();
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => {
                entries.borrow_mut()[index].state = if with_sound {
                    PlaybackState::PlayingWithSound
                } else {
                    PlaybackState::PlayingMuted
                };
            }
            Err(err) => {
                warn!("playback rejected by the browser: {err:?}");
                entries.borrow_mut()[index].state = initial_attempt_result(false);
            }
        }
    });
}

/// Re-evaluates every entry against the current viewport.
fn sweep(entries: &Entries) {
    let count = entries.borrow().len();
    for index in 0..count {
        let (element, state, flags) = {
            let entries = entries.borrow();
            let entry = &entries[index];
            (entry.element.clone(), entry.state, entry.flags)
        };

        let in_view = fully_in_viewport(&element);
        let (action, next) = visibility_decision(state, flags, in_view);
        match action {
            PlaybackAction::Pause => {
                let _ = element.pause();
                entries.borrow_mut()[index].state = next;
            }
            PlaybackAction::PlayMuted => {
                entries.borrow_mut()[index].flags.muted_by_policy = true;
                attempt_play(entries, index, false);
            }
            PlaybackAction::PlayWithSound => {
                entries.borrow_mut()[index].flags.muted_by_policy = false;
                attempt_play(entries, index, true);
            }
            PlaybackAction::None => {}
        }
    }
}

/// Tab hidden: everything pauses, mute flags untouched.
fn pause_all(entries: &Entries) {
    let count = entries.borrow().len();
    for index in 0..count {
        let element = entries.borrow()[index].element.clone();
        let _ = element.pause();
        let mut entries = entries.borrow_mut();
        entries[index].state = crate::video::page_hidden_state(entries[index].state);
    }
}

/// Promotes entries whose autoplay was rejected, if they are on screen
/// at the moment of the gesture.
fn retry_awaiting(entries: &Entries) {
    let count = entries.borrow().len();
    for index in 0..count {
        let (element, state) = {
            let entries = entries.borrow();
            (entries[index].element.clone(), entries[index].state)
        };
        if should_retry_on_interaction(state, fully_in_viewport(&element)) {
            attempt_play(entries, index, false);
        }
    }
}

fn toggle_entry(entries: &Entries, index: usize) {
    let previous = entries.borrow()[index].flags;
    let flags = toggle_sound(previous);
    entries.borrow_mut()[index].flags = flags;
    if flags.user_unmuted && previous.muted_by_policy {
        log::info!("user overrode autoplay mute");
    }

    if flags.user_unmuted {
        attempt_play(entries, index, true);
    } else {
        let element = entries.borrow()[index].element.clone();
        element.set_muted(true);
        if !element.paused() {
            entries.borrow_mut()[index].state = PlaybackState::PlayingMuted;
        }
    }
}

/// Viewport membership: the element's bounding box lies entirely inside
/// the visible window area.
fn fully_in_viewport(element: &HtmlVideoElement) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let rect = element.get_bounding_client_rect();
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    rect.top() >= 0.0 && rect.left() >= 0.0 && rect.bottom() <= height && rect.right() <= width
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn install_wires_listeners_on_a_page_with_video() {
        let document = web_sys::window().unwrap().document().unwrap();
        let video = document.create_element("video").unwrap();
        video.set_attribute("src", "/assets/clip.mp4").unwrap();
        document.body().unwrap().append_child(&video).unwrap();

        install();

        // Both branches of the visibility handler must be callable.
        let event = web_sys::Event::new("visibilitychange").unwrap();
        document.dispatch_event(&event).unwrap();

        video.remove();
    }
}
