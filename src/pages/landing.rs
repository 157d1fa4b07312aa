//! Landing page assembly: hero, moments carousel, mood orbit, demo
//! video, testimonials, and footer, plus the page-level listeners
//! (scroll reveal, mobile adjustments, video playback management).

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::carousel::{CardContent, Carousel};
use crate::components::mood_gallery::{MoodGallery, MOODS};
use crate::components::navbar::Navbar;
use crate::components::share_button::ShareButton;
use crate::components::signup_modal::SignupModal;
use crate::config;
use crate::video::controller as video_controller;

/// Fades in every `.reveal` element whose top edge has entered the
/// lower part of the viewport. Safe to call repeatedly.
fn reveal_on_scroll() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    if let Ok(nodes) = document.query_selector_all(".reveal") {
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else { continue };
            let Ok(element) = node.dyn_into::<HtmlElement>() else {
                continue;
            };
            let rect = element.get_bounding_client_rect();
            if rect.top() < height * config::REVEAL_VIEWPORT_FRACTION {
                let style = element.style();
                let _ = style.set_property("opacity", "1");
                let _ = style.set_property("transform", "none");
            }
        }
    }
}

/// Page-level mobile test. Inclusive: exactly 768px is treated as
/// mobile here, while the carousel tiers switch to desktop geometry at
/// that same width.
fn is_mobile_width(width: f64) -> bool {
    width <= config::MOBILE_BREAKPOINT
}

/// Phone-width housekeeping: an `is-mobile` class for CSS targeting and
/// a horizontal scroll lock.
fn apply_mobile_adjustments() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let mobile = is_mobile_width(width);
    let _ = if mobile {
        body.class_list().add_1("is-mobile")
    } else {
        body.class_list().remove_1("is-mobile")
    };
    let overflow = if mobile { "hidden" } else { "" };
    let _ = body.style().set_property("overflow-x", overflow);
    if let Some(root) = document.document_element() {
        if let Ok(root) = root.dyn_into::<HtmlElement>() {
            let _ = root.style().set_property("overflow-x", overflow);
        }
    }
}

fn moment_cards() -> Vec<CardContent> {
    let card = |title: &str, image: &str, category: &str, desc: &str, features: &[&str]| {
        CardContent {
            title: title.to_string(),
            image_url: image.to_string(),
            category: category.to_string(),
            long_description: desc.to_string(),
            download_url: "https://serenia.app/get".to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    };
    vec![
        card(
            "Morning Breathing",
            "/assets/moments/breathing.webp",
            "EXERCISE",
            "Three minutes of guided breathing to set the tone for the day. \
             Paced animations, gentle haptics, and no account required.",
            &["Guided pacing", "Haptic cues", "Offline ready"],
        ),
        card(
            "Sleep Stories",
            "/assets/moments/sleep.webp",
            "AUDIO",
            "Slow-paced stories read in low light tones, fading out as you \
             drift off. New stories every week.",
            &["Auto fade-out", "Weekly additions", "Background play"],
        ),
        card(
            "Focus Sounds",
            "/assets/moments/focus.webp",
            "AUDIO",
            "Layered ambient soundscapes tuned for deep work sessions, with \
             a built-in break reminder.",
            &["Layer mixing", "Break reminders", "Timer presets"],
        ),
        card(
            "Mood Journal",
            "/assets/moments/journal.webp",
            "TRACKER",
            "A thirty-second daily check-in that learns your patterns and \
             surfaces them back to you gently.",
            &["Daily check-ins", "Pattern insights", "Private by default"],
        ),
        card(
            "Guided Meditation",
            "/assets/moments/meditation.webp",
            "SESSION",
            "Sessions from five to forty minutes across sleep, anxiety, \
             gratitude, and beginner tracks.",
            &["4 tracks", "5-40 minute sessions", "Progress streaks"],
        ),
        card(
            "Evening Wind-down",
            "/assets/moments/winddown.webp",
            "ROUTINE",
            "A short routine that dims the app, reviews your day, and eases \
             you toward rest.",
            &["Day review", "Dimmed UI", "Bedtime nudges"],
        ),
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let signup_open = use_state(|| false);
    let active_mood = use_state(|| None::<String>);

    // Scroll to top only on initial mount.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Page-level listeners: reveal-on-scroll plus mobile adjustments,
    // re-evaluated whenever the host scrolls or resizes.
    {
        use_effect_with_deps(
            move |_| {
                apply_mobile_adjustments();
                reveal_on_scroll();

                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let on_scroll = Closure::<dyn Fn()>::new(|| {
                        reveal_on_scroll();
                    });
                    let on_resize = Closure::<dyn Fn()>::new(|| {
                        apply_mobile_adjustments();
                        reveal_on_scroll();
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        on_resize.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                on_scroll.as_ref().unchecked_ref(),
                            );
                            let _ = win.remove_event_listener_with_callback(
                                "resize",
                                on_resize.as_ref().unchecked_ref(),
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

    // Video playback management, once the videos below are in the tree.
    {
        use_effect_with_deps(
            move |_| {
                video_controller::install();
                || ()
            },
            (),
        );
    }

    let open_signup = {
        let signup_open = signup_open.clone();
        Callback::from(move |_: ()| signup_open.set(true))
    };
    let close_signup = {
        let signup_open = signup_open.clone();
        Callback::from(move |_: ()| signup_open.set(false))
    };
    let close_gallery = {
        let active_mood = active_mood.clone();
        Callback::from(move |_: ()| active_mood.set(None))
    };

    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <div class="landing-page" id="top">
            <Navbar on_signup={open_signup.clone()} />

            <header class="hero">
                <div class="hero-content">
                    <h1 class="hero-title reveal">{"Meet yourself where you are"}</h1>
                    <p class="hero-subtitle reveal">
                        {"Serenia helps you notice, name, and care for how you feel — \
                          a few gentle minutes at a time."}
                    </p>
                    <button class="hero-cta open-modal" onclick={{
                        let open_signup = open_signup.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            open_signup.emit(());
                        })
                    }}>{"Get the app"}</button>
                </div>
            </header>

            <section class="carousel-wrap" id="moments">
                <h2 class="section-title reveal">{"Moments for every day"}</h2>
                <p class="section-sub">{"Tap the centered card to see what's inside."}</p>
                <Carousel cards={moment_cards()} />
            </section>

            <section class="mood-orbit" id="moods">
                <h2 class="section-title reveal">{"How do you feel right now?"}</h2>
                <div class="orbit-ring">
                    {
                        MOODS.iter().map(|mood| {
                            let onclick = {
                                let active_mood = active_mood.clone();
                                let mood = mood.to_string();
                                Callback::from(move |_: MouseEvent| {
                                    active_mood.set(Some(mood.clone()));
                                })
                            };
                            html! {
                                <button class="orbiting-mood" data-mood={*mood} {onclick}>
                                    {*mood}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="demo-section">
                <h2 class="section-title reveal">{"See a check-in"}</h2>
                <div class="demo-video-frame">
                    <video class="demo-video" src="/assets/serenia-checkin.mp4" playsinline=true loop=true muted=true></video>
                    <button class="mute-button" aria-label="Toggle sound">{"🔊"}</button>
                </div>
            </section>

            <section class="steps-section" id="stories">
                <h2 class="section-title reveal">{"Three small steps"}</h2>
                <div class="steps-grid">
                    <div class="step-item reveal">
                        <h3>{"Check in"}</h3>
                        <p>{"Thirty seconds, once a day. No streaks guilt, no noise."}</p>
                    </div>
                    <div class="step-item reveal">
                        <h3>{"Get a moment"}</h3>
                        <p>{"Serenia suggests one small practice that fits your mood."}</p>
                    </div>
                    <div class="step-item reveal">
                        <h3>{"Notice the shift"}</h3>
                        <p>{"Your journal quietly shows how the small things add up."}</p>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="footer-content">
                    <h2>{"Ready for a calmer pocket?"}</h2>
                    <ShareButton />
                    <p class="footer-year">{format!("© {year} Serenia")}</p>
                </div>
            </footer>

            <SignupModal open={*signup_open} on_close={close_signup} />
            if let Some(mood) = (*active_mood).clone() {
                <MoodGallery {mood} on_close={close_gallery} />
            }

            <style>
                {r#"
    .landing-page {
        position: relative;
        min-height: 100vh;
        color: var(--text, #f4f1ea);
        font-family: system-ui, -apple-system, sans-serif;
        margin: 0 auto;
        width: 100%;
        overflow-x: hidden;
        box-sizing: border-box;
    }
    [data-theme="light"] .landing-page {
        --text: #2b2b33;
        background: #faf7f2;
    }
    [data-theme="dark"] .landing-page {
        --text: #f4f1ea;
        background: #191922;
    }
    .hero {
        min-height: 80vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
        padding: 6rem 2rem 3rem;
    }
    .hero-title {
        font-size: 3rem;
        max-width: 640px;
        margin: 0 auto 1rem;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        max-width: 520px;
        margin: 0 auto 2.5rem;
        line-height: 1.7;
        opacity: 0.8;
    }
    .reveal {
        opacity: 0;
        transform: translateY(24px);
        transition: opacity 0.7s ease, transform 0.7s ease;
    }
    .carousel-wrap {
        padding: 4rem 0 6rem;
        text-align: center;
    }
    .carousel-section {
        position: relative;
        height: 420px;
    }
    .carousel-stage {
        position: relative;
        height: 100%;
    }
    .card {
        width: 230px;
        border-radius: 18px;
        background: rgba(255, 255, 255, 0.06);
        padding: 1rem;
        cursor: pointer;
    }
    .card img {
        width: 100%;
        border-radius: 12px;
    }
    .carousel-arrow {
        position: absolute;
        top: 45%;
        font-size: 2rem;
        background: none;
        border: none;
        color: inherit;
        cursor: pointer;
        z-index: 120;
    }
    .carousel-arrow.prev { left: 6%; }
    .carousel-arrow.next { right: 6%; }
    .indicators {
        display: flex;
        justify-content: center;
        gap: 0.5rem;
        margin-top: 1rem;
    }
    .dot {
        width: 9px;
        height: 9px;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.25);
        cursor: pointer;
    }
    .dot.active {
        background: #9fd8c5;
    }
    .mood-orbit, .demo-section, .steps-section {
        padding: 4rem 2rem;
        text-align: center;
    }
    .orbit-ring {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1rem;
        max-width: 640px;
        margin: 2rem auto 0;
    }
    .orbiting-mood {
        padding: 0.7rem 1.4rem;
        border-radius: 999px;
        border: 1px solid rgba(159, 216, 197, 0.5);
        background: transparent;
        color: inherit;
        cursor: pointer;
    }
    .demo-video-frame {
        position: relative;
        max-width: 720px;
        margin: 2rem auto 0;
    }
    .demo-video {
        width: 100%;
        border-radius: 18px;
    }
    .mute-button {
        position: absolute;
        right: 1rem;
        bottom: 1rem;
        border: none;
        border-radius: 50%;
        width: 42px;
        height: 42px;
        cursor: pointer;
    }
    .steps-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
        max-width: 900px;
        margin: 3rem auto 0;
    }
    .modal-active {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.65);
        display: flex;
        align-items: center;
        justify-content: center;
        z-index: 500;
    }
    .card-modal-content, .signup-modal-content, .mood-gallery-content {
        background: #23232e;
        border-radius: 18px;
        padding: 2rem;
        max-width: 520px;
        width: 90%;
        position: relative;
    }
    .close-btn, .close-modal, .close-gallery {
        position: absolute;
        top: 0.8rem;
        right: 1rem;
        background: none;
        border: none;
        color: inherit;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .gallery-content {
        display: flex;
        gap: 1rem;
        margin-top: 1.5rem;
    }
    .footer {
        padding: 5rem 2rem;
        text-align: center;
        border-top: 1px solid rgba(255, 255, 255, 0.08);
    }
    @media (max-width: 768px) {
        .hero-title { font-size: 2rem; }
        .steps-grid { grid-template-columns: 1fr; }
        .carousel-section { height: 360px; }
    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::layout::BreakpointTier;

    #[test]
    fn mobile_boundary_is_inclusive_at_page_level() {
        assert!(is_mobile_width(768.0));
        assert!(is_mobile_width(320.0));
        assert!(!is_mobile_width(768.1));
        // The carousel geometry flips to desktop at the same width.
        assert_eq!(BreakpointTier::from_width(768.0), BreakpointTier::Desktop);
    }
}
