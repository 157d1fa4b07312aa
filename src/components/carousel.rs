//! Card carousel component: arc layout, arrows, indicator dots, timed
//! auto-advance, and the focused-card details modal.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::carousel::layout::{compute_layout, CarouselTuning};
use crate::carousel::CarouselEngine;
use crate::components::card_modal::CardModal;
use crate::config;

/// Content behind one carousel card, handed to the details modal when
/// the focused card is activated.
#[derive(Clone, PartialEq)]
pub struct CardContent {
    pub title: String,
    pub image_url: String,
    pub category: String,
    pub long_description: String,
    pub download_url: String,
    pub features: Vec<String>,
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub cards: Vec<CardContent>,
    #[prop_or(config::DEFAULT_FOCUS_INDEX)]
    pub default_focus: usize,
}

type EngineRef = Rc<RefCell<CarouselEngine>>;
type IntervalRef = Rc<RefCell<Option<Interval>>>;

/// Installs `tick` on a fresh timer, cancelling whatever was running in
/// the slot. Overwriting the handle drops (and thereby clears) the old
/// `Interval`, so a double start can never double-tick.
fn restart_interval<F: FnMut() + 'static>(interval: &IntervalRef, millis: u32, tick: F) {
    *interval.borrow_mut() = Some(Interval::new(millis, tick));
}

fn start_auto_play(engine: &EngineRef, interval: &IntervalRef, focused: &UseStateHandle<usize>) {
    if engine.borrow().item_count() == 0 {
        return;
    }
    engine.borrow_mut().set_auto_play_active(true);
    let tick = {
        let engine = engine.clone();
        let focused = focused.clone();
        move || {
            let mut engine = engine.borrow_mut();
            engine.focus_next();
            focused.set(engine.focused_index());
        }
    };
    restart_interval(interval, config::AUTOPLAY_INTERVAL_MS, tick);
}

fn stop_auto_play(engine: &EngineRef, interval: &IntervalRef) {
    engine.borrow_mut().set_auto_play_active(false);
    *interval.borrow_mut() = None;
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0)
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let engine: EngineRef =
        use_mut_ref(|| CarouselEngine::new(props.cards.len(), props.default_focus));
    let interval: IntervalRef = use_mut_ref(|| None);
    let focused = use_state(|| engine.borrow().focused_index());
    let width = use_state(viewport_width);
    let open_card = use_state(|| None::<CardContent>);

    // Auto-play for the lifetime of the component.
    {
        let engine = engine.clone();
        let interval = interval.clone();
        let focused = focused.clone();
        use_effect_with_deps(
            move |_| {
                start_auto_play(&engine, &interval, &focused);
                move || {
                    stop_auto_play(&engine, &interval);
                }
            },
            (),
        );
    }

    // Re-layout (and rebuild the dots, idempotently) on resize.
    {
        let width = width.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let width = width.clone();
                        move || {
                            width.set(viewport_width());
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "resize",
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

    let on_previous = {
        let engine = engine.clone();
        let interval = interval.clone();
        let focused = focused.clone();
        Callback::from(move |_: MouseEvent| {
            stop_auto_play(&engine, &interval);
            {
                let mut engine = engine.borrow_mut();
                engine.focus_previous();
                focused.set(engine.focused_index());
            }
            start_auto_play(&engine, &interval, &focused);
        })
    };

    let on_next = {
        let engine = engine.clone();
        let interval = interval.clone();
        let focused = focused.clone();
        Callback::from(move |_: MouseEvent| {
            stop_auto_play(&engine, &interval);
            {
                let mut engine = engine.borrow_mut();
                engine.focus_next();
                focused.set(engine.focused_index());
            }
            start_auto_play(&engine, &interval, &focused);
        })
    };

    let focus_index = {
        let engine = engine.clone();
        let interval = interval.clone();
        let focused = focused.clone();
        Callback::from(move |index: usize| {
            stop_auto_play(&engine, &interval);
            {
                let mut engine = engine.borrow_mut();
                engine.focus_index(index);
                focused.set(engine.focused_index());
            }
            start_auto_play(&engine, &interval, &focused);
        })
    };

    // Focused card opens the details view; any other card takes focus.
    let on_card_click = {
        let engine = engine.clone();
        let interval = interval.clone();
        let open_card = open_card.clone();
        let focus_index = focus_index.clone();
        let cards = props.cards.clone();
        Callback::from(move |index: usize| {
            if engine.borrow().is_focused(index) {
                stop_auto_play(&engine, &interval);
                open_card.set(cards.get(index).cloned());
            } else {
                focus_index.emit(index);
            }
        })
    };

    let on_modal_close = {
        let engine = engine.clone();
        let interval = interval.clone();
        let focused = focused.clone();
        let open_card = open_card.clone();
        Callback::from(move |_: ()| {
            open_card.set(None);
            start_auto_play(&engine, &interval, &focused);
        })
    };

    let visuals = compute_layout(&engine.borrow(), *width, &CarouselTuning::default());

    html! {
        <div class="carousel-section">
            <div class="carousel-stage">
                {
                    props.cards.iter().zip(visuals.iter()).enumerate().map(|(i, (card, visual))| {
                        let onclick = {
                            let on_card_click = on_card_click.clone();
                            Callback::from(move |_: MouseEvent| on_card_click.emit(i))
                        };
                        html! {
                            <div
                                class={classes!("card", visual.focused.then_some("active"))}
                                style={visual.style_attr()}
                                {onclick}
                            >
                                <img src={card.image_url.clone()} alt={card.title.clone()} loading="lazy" />
                                <span class="category-tag">{&card.category}</span>
                                <h3 class="title">{&card.title}</h3>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
            <button class="carousel-arrow prev" onclick={on_previous} aria-label="Previous card">{"‹"}</button>
            <button class="carousel-arrow next" onclick={on_next} aria-label="Next card">{"›"}</button>
            <div class="indicators">
                {
                    (0..props.cards.len()).map(|i| {
                        let onclick = {
                            let focus_index = focus_index.clone();
                            Callback::from(move |_: MouseEvent| focus_index.emit(i))
                        };
                        html! {
                            <div
                                class={classes!("dot", (i == *focused).then_some("active"))}
                                {onclick}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
            if let Some(card) = (*open_card).clone() {
                <CardModal {card} on_close={on_modal_close} />
            }
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn double_start_leaves_exactly_one_timer() {
        let interval: IntervalRef = Rc::new(RefCell::new(None));
        let first_ticks = Rc::new(Cell::new(0u32));
        let second_ticks = Rc::new(Cell::new(0u32));

        restart_interval(&interval, 20, {
            let first_ticks = first_ticks.clone();
            move || first_ticks.set(first_ticks.get() + 1)
        });
        restart_interval(&interval, 20, {
            let second_ticks = second_ticks.clone();
            move || second_ticks.set(second_ticks.get() + 1)
        });

        gloo_timers::future::TimeoutFuture::new(120).await;
        *interval.borrow_mut() = None;

        // The first timer was cancelled by the restart and never fires.
        assert_eq!(first_ticks.get(), 0);
        assert!(second_ticks.get() >= 1);
    }
}
