//! Top navigation: logo, anchor links, hamburger drawer on phones, and
//! the theme switch.

use yew::prelude::*;

use crate::theme;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Fired by the "Get the app" button.
    pub on_signup: Callback<()>,
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

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let current_theme = use_state(theme::saved_theme);
    let menu_open = use_state(|| false);

    let on_theme_toggle = {
        let current_theme = current_theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme::opposite(&current_theme);
            theme::set_theme(next);
            current_theme.set(next.to_string());
        })
    };

    let on_hamburger = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            let open = !*menu_open;
            menu_open.set(open);
            set_body_scroll_locked(open);
        })
    };

    // Following a link always closes the drawer.
    let on_link = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            set_body_scroll_locked(false);
        })
    };

    let on_signup = {
        let on_signup = props.on_signup.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            set_body_scroll_locked(false);
            on_signup.emit(());
        })
    };

    html! {
        <nav class="navbar">
            <a class="nav-logo" href="#top">{"Serenia"}</a>
            <div class={classes!("nav-links", (*menu_open).then_some("active"))}>
                <a href="#moments" onclick={on_link.clone()}>{"Moments"}</a>
                <a href="#moods" onclick={on_link.clone()}>{"Moods"}</a>
                <a href="#stories" onclick={on_link.clone()}>{"Stories"}</a>
                <button class="nav-cta open-modal" onclick={on_signup}>{"Get the app"}</button>
            </div>
            <button
                id="theme-switch"
                class="theme-switch"
                onclick={on_theme_toggle}
                aria-label={theme::switch_label(&current_theme)}
            >
                { if *current_theme == theme::DARK { "☀" } else { "☾" } }
            </button>
            <button
                class={classes!("hamburger", (*menu_open).then_some("active"))}
                onclick={on_hamburger}
                aria-label="Toggle navigation"
            >
                <span></span><span></span><span></span>
            </button>
        </nav>
    }
}
