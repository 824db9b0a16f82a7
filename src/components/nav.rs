use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::motion::scroll::use_scrolled_away;
use crate::Route;

const SECTION_LINKS: [(&str, &str); 4] = [
    ("#how-it-works", "How It Works"),
    ("#lending", "Lending"),
    ("#features", "Features"),
    ("#faq", "FAQ"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled_away();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor navigation still happens, only the menu closes
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Landing} classes="nav-logo">
                    {"Aion"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then_some("mobile-menu-open"))}>
                    {
                        for SECTION_LINKS.iter().map(|(href, label)| html! {
                            <a href={*href} class="nav-link" onclick={close_menu.clone()}>
                                {*label}
                            </a>
                        })
                    }
                </div>
            </div>
        </nav>
    }
}
