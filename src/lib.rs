use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod accordion;
pub mod config;
pub mod content;
pub mod error;
pub mod motion;
pub mod seo;

pub mod components {
    pub mod button;
    pub mod card_visual;
    pub mod comparison;
    pub mod faq;
    pub mod feature_card;
    pub mod footer;
    pub mod hero;
    pub mod icon;
    pub mod nav;
    pub mod reveal;
    pub mod step_card;
}

pub mod pages {
    pub mod deposit;
    pub mod landing;
}

use pages::{deposit::Deposit, landing::Landing};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/lend/deposit")]
    LendDeposit,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::LendDeposit => {
            info!("Rendering Deposit page");
            html! { <Deposit /> }
        }
        Route::NotFound => {
            info!("Unknown route, showing Landing page");
            html! { <Redirect<Route> to={Route::Landing} /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
