use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod actions;
mod config;
mod counter;
mod dom;
mod nav;
mod notification;
mod voices;
mod components {
    pub mod cta;
    pub mod nav;
    pub mod notification;
    pub mod reveal;
    pub mod stat_counter;
    pub mod voice_card;
}
mod pages {
    pub mod landing;
}

use actions::ActionRegistry;
use components::{nav::Nav, notification::NotificationProvider};
use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    // Buttons resolve their behaviour here instead of by their label text.
    let registry = use_memo(|_| ActionRegistry::standard(config::app_url()), ());

    html! {
        <ContextProvider<Rc<ActionRegistry>> context={registry}>
            <NotificationProvider>
                <BrowserRouter>
                    <Nav />
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </NotificationProvider>
        </ContextProvider<Rc<ActionRegistry>>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting EchoVerse site");
    yew::Renderer::<App>::new().render();
}
