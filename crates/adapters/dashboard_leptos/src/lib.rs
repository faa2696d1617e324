use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod components;
pub mod config;
pub mod logging;
mod notify;
mod pages;
mod storage;
mod wiring;

use components::Nav;
use config::ClientConfig;
use pages::{History, Home, NotFound, Report};

/// Root application component.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("result") view=Report/>
                    <Route path=path!("history") view=History/>
                </Routes>
            </main>
        </Router>
    }
}
