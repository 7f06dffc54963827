#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navigation::NavBar;

mod sections;

mod scroll;
mod view_state;

mod home;
use home::Portfolio;

mod projects;
use projects::ProjectIndex;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Portfolio {},
        #[route("/projects")]
        ProjectIndex {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::PORTFOLIO_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
