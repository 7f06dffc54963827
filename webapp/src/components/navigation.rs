use dioxus::prelude::*;
use dioxus_router::prelude::*;

use content::{SectionId, profile};

use crate::Route;
use crate::common::dom;
use crate::components::icons::{CloseIcon, MenuIcon, MoonIcon, SunIcon};
use crate::components::mobile_menu::MobileMenu;
use crate::view_state::{ViewState, use_view_state};

#[derive(Clone, PartialEq, Props)]
struct NavLinkProps {
    section: SectionId,
}

// desktop navigation entry; highlighted while its section is the active one
#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let section = props.section;
    let state = use_view_state();

    rsx! {
        a {
            class: if (state.active_section)() == section { "nav-link active" } else { "nav-link" },
            href: "#{section.anchor()}",
            "{section.label()}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let state = use_view_state();

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                div { class: "logo",
                    a { href: "#home",
                        span { class: "logo-text", "{profile::NAME}" }
                    }
                }

                nav { class: "nav-links",
                    for section in SectionId::all() {
                        NavLink { section }
                    }
                }

                div { class: "nav-actions",
                    button {
                        class: "btn btn-icon",
                        aria_label: "Toggle theme",
                        onclick: move |_| state.toggle_theme(),
                        if (state.theme)().is_dark() {
                            SunIcon {}
                        } else {
                            MoonIcon {}
                        }
                    }

                    button {
                        class: "btn btn-icon menu-button",
                        aria_label: "Toggle menu",
                        onclick: move |_| state.toggle_menu(),
                        if (state.menu_open)() {
                            CloseIcon {}
                        } else {
                            MenuIcon {}
                        }
                    }

                    a { class: "btn btn-primary contact-cta", href: "#contact", "Contact" }
                }
            }
        }
    }
}

// root layout: owns the page-level view state, keeps the document root in
// sync with the theme flag, and hosts the mobile menu overlay above the
// routed page content
#[component]
pub fn NavBar() -> Element {
    let state = ViewState::provide();

    use_effect(move || dom::apply_theme((state.theme)()));

    rsx! {
        NavBarInner {}
        MobileMenu {}
        Outlet::<Route> {}
    }
}
