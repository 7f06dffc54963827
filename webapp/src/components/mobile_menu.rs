use dioxus::prelude::*;

use content::SectionId;

use crate::components::icons::ChevronRightIcon;
use crate::view_state::use_view_state;

// full-screen overlay below the fixed header.  activating any link inside
// closes the menu, whatever state it was in.
#[component]
pub fn MobileMenu() -> Element {
    let state = use_view_state();

    if !(state.menu_open)() {
        return rsx! {};
    }

    rsx! {
        div { class: "mobile-menu",
            nav { class: "mobile-menu-links",
                for section in SectionId::all() {
                    a {
                        class: "mobile-menu-link",
                        href: "#{section.anchor()}",
                        onclick: move |_| state.close_menu(),
                        span { class: "mobile-menu-label", "{section.label()}" }
                        ChevronRightIcon {}
                    }
                }
            }
        }
    }
}
