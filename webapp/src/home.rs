use dioxus::prelude::*;

use crate::components::footer::PageFooter;
use crate::scroll::{DEFAULT_SCROLL_BIAS, use_scroll_tracker};
use crate::sections::{About, Contact, Education, Hero, Projects};
use crate::view_state::use_view_state;

// the single-page portfolio: all five sections in document order.  this is
// the only page that watches window scroll, so the tracker lives and dies
// with it.
#[component]
pub fn Portfolio() -> Element {
    let state = use_view_state();

    use_scroll_tracker(state, DEFAULT_SCROLL_BIAS);

    rsx! {
        main { class: "page-content",
            Hero {}
            About {}
            Projects {}
            Education {}
            Contact {}
        }
        PageFooter {}
    }
}
