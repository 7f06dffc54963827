use dioxus::prelude::*;

// feather-style 24x24 stroke icons, inlined so the site ships no icon font.
// sizing is left to the stylesheet (.icon scales with its container).
fn icon(body: Element) -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {body}
        }
    }
}

#[component]
pub fn SunIcon() -> Element {
    icon(rsx! {
        circle { cx: "12", cy: "12", r: "4" }
        path { d: "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" }
    })
}

#[component]
pub fn MoonIcon() -> Element {
    icon(rsx! {
        path { d: "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" }
    })
}

#[component]
pub fn MenuIcon() -> Element {
    icon(rsx! {
        path { d: "M3 6h18M3 12h18M3 18h18" }
    })
}

#[component]
pub fn CloseIcon() -> Element {
    icon(rsx! {
        path { d: "M18 6 6 18M6 6l12 12" }
    })
}

#[component]
pub fn GithubIcon() -> Element {
    icon(rsx! {
        path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65S8.93 17.38 9 18v4" }
        path { d: "M9 18c-4.51 2-5-2-7-2" }
    })
}

#[component]
pub fn LinkedinIcon() -> Element {
    icon(rsx! {
        path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4V9h4v1.5A6.3 6.3 0 0 1 16 8z" }
        rect { x: "2", y: "9", width: "4", height: "12" }
        circle { cx: "4", cy: "4", r: "2" }
    })
}

#[component]
pub fn MailIcon() -> Element {
    icon(rsx! {
        rect { x: "2", y: "4", width: "20", height: "16", rx: "2" }
        path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
    })
}

#[component]
pub fn ExternalLinkIcon() -> Element {
    icon(rsx! {
        path { d: "M15 3h6v6M10 14 21 3" }
        path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
    })
}

#[component]
pub fn ArrowRightIcon() -> Element {
    icon(rsx! {
        path { d: "M5 12h14M12 5l7 7-7 7" }
    })
}

#[component]
pub fn ChevronRightIcon() -> Element {
    icon(rsx! {
        path { d: "m9 18 6-6-6-6" }
    })
}
