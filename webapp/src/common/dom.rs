use anyhow;

use gloo_console::error as console_error;
use web_sys::{Document, Element, Window};

use crate::view_state::Theme;

// css class on the document root that switches the dark design tokens
const DARK_CLASS: &str = "dark";

pub fn window() -> anyhow::Result<Window> {
    web_sys::window().ok_or_else(|| anyhow::Error::msg("no window in this context"))
}

pub fn document() -> anyhow::Result<Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow::Error::msg("no document in this context"))
}

fn document_root() -> anyhow::Result<Element> {
    document()?
        .document_element()
        .ok_or_else(|| anyhow::Error::msg("document has no root element"))
}

// mirror the theme flag onto the document root.  classList add/remove are
// idempotent, so reapplying the current theme changes nothing.
pub fn apply_theme(theme: Theme) {
    let sync = || -> anyhow::Result<()> {
        let class_list = document_root()?.class_list();

        let result = if theme.is_dark() {
            class_list.add_1(DARK_CLASS)
        } else {
            class_list.remove_1(DARK_CLASS)
        };

        result.map_err(|_| anyhow::Error::msg("failed to update root class list"))
    };

    sync().unwrap_or_else(|err| console_error!(format!("failed to apply theme: {err}")));
}
