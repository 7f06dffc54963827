use std::rc::Rc;

use dioxus::prelude::*;

use gloo_console::error as console_error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Document;

use content::SectionId;

use crate::common::dom;
use crate::view_state::ViewState;

// fixed lookahead added to the raw scroll offset before matching, so the
// section sliding under the fixed header counts as current slightly early
pub const DEFAULT_SCROLL_BIAS: f64 = 100.0;

// measured extent of one rendered section, relative to the document top
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

// which section is current for a given scroll offset.  the scan is
// unconditional and never short-circuits, so if bounds ever overlap the
// last match in document order wins; with no match at all the caller keeps
// its previous answer rather than resetting to "none".
pub fn classify_section(
    sections: &[SectionBounds],
    scroll_y: f64,
    bias: f64,
) -> Option<SectionId> {
    let probe = scroll_y + bias;

    let mut current = None;

    for section in sections {
        if probe >= section.top && probe < section.top + section.height {
            current = Some(section.id);
        }
    }

    current
}

// offsets are read fresh on every event; sections not currently rendered
// are skipped
fn measure_sections(document: &Document) -> Vec<SectionBounds> {
    SectionId::all()
        .into_iter()
        .filter_map(|id| {
            let element = document.get_element_by_id(id.anchor())?;
            let element = element.dyn_into::<web_sys::HtmlElement>().ok()?;

            Some(SectionBounds {
                id,
                top: f64::from(element.offset_top()),
                height: f64::from(element.offset_height()),
            })
        })
        .collect()
}

fn on_scroll(state: ViewState, bias: f64) {
    let (window, document) = match (dom::window(), dom::document()) {
        (Ok(window), Ok(document)) => (window, document),
        _ => return,
    };

    let scroll_y = window.scroll_y().unwrap_or(0.0);

    if let Some(section) = classify_section(&measure_sections(&document), scroll_y, bias) {
        state.set_active_section(section);
    }
}

// the window scroll subscription, held for exactly as long as the page that
// created it.  dropping the guard removes the listener no matter how the
// teardown was triggered, so remounts never accumulate handlers.
struct ScrollListener {
    window: web_sys::Window,
    handler: Closure<dyn FnMut()>,
}

impl ScrollListener {
    fn attach(state: ViewState, bias: f64) -> anyhow::Result<Self> {
        let window = dom::window()?;

        let handler = Closure::wrap(Box::new(move || on_scroll(state, bias)) as Box<dyn FnMut()>);

        window
            .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
            .map_err(|_| anyhow::Error::msg("failed to subscribe to window scroll events"))?;

        tracing::debug!("scroll tracker attached with {bias}px bias");

        Ok(Self { window, handler })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        self.window
            .remove_event_listener_with_callback("scroll", self.handler.as_ref().unchecked_ref())
            .unwrap_or_else(|_| console_error!("failed to remove scroll listener"));

        tracing::debug!("scroll tracker detached");
    }
}

// subscribe the calling page to window scroll events for as long as it is
// mounted.  handlers run at native scroll-event frequency; there is no
// throttling layer.
pub fn use_scroll_tracker(state: ViewState, bias: f64) {
    use_hook(|| {
        Rc::new(
            ScrollListener::attach(state, bias)
                .map_err(|err| console_error!(format!("scroll tracker unavailable: {err}")))
                .ok(),
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_section_page() -> Vec<SectionBounds> {
        vec![
            SectionBounds {
                id: SectionId::Home,
                top: 0.0,
                height: 800.0,
            },
            SectionBounds {
                id: SectionId::About,
                top: 800.0,
                height: 800.0,
            },
        ]
    }

    #[test]
    fn test_probe_selects_containing_section() {
        let sections = two_section_page();
        assert_eq!(
            classify_section(&sections, 750.0, 100.0),
            Some(SectionId::About)
        );
        assert_eq!(
            classify_section(&sections, 0.0, 100.0),
            Some(SectionId::Home)
        );
    }

    #[test]
    fn test_interval_is_half_open() {
        let sections = two_section_page();
        // probe exactly on the boundary belongs to the next section
        assert_eq!(
            classify_section(&sections, 700.0, 100.0),
            Some(SectionId::About)
        );
    }

    #[test]
    fn test_no_match_yields_none() {
        let sections = two_section_page();
        assert_eq!(classify_section(&sections, 2000.0, 100.0), None);
        assert_eq!(classify_section(&[], 0.0, 100.0), None);
    }

    #[test]
    fn test_last_match_wins_on_overlap() {
        let sections = vec![
            SectionBounds {
                id: SectionId::Home,
                top: 0.0,
                height: 1000.0,
            },
            SectionBounds {
                id: SectionId::About,
                top: 800.0,
                height: 800.0,
            },
        ];
        assert_eq!(
            classify_section(&sections, 850.0, 0.0),
            Some(SectionId::About)
        );
    }

    #[test]
    fn test_bias_shifts_the_probe() {
        let sections = vec![
            SectionBounds {
                id: SectionId::Home,
                top: 0.0,
                height: 400.0,
            },
            SectionBounds {
                id: SectionId::About,
                top: 400.0,
                height: 400.0,
            },
        ];
        assert_eq!(
            classify_section(&sections, 150.0, 100.0),
            Some(SectionId::Home)
        );
        assert_eq!(
            classify_section(&sections, 150.0, 300.0),
            Some(SectionId::About)
        );
    }
}
