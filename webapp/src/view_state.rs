use dioxus::prelude::*;

use content::SectionId;

// light/dark flag mirrored onto the document root by the layout effect
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

// ViewState
//
// the three independent pieces of page-level ui state.  the root layout
// creates exactly one instance and shares it through context, so every
// component reads and writes the same signals without reaching for a
// global.  nothing outlives the page: no storage, no cross-reload state.
#[derive(Clone, Copy)]
pub struct ViewState {
    pub active_section: Signal<SectionId>,
    pub menu_open: Signal<bool>,
    pub theme: Signal<Theme>,
}

impl ViewState {
    // called exactly once, from the layout component that owns the page
    pub fn provide() -> Self {
        use_context_provider(|| Self {
            active_section: Signal::new(SectionId::Home),
            menu_open: Signal::new(false),
            theme: Signal::new(Theme::Dark),
        })
    }

    pub fn toggle_theme(mut self) {
        let next = (self.theme)().toggled();
        self.theme.set(next);
    }

    pub fn toggle_menu(mut self) {
        let open = !(self.menu_open)();
        self.menu_open.set(open);
    }

    // menu links always close the menu, whatever state it was in
    pub fn close_menu(mut self) {
        self.menu_open.set(false);
    }

    pub fn set_active_section(mut self, section: SectionId) {
        if (self.active_section)() != section {
            tracing::debug!("active section -> {section}");
            self.active_section.set(section);
        }
    }
}

pub fn use_view_state() -> ViewState {
    use_context()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_is_its_own_inverse() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_only_dark_carries_the_marker() {
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }
}
