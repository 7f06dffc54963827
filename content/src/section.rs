use std::fmt;

use serde::Serialize;

// the distinct content regions of the single-page layout, in document order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Education,
    Contact,
}

impl SectionId {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Home,
            Self::About,
            Self::Projects,
            Self::Education,
            Self::Contact,
        ]
    }

    // the DOM id of the rendered section element, doubling as the URL fragment
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Education => "Education",
            Self::Contact => "Contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::all().into_iter().find(|id| id.anchor() == anchor)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.anchor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_document_order_starts_at_home() {
        assert_eq!(SectionId::all().first(), Some(&SectionId::Home));
    }

    #[test]
    fn test_anchors_are_unique() {
        let anchors: HashSet<_> = SectionId::all().iter().map(|id| id.anchor()).collect();
        assert_eq!(anchors.len(), SectionId::all().len());
    }

    #[test]
    fn test_from_anchor_inverts_anchor() {
        for id in SectionId::all() {
            assert_eq!(SectionId::from_anchor(id.anchor()), Some(id));
        }
    }

    #[test]
    fn test_from_anchor_rejects_unknown_ids() {
        assert_eq!(SectionId::from_anchor("footer"), None);
        assert_eq!(SectionId::from_anchor(""), None);
    }
}
