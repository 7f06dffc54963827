use dioxus::prelude::*;

use content::{SectionId, profile};

#[component]
pub fn Education() -> Element {
    let entries = profile::education();
    let count = entries.len();

    rsx! {
        section { class: "section education-section", id: SectionId::Education.anchor(),
            div { class: "container",
                div { class: "section-intro",
                    span { class: "badge badge-accent", "Education / Experience" }
                    h2 { class: "section-title", "Academic Formation & Work Experience" }
                }

                div { class: "timeline",
                    for (index, entry) in entries.into_iter().enumerate() {
                        div { class: "timeline-row",
                            div { class: "timeline-marker",
                                div { class: "timeline-node",
                                    div { class: "timeline-dot" }
                                }
                                // the rule connects to the next entry, so the
                                // last row has none
                                if index != count - 1 {
                                    div { class: "timeline-rule" }
                                }
                            }

                            div { class: "card timeline-card",
                                span { class: "badge badge-period", "{entry.period}" }
                                h3 { class: "timeline-title", "{entry.title}" }
                                p { class: "timeline-institution", "{entry.institution}" }
                                p { class: "timeline-desc", "{entry.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
