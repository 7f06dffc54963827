use dioxus::prelude::*;

use content::{SectionId, profile};

#[component]
pub fn About() -> Element {
    let groups = profile::skill_groups();

    // one tab per skill category, first one open by default
    let first_category = groups[0].category;
    let mut active_category = use_signal(move || first_category);

    rsx! {
        section { class: "section about-section", id: SectionId::About.anchor(),
            div { class: "container",
                div { class: "section-intro",
                    span { class: "badge badge-accent", "About me" }
                    h2 { class: "section-title", "Get to Know Me!" }
                }

                div { class: "about-grid",
                    div { class: "about-copy",
                        h3 { class: "about-heading", "About Me" }
                        for paragraph in profile::ABOUT_PARAGRAPHS {
                            p { class: "about-paragraph", "{paragraph}" }
                        }

                        div { class: "stats-grid",
                            for stat in profile::stats() {
                                div { class: "card stat-card",
                                    div { class: "stat-value", "{stat.value}" }
                                    div { class: "stat-label", "{stat.label}" }
                                }
                            }
                        }
                    }

                    div { class: "about-skills",
                        h3 { class: "about-heading", "My Skills" }

                        div { class: "skill-tabs",
                            for group in groups.clone() {
                                button {
                                    class: if active_category() == group.category { "skill-tab active" } else { "skill-tab" },
                                    onclick: move |_| active_category.set(group.category),
                                    "{group.category}"
                                }
                            }
                        }

                        for group in groups {
                            if active_category() == group.category {
                                div { class: "skills-grid",
                                    for item in group.items {
                                        div { class: "skill-chip",
                                            span { class: "skill-dot" }
                                            span { "{item}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
