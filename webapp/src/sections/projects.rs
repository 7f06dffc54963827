use dioxus::prelude::*;
use dioxus_router::prelude::*;

use content::{SectionId, profile};

use crate::Route;
use crate::components::project_card::ProjectCard;

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { class: "section projects-section", id: SectionId::Projects.anchor(),
            div { class: "container",
                div { class: "section-intro",
                    span { class: "badge badge-accent", "Projects" }
                    h2 { class: "section-title", "My recent work" }
                    p { class: "section-subtitle",
                        "Here's a selection of projects I've worked on recently."
                    }
                }

                div { class: "projects-grid",
                    for project in profile::featured_projects() {
                        ProjectCard { project }
                    }
                }

                div { class: "section-more",
                    Link { class: "btn btn-outline", to: Route::ProjectIndex {}, "View More" }
                }
            }
        }
    }
}
