use dioxus::prelude::*;

use content::profile;

use crate::components::footer::PageFooter;
use crate::components::project_card::ProjectCard;

// standalone catalog page with every project, reachable from the home
// page's "View More" link
#[component]
pub fn ProjectIndex() -> Element {
    rsx! {
        main { class: "page-content",
            section { class: "section projects-section", id: "projects",
                div { class: "container",
                    div { class: "section-intro",
                        span { class: "badge badge-accent", "Projects" }
                        h2 { class: "section-title", "My recent work" }
                        p { class: "section-subtitle",
                            "Here's a selection of projects I've worked on recently."
                        }
                    }

                    div { class: "projects-grid",
                        for project in profile::all_projects() {
                            ProjectCard { project }
                        }
                    }
                }
            }
            PageFooter {}
        }
    }
}
