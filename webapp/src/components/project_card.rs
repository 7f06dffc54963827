use dioxus::prelude::*;

use content::profile::Project;

use crate::components::icons::{ExternalLinkIcon, GithubIcon};

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    pub project: Project,
}

// one catalog entry: image with a hover overlay for the source/demo links,
// then title, description, and technology badges
#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;

    rsx! {
        article { class: "card project-card",
            div { class: "project-media",
                img { class: "project-image", src: project.image, alt: project.title }
                div { class: "project-overlay",
                    a {
                        class: "project-overlay-link",
                        href: project.github,
                        aria_label: "Source code",
                        GithubIcon {}
                    }
                    a {
                        class: "project-overlay-link",
                        href: project.demo,
                        aria_label: "Live demo",
                        ExternalLinkIcon {}
                    }
                }
            }

            div { class: "project-body",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-desc", "{project.description}" }
                div { class: "project-tags",
                    for tech in project.technologies {
                        span { class: "badge badge-muted", "{tech}" }
                    }
                }
            }
        }
    }
}
