use dioxus::prelude::*;

use content::{SectionId, profile};

use crate::components::icons::{ArrowRightIcon, GithubIcon, LinkedinIcon, MailIcon};

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "section hero-section", id: SectionId::Home.anchor(),
            div { class: "container hero-grid",
                div { class: "hero-copy",
                    span { class: "badge badge-accent", "{profile::ROLE}" }
                    h1 { class: "hero-title",
                        "Hi, I'm "
                        span { class: "gradient-text", "{profile::NAME}" }
                    }
                    p { class: "hero-subtitle", "{profile::TAGLINE}" }

                    div { class: "hero-actions",
                        a { class: "btn btn-primary btn-lg", href: "#projects",
                            "View Projects"
                            ArrowRightIcon {}
                        }
                        a {
                            class: "btn btn-outline btn-lg",
                            href: "/assets/cv.pdf",
                            download: "cv.pdf",
                            "Download CV"
                        }
                    }

                    div { class: "hero-social",
                        a {
                            class: "social-link",
                            href: profile::GITHUB_URL,
                            target: "_blank",
                            aria_label: "GitHub",
                            GithubIcon {}
                        }
                        a {
                            class: "social-link",
                            href: profile::LINKEDIN_URL,
                            target: "_blank",
                            aria_label: "LinkedIn",
                            LinkedinIcon {}
                        }
                        a {
                            class: "social-link",
                            href: "mailto:{profile::EMAIL}",
                            aria_label: "Email",
                            MailIcon {}
                        }
                    }
                }

                div { class: "hero-portrait",
                    div { class: "portrait-glow" }
                    div { class: "portrait-frame",
                        img {
                            class: "portrait-image",
                            src: profile::PORTRAIT,
                            alt: "{profile::NAME}",
                        }
                    }
                }
            }
        }
    }
}
