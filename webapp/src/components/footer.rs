use dioxus::prelude::*;

use content::profile;

use crate::common;
use crate::components::icons::{GithubIcon, LinkedinIcon, MailIcon};

#[component]
pub fn PageFooter() -> Element {
    rsx! {
        footer { class: "page-footer",
            div { class: "container footer-inner",
                span { class: "footer-copyright",
                    "© {common::current_year()} {profile::NAME}. All rights reserved."
                }

                div { class: "footer-social",
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
        }
    }
}
