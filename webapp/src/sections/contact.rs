use dioxus::prelude::*;

use content::{SectionId, profile};

use crate::components::icons::{GithubIcon, LinkedinIcon, MailIcon};

// the form is presentational: the fields exist but nothing submits them
// anywhere, so native form navigation is suppressed
#[component]
pub fn Contact() -> Element {
    rsx! {
        section { class: "section contact-section", id: SectionId::Contact.anchor(),
            div { class: "container",
                div { class: "section-intro",
                    span { class: "badge badge-accent", "Contact" }
                    h2 { class: "section-title", "Connect With Me" }
                    p { class: "section-subtitle",
                        "I'm here to help with any questions or collaboration opportunities."
                    }
                }

                div { class: "card contact-card",
                    div { class: "contact-info",
                        h3 { class: "contact-heading", "Contact Information" }
                        p { class: "contact-blurb",
                            "Complete the form and I'll get back to you as soon as possible."
                        }

                        ul { class: "contact-channels",
                            li {
                                MailIcon {}
                                span { "{profile::EMAIL}" }
                            }
                            li {
                                GithubIcon {}
                                span { "github.com/lokeshsixberries" }
                            }
                            li {
                                LinkedinIcon {}
                                span { "linkedin.com/in/lokeshsharma9895" }
                            }
                        }
                    }

                    form { class: "contact-form",
                        onsubmit: move |event| event.prevent_default(),

                        div { class: "form-row",
                            div { class: "form-field",
                                label { r#for: "name", "Name" }
                                input { class: "form-input", id: "name", name: "name", r#type: "text" }
                            }
                            div { class: "form-field",
                                label { r#for: "email", "Email" }
                                input { class: "form-input", id: "email", name: "email", r#type: "email" }
                            }
                        }

                        div { class: "form-field",
                            label { r#for: "subject", "Subject" }
                            input { class: "form-input", id: "subject", name: "subject", r#type: "text" }
                        }

                        div { class: "form-field",
                            label { r#for: "message", "Message" }
                            textarea { class: "form-input", id: "message", name: "message", rows: "5" }
                        }

                        button { class: "btn btn-primary btn-block", r#type: "submit", "Send message" }
                    }
                }
            }
        }
    }
}
