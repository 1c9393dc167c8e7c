use crate::views::components::{Avatar, StatusBadge};
use dioxus::prelude::*;
use types::Teacher;

#[component]
pub fn ProfileModal(teacher: Teacher, on_close: EventHandler<()>) -> Element {
    let added_on = teacher
        .id
        .created_at()
        .map(|ts| ts.strftime("%b %d, %Y").to_string());

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal modal-lg",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "Teacher Profile" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    div { class: "profile-header",
                        Avatar { teacher: teacher.clone(), large: true }
                        div { class: "profile-identity",
                            h3 { class: "profile-name", "{teacher.name}" }
                            p { class: "text-muted", "{teacher.department}" }
                            div { class: "profile-meta",
                                StatusBadge { status: teacher.status }
                                span { class: "text-muted text-sm", "{teacher.experience} years experience" }
                            }
                        }
                    }

                    div { class: "profile-section",
                        h4 { class: "profile-section-title", "Contact Information" }
                        dl { class: "detail-list",
                            dt { "Email" }
                            dd { a { href: "mailto:{teacher.email}", "{teacher.email}" } }
                            dt { "Phone" }
                            dd { "{teacher.phone}" }
                            dt { "Address" }
                            dd { "{teacher.address}" }
                        }
                    }

                    div { class: "profile-section",
                        h4 { class: "profile-section-title", "Subjects" }
                        div { class: "subject-list",
                            for subject in teacher.subjects.iter() {
                                span { key: "{subject}", class: "badge badge-primary", "{subject}" }
                            }
                        }
                    }

                    if let Some(bio) = teacher.bio.as_ref() {
                        div { class: "profile-section",
                            h4 { class: "profile-section-title", "About" }
                            p { class: "profile-bio", "{bio}" }
                        }
                    }

                    if let Some(added_on) = added_on {
                        p { class: "text-muted text-sm", "Added on {added_on}" }
                    }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
