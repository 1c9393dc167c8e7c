use crate::views::components::{Avatar, StatusBadge, SubjectBadges};
use dioxus::prelude::*;
use types::{Teacher, TeacherId};

#[component]
pub fn TeacherGrid(
    teachers: Vec<Teacher>,
    on_view: EventHandler<TeacherId>,
    on_edit: EventHandler<Teacher>,
    on_delete: EventHandler<Teacher>,
) -> Element {
    rsx! {
        div { class: "teacher-grid",
            for teacher in teachers {
                TeacherCard {
                    key: "{teacher.id}",
                    teacher: teacher.clone(),
                    on_view,
                    on_edit,
                    on_delete,
                }
            }
        }
    }
}

#[component]
fn TeacherCard(
    teacher: Teacher,
    on_view: EventHandler<TeacherId>,
    on_edit: EventHandler<Teacher>,
    on_delete: EventHandler<Teacher>,
) -> Element {
    rsx! {
        div { class: "card teacher-card",
            div { class: "teacher-card-header",
                div { class: "teacher-card-identity",
                    Avatar { teacher: teacher.clone() }
                    div {
                        h3 { class: "teacher-card-name", "{teacher.name}" }
                        p { class: "text-muted", "{teacher.department}" }
                    }
                }
                RecordActions { teacher: teacher.clone(), on_view, on_edit, on_delete }
            }
            div { class: "teacher-card-body",
                div { class: "teacher-card-meta",
                    StatusBadge { status: teacher.status }
                    span { class: "text-muted text-sm", "{teacher.experience} years exp." }
                }
                ul { class: "contact-list",
                    li { class: "truncate", "✉ {teacher.email}" }
                    li { "☎ {teacher.phone}" }
                    li { class: "truncate", "⌂ {teacher.address}" }
                }
                SubjectBadges { subjects: teacher.subjects.clone(), suffix: " more".to_string() }
            }
        }
    }
}

#[component]
pub fn TeacherTable(
    teachers: Vec<Teacher>,
    on_view: EventHandler<TeacherId>,
    on_edit: EventHandler<Teacher>,
    on_delete: EventHandler<Teacher>,
) -> Element {
    rsx! {
        div { class: "card table-container",
            table {
                thead {
                    tr {
                        th { "Teacher" }
                        th { "Department" }
                        th { "Contact" }
                        th { "Status" }
                        th { "Experience" }
                        th { "Subjects" }
                        th { class: "table-actions" }
                    }
                }
                tbody {
                    for teacher in teachers {
                        tr { key: "{teacher.id}",
                            td {
                                div { class: "teacher-cell",
                                    Avatar { teacher: teacher.clone() }
                                    div {
                                        div { class: "teacher-cell-name", "{teacher.name}" }
                                        div { class: "text-muted text-sm", "{teacher.email}" }
                                    }
                                }
                            }
                            td { "{teacher.department}" }
                            td {
                                div { class: "text-sm", "☎ {teacher.phone}" }
                                div { class: "text-muted text-sm", "⌂ {teacher.address}" }
                            }
                            td { StatusBadge { status: teacher.status } }
                            td { "{teacher.experience} years" }
                            td { SubjectBadges { subjects: teacher.subjects.clone() } }
                            td {
                                RecordActions { teacher: teacher.clone(), on_view, on_edit, on_delete }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The "⋮" menu on each card and row.
#[component]
fn RecordActions(
    teacher: Teacher,
    on_view: EventHandler<TeacherId>,
    on_edit: EventHandler<Teacher>,
    on_delete: EventHandler<Teacher>,
) -> Element {
    let mut open = use_signal(|| false);
    let teacher_id = teacher.id;

    rsx! {
        div { class: "dropdown",
            button {
                class: "btn btn-ghost btn-icon",
                title: "Actions",
                onclick: move |_| open.toggle(),
                "⋮"
            }
            if open() {
                div { class: "dropdown-backdrop", onclick: move |_| open.set(false) }
                div { class: "dropdown-menu",
                    button {
                        class: "dropdown-item",
                        onclick: move |_| {
                            open.set(false);
                            on_view.call(teacher_id);
                        },
                        "View Profile"
                    }
                    button {
                        class: "dropdown-item",
                        onclick: {
                            let teacher = teacher.clone();
                            move |_| {
                                open.set(false);
                                on_edit.call(teacher.clone());
                            }
                        },
                        "Edit"
                    }
                    button {
                        class: "dropdown-item dropdown-item-danger",
                        onclick: {
                            let teacher = teacher.clone();
                            move |_| {
                                open.set(false);
                                on_delete.call(teacher.clone());
                            }
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}

#[component]
pub fn DeleteConfirmModal(
    teacher_name: String,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal modal-sm",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "Delete Teacher" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    p { "Are you sure you want to delete " strong { "{teacher_name}" } "?" }
                    p { class: "text-muted", "This action cannot be undone." }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}
