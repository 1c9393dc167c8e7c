use crate::views::components::{FieldError, TextField};
use dioxus::prelude::*;
use roster::form::{Field, FieldErrors, TeacherForm};
use types::{Departments, Status, Teacher, TeacherDraft};

/// Add/edit dialog. Passing `initial` switches it to edit mode.
#[component]
pub fn TeacherFormModal(
    #[props(default)] initial: Option<Teacher>,
    departments: Departments,
    on_close: EventHandler<()>,
    on_submit: EventHandler<TeacherDraft>,
) -> Element {
    let editing = initial.is_some();
    let mut form = use_signal(|| {
        initial
            .as_ref()
            .map(TeacherForm::from)
            .unwrap_or_default()
    });
    let mut errors = use_signal(FieldErrors::default);
    let mut picked_subject = use_signal(String::new);

    let (title, submit_label) = if editing {
        ("Edit Teacher", "Update Teacher")
    } else {
        ("Add New Teacher", "Add Teacher")
    };

    let handle_submit = {
        let departments = departments.clone();
        move |_: MouseEvent| {
            let result = form.read().validate(&departments);
            match result {
                Ok(draft) => {
                    errors.set(FieldErrors::default());
                    on_submit.call(draft);
                }
                Err(failed) => errors.set(failed),
            }
        }
    };

    let mut add_subject = move || {
        let subject = picked_subject.peek().clone();
        if form.write().add_subject(&subject) {
            picked_subject.set(String::new());
        }
    };

    let current = form.read().clone();
    let field_errors = errors.read().clone();
    let available: Vec<&'static str> = current.available_subjects().collect();

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal modal-lg",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    div { class: "form-grid",
                        TextField {
                            id: "teacher-name",
                            label: "Full Name",
                            value: current.name.clone(),
                            error: field_errors.get(Field::Name),
                            placeholder: "Enter full name",
                            oninput: move |v| form.write().name = v,
                        }
                        TextField {
                            id: "teacher-email",
                            label: "Email",
                            value: current.email.clone(),
                            error: field_errors.get(Field::Email),
                            input_type: "email",
                            placeholder: "Enter email address",
                            oninput: move |v| form.write().email = v,
                        }
                        TextField {
                            id: "teacher-phone",
                            label: "Phone",
                            value: current.phone.clone(),
                            error: field_errors.get(Field::Phone),
                            placeholder: "Enter phone number",
                            oninput: move |v| form.write().phone = v,
                        }
                        div { class: "form-group",
                            label { class: "form-label", r#for: "teacher-department", "Department" }
                            select {
                                id: "teacher-department",
                                class: if field_errors.contains(Field::Department) { "form-input form-input-error" } else { "form-input" },
                                value: "{current.department}",
                                onchange: move |e| form.write().department = e.value(),
                                option { value: "", disabled: true, "Select department" }
                                for department in departments.iter() {
                                    option {
                                        key: "{department}",
                                        value: "{department}",
                                        selected: current.department == department,
                                        "{department}"
                                    }
                                }
                            }
                            FieldError { message: field_errors.get(Field::Department) }
                        }
                        TextField {
                            id: "teacher-address",
                            label: "Address",
                            value: current.address.clone(),
                            error: field_errors.get(Field::Address),
                            placeholder: "Enter address",
                            oninput: move |v| form.write().address = v,
                        }
                        div { class: "form-group",
                            label { class: "form-label", r#for: "teacher-status", "Status" }
                            select {
                                id: "teacher-status",
                                class: "form-input",
                                value: "{current.status.as_str()}",
                                onchange: move |e| {
                                    if let Ok(status) = e.value().parse::<Status>() {
                                        form.write().status = status;
                                    }
                                },
                                for status in Status::ALL {
                                    option {
                                        key: "{status.as_str()}",
                                        value: status.as_str(),
                                        selected: current.status == status,
                                        "{status.label()}"
                                    }
                                }
                            }
                        }
                        TextField {
                            id: "teacher-experience",
                            label: "Experience (years)",
                            value: current.experience.clone(),
                            error: field_errors.get(Field::Experience),
                            input_type: "number",
                            oninput: move |v| form.write().experience = v,
                        }
                    }

                    div { class: "form-group",
                        label { class: "form-label", r#for: "teacher-subject", "Subjects" }
                        div { class: "subject-picker",
                            select {
                                id: "teacher-subject",
                                class: "form-input",
                                value: "{picked_subject}",
                                onchange: move |e| picked_subject.set(e.value()),
                                option { value: "", "Select a subject" }
                                for subject in available {
                                    option { key: "{subject}", value: subject, "{subject}" }
                                }
                            }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                disabled: picked_subject.read().is_empty(),
                                onclick: move |_| add_subject(),
                                "Add"
                            }
                        }
                        div { class: "subject-list",
                            for subject in current.subjects.clone() {
                                span { key: "{subject}", class: "badge badge-outline badge-removable",
                                    "{subject}"
                                    button {
                                        class: "badge-remove",
                                        r#type: "button",
                                        title: "Remove {subject}",
                                        onclick: {
                                            let subject = subject.clone();
                                            move |_| form.write().remove_subject(&subject)
                                        },
                                        "×"
                                    }
                                }
                            }
                        }
                        FieldError { message: field_errors.get(Field::Subjects) }
                    }

                    div { class: "form-group",
                        label { class: "form-label", r#for: "teacher-bio", "Bio" }
                        textarea {
                            id: "teacher-bio",
                            class: "form-input",
                            rows: "3",
                            placeholder: "Brief description about the teacher",
                            value: "{current.bio}",
                            oninput: move |e| form.write().bio = e.value(),
                        }
                    }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: handle_submit,
                        "{submit_label}"
                    }
                }
            }
        }
    }
}
